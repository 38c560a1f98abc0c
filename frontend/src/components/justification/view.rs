//! View rendering for the justification form.
//!
//! Two screens share the `PageShell` frame: the form itself and, once the
//! webhook accepted the submission, the `ConfirmationView`.
//!
//! Notes
//! - Seeded fields are rendered read-only and are never wired to input events.
//! - The submit button is enabled only while `FormController::can_submit` holds.
//! - All user-facing text is in Portuguese.

use common::model::field::Field;
use common::validation::MAX_TEXT_LENGTH;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::confirmation::ConfirmationView;
use crate::components::page_shell::PageShell;

use super::messages::Msg;
use super::state::JustificationForm;

const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png";

/// Main view function: confirmation screen when completed, the form otherwise.
pub fn view(component: &JustificationForm, ctx: &Context<JustificationForm>) -> Html {
    let link = ctx.link();

    let body = if component.form.is_completed() {
        html! { <ConfirmationView on_back_to_form={link.callback(|_| Msg::BackToForm)} /> }
    } else {
        build_form_card(component, link)
    };

    html! {
        <PageShell>
            { body }
        </PageShell>
    }
}

fn build_form_card(component: &JustificationForm, link: &Scope<JustificationForm>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="card">
            <div class="card-header centered">
                <h2 class="card-title">{"Justificativa de Troca Prematura de Suprimento"}</h2>
                <p class="muted small">
                    {"Preencha os campos abaixo para justificar a troca do suprimento identificada pelo sistema"}
                </p>
                <div class="security-note">
                    <i class="material-icons">{"verified_user"}</i>
                    <span>{"Formulário seguro - Dados validados e criptografados"}</span>
                </div>
            </div>

            <div class="card-content">
                <form class="stack-lg" onsubmit={onsubmit}>
                    { build_seeded_fields(component) }
                    { build_editable_fields(component, link) }
                    { build_submit_button(component) }
                </form>
            </div>
        </section>
    }
}

/// Read-only grid with the values that came from the URL.
fn build_seeded_fields(component: &JustificationForm) -> Html {
    html! {
        <div class="field-grid">
            { seeded_input(component, Field::SerialNumber, "print", "Número de Série da Impressora", "text", false) }
            { seeded_input(component, Field::SupplyLotId, "description", "Série do Suprimento", "text", false) }
            { seeded_input(component, Field::LastReadingAt, "event", "Data/Hora da Última Leitura", "datetime-local", false) }
            { seeded_input(component, Field::LastReadingLevel, "speed", "Nível da Última Leitura (%)", "number", false) }
            { seeded_input(component, Field::Organization, "description", "Organização", "text", true) }
            { seeded_input(component, Field::ProjectCode, "description", "Código do Projeto", "text", true) }
        </div>
    }
}

/// Renders one read-only seeded input with its label and inline error.
/// Required seeds carry the red asterisk; `wide` spans both grid columns.
fn seeded_input(
    component: &JustificationForm,
    field: Field,
    icon: &'static str,
    label: &'static str,
    input_type: &'static str,
    wide: bool,
) -> Html {
    let value = component
        .form
        .record()
        .seeds
        .get(field)
        .unwrap_or_default()
        .to_string();
    let error = component.form.errors().message(field);
    let required = Field::REQUIRED_SEEDS.contains(&field);
    let (min, max) = if field == Field::LastReadingLevel {
        (Some("0"), Some("100"))
    } else {
        (None, None)
    };

    html! {
        <div class={classes!("field", wide.then_some("wide"))}>
            <label for={field.dom_id()} class="field-label">
                <i class="material-icons">{icon}</i>
                {label}
                if required {
                    <span class="required">{" *"}</span>
                }
            </label>
            <input
                id={field.dom_id()}
                name={field.dom_id()}
                type={input_type}
                min={min}
                max={max}
                value={value}
                readonly={true}
                class={classes!("input", "readonly", error.is_some().then_some("invalid"))}
            />
            { error_line(error) }
        </div>
    }
}

/// Justification textarea with its counter, and the optional attachment picker.
fn build_editable_fields(component: &JustificationForm, link: &Scope<JustificationForm>) -> Html {
    let record = component.form.record();
    let errors = component.form.errors();
    let justification_error = errors.message(Field::Justification);
    let attachment_error = errors.message(Field::Attachment);

    let oninput = link.callback(|e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        Msg::UpdateJustification(value)
    });
    let onchange = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="editable stack">
            <div class="field">
                <label for={Field::Justification.dom_id()} class="field-label">
                    <i class="material-icons">{"description"}</i>
                    {format!("Justificativa (15-{MAX_TEXT_LENGTH} caracteres)")}
                    <span class="required">{" *"}</span>
                </label>
                <textarea
                    id={Field::Justification.dom_id()}
                    name={Field::Justification.dom_id()}
                    value={record.justification.clone()}
                    oninput={oninput}
                    placeholder="Descreva o motivo da troca prematura do suprimento..."
                    maxlength={MAX_TEXT_LENGTH.to_string()}
                    required={true}
                    class={classes!("input", "textarea", justification_error.is_some().then_some("invalid"))}
                />
                { error_line(justification_error) }
                <div class="counter muted">
                    {format!("{}/{} caracteres", record.justification.chars().count(), MAX_TEXT_LENGTH)}
                </div>
            </div>

            <div class="field">
                <label for={Field::Attachment.dom_id()} class="field-label">
                    <i class="material-icons">{"upload_file"}</i>
                    {"Anexo (opcional)"}
                </label>
                <input
                    id={Field::Attachment.dom_id()}
                    name={Field::Attachment.dom_id()}
                    type="file"
                    ref={component.file_input_ref.clone()}
                    accept={ACCEPTED_EXTENSIONS}
                    onchange={onchange}
                    class={classes!("input", "file", attachment_error.is_some().then_some("invalid"))}
                />
                { error_line(attachment_error) }
                <p class="muted small">{"Formatos aceitos: PDF, DOC, DOCX, JPG, PNG (máx. 10MB)"}</p>
            </div>
        </div>
    }
}

fn build_submit_button(component: &JustificationForm) -> Html {
    html! {
        <button type="submit" class="btn-primary full" disabled={!component.form.can_submit()}>
            if component.form.is_submitting() {
                <span class="sending">
                    <span class="spinner" />
                    {"Enviando..."}
                </span>
            } else {
                {"Enviar Justificativa"}
            }
        </button>
    }
}

fn error_line(error: Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}
