//! Update function for the justification form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state through `FormController` and returns whether to re-render.
//!
//! Key behaviors
//! - Justification edits are stored verbatim and validated as the user types.
//! - A rejected attachment is dropped and the file picker is cleared.
//! - Submitting validates everything, then sends the payload in the background
//!   and reports back with `Msg::SubmissionFinished`.
//! - Failures become toast notifications (Portuguese) and return the form to
//!   an editable state.

use common::model::field::Field;
use common::submission::SubmitBlocked;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::show_error_toast;
use super::messages::Msg;
use super::state::{JustificationForm, SelectedFile};
use super::submit::send_justification;

pub fn update(
    component: &mut JustificationForm,
    ctx: &Context<JustificationForm>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateJustification(value) => component.form.edit_field(Field::Justification, value),
        Msg::FileSelected(file) => {
            if component
                .form
                .set_attachment(file.map(SelectedFile::new))
                .is_err()
            {
                component.clear_file_input();
            }
            true
        }
        Msg::Submit => match component.form.begin_submit() {
            Ok(payload) => {
                gloo_console::log!(
                    "Enviando justificativa; partes:",
                    payload.part_count(),
                    "anexo:",
                    payload.attachment.is_some()
                );
                let config = component.config.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = send_justification(&config, &payload).await;
                    link.send_message(Msg::SubmissionFinished(outcome));
                });
                true
            }
            Err(SubmitBlocked::Invalid) => {
                show_error_toast(&SubmitBlocked::Invalid.to_string());
                true
            }
            Err(blocked) => {
                gloo_console::warn!(blocked.to_string());
                false
            }
        },
        Msg::SubmissionFinished(outcome) => {
            if let Err(error) = &outcome {
                gloo_console::error!(error.to_string());
                show_error_toast(error.user_message());
            }
            component.form.finish_submit(&outcome)
        }
        Msg::BackToForm => {
            component.form.back_to_form();
            component.clear_file_input();
            true
        }
    }
}
