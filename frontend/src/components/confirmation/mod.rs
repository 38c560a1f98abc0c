//! Screen shown once the webhook accepted the justification.

use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    /// Resets the form so another justification can be sent.
    pub on_back_to_form: Callback<MouseEvent>,
}

pub struct ConfirmationView;

impl Component for ConfirmationView {
    type Message = ();
    type Properties = ConfirmationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfirmationView
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="card">
                <div class="card-header centered">
                    <div class="success-badge">
                        <i class="material-icons">{"check_circle"}</i>
                    </div>
                    <h2 class="card-title">{"✅ Justificativa enviada com sucesso!"}</h2>
                </div>

                <div class="card-content centered">
                    <div class="muted stack">
                        <p><strong class="strong">{"Obrigado por enviar sua justificativa."}</strong></p>
                        <p>{"Ela foi registrada corretamente em nosso sistema e será analisada pela equipe TECHUB."}</p>
                        <p>{"Caso seja necessário, entraremos em contato por e-mail ou WhatsApp."}</p>
                    </div>

                    <div class="actions">
                        <button class="btn-primary" onclick={ctx.props().on_back_to_form.clone()}>
                            {"Enviar Nova Justificativa"}
                        </button>
                    </div>
                </div>
            </section>
        }
    }
}
