use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub children: Children,
}

/// Branded page frame shared by the form and the confirmation screen.
pub struct PageShell;

impl Component for PageShell {
    type Message = ();
    type Properties = PageShellProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageShell
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="page">
                <div class="page-column">
                    <header class="page-header">
                        <div class="brand">
                            <span class="brand-mark">
                                <i class="material-icons">{"description"}</i>
                            </span>
                            <h1>{"TECHUB"}</h1>
                        </div>
                        <p class="muted">{"Sistema de Justificativa de Troca Prematura"}</p>
                    </header>

                    { for props.children.iter() }

                    <footer class="page-footer muted">
                        <p>{"© 2024 TECHUB - Sistema de Controle de Suprimentos"}</p>
                    </footer>
                </div>
            </div>
        }
    }
}
