use crate::app::App;

mod app;
mod components;
mod config;

fn main() {
    gloo_console::log!("TECHUB: formulário de justificativa iniciado");
    yew::Renderer::<App>::new().render();
}
