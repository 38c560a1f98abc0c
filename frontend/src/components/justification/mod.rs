//! Supply justification form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! the webhook call and browser helpers.
//!
//! Responsibilities
//! - Seed the read-only fields from the page URL when the component is created.
//! - On first render, remove the query string from the address bar so the
//!   seeded values do not linger in history or referrers.
//! - Delegate messages to `update::update` and rendering to `view::view`.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod submit;
mod update;
mod view;

use helpers::{query_lookup, scrub_query_from_address_bar};
pub use messages::Msg;
pub use state::JustificationForm;

impl Component for JustificationForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        JustificationForm::new(crate::config::load(), query_lookup())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.url_scrubbed {
            self.url_scrubbed = true;
            scrub_query_from_address_bar();
        }
    }
}
