//! Browser helpers for the justification form.
//!
//! - **URL seeding**: reading the query string of the current page.
//! - **URL scrubbing**: replacing the address-bar entry with the bare path so
//!   seeded values do not stay in history.
//! - **User feedback**: temporary toast notifications.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, UrlSearchParams};

const ERROR_TOAST_BACKGROUND: &str = "rgba(198, 40, 40, 0.95)";

/// Returns a lookup over the current page's query parameters.
///
/// When there is no window or the query cannot be parsed, every key is
/// reported as absent.
pub fn query_lookup() -> impl Fn(&str) -> Option<String> {
    let params = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok());

    move |key| params.as_ref().and_then(|params| params.get(key))
}

/// Rewrites the visible URL to its path, keeping the title and not navigating.
/// Does nothing when the page has no query string.
pub fn scrub_query_from_address_bar() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let has_query = location
        .search()
        .map(|search| search.len() > 1)
        .unwrap_or(false);
    if !has_query {
        return;
    }

    let (Ok(path), Ok(history), Some(document)) =
        (location.pathname(), window.history(), window.document())
    else {
        return;
    };
    if history
        .replace_state_with_url(&JsValue::NULL, &document.title(), Some(&path))
        .is_err()
    {
        gloo_console::warn!("Não foi possível limpar os parâmetros da URL.");
    }
}

/// Displays a temporary error notification at the bottom of the screen.
///
/// The message is inserted as text, never as HTML, and line breaks are kept.
/// The toast removes itself after a few seconds.
pub fn show_error_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_attribute("role", "status").ok();
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", ERROR_TOAST_BACKGROUND).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "6px").ok();
                style.set_property("white-space", "pre-line").ok();
                style.set_property("max-width", "90vw").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
