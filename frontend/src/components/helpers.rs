//! Browser utilities shared by the console screens.
//!
//! - **User feedback**: temporary toast notifications and blocking
//!   `alert`/`confirm` prompts used for validation messages and destructive
//!   actions.
//! - **Navigation**: moving between screens by rewriting the location hash.
//! - **Input access**: reading the current value out of input and select
//!   events.

use common::routes::Route;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `body`; it removes itself after a
/// few seconds.
pub fn show_toast(message: &str, severity: Severity) {
    let background = match severity {
        Severity::Success => "rgba(46, 125, 50, 0.95)",
        Severity::Error => "rgba(198, 40, 40, 0.95)",
    };
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(6000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking yes/no question. Anything but an explicit yes counts as no.
pub fn confirm(question: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Route addressed by the current location hash.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}

/// Switches screens. The app listens to `hashchange` and re-renders.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        window.location().set_hash(&route.to_hash()).ok();
    }
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}
