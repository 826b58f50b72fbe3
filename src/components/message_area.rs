//! Transient status message under the signup form.
//!
//! Three states: hidden, success, error. Showing a message arms a one-shot
//! timer that re-hides it; a newer message overwrites the text and arms a
//! fresh timer without cancelling the old one, so a stale timer may hide the
//! newer message early. Callers should only rely on the settled state.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::constants::{CSS_ERROR, CSS_HIDDEN, CSS_SUCCESS};
use crate::dom_utils;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStatus {
    Hidden,
    Success,
    Error,
}

#[derive(Clone)]
pub struct MessageArea {
    el: Element,
}

impl MessageArea {
    pub fn new(el: Element) -> Self {
        Self { el }
    }

    pub fn show_success(&self, text: &str, hide_after_ms: u32) {
        self.show(text, CSS_SUCCESS, hide_after_ms);
    }

    pub fn show_error(&self, text: &str, hide_after_ms: u32) {
        self.show(text, CSS_ERROR, hide_after_ms);
    }

    fn show(&self, text: &str, class: &str, hide_after_ms: u32) {
        self.el.set_text_content(Some(text));
        self.el.set_class_name(class);
        dom_utils::show(&self.el);

        let el = self.el.clone();
        Timeout::new(hide_after_ms, move || {
            dom_utils::hide(&el);
        })
        .forget();
    }

    pub fn status(&self) -> MessageStatus {
        let classes = self.el.class_list();
        if classes.contains(CSS_HIDDEN) {
            MessageStatus::Hidden
        } else if classes.contains(CSS_ERROR) {
            MessageStatus::Error
        } else if classes.contains(CSS_SUCCESS) {
            MessageStatus::Success
        } else {
            MessageStatus::Hidden
        }
    }

    pub fn text(&self) -> String {
        self.el.text_content().unwrap_or_default()
    }
}
