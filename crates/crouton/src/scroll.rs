#![forbid(unsafe_code)]

//! Page scroll lock during toast interaction.
//!
//! Wheel interaction over a toast toggles the `scroll-hidden` class on
//! `body`. Touch interaction additionally pins the body in place
//! (`position: fixed` with a negative `top` equal to the scroll offset) so
//! the page cannot scroll underneath the gesture, and restores the offset
//! when the gesture ends. Both locks are released together.

use crouton_dom::Document;

/// Class toggled on `body` while scrolling is suppressed.
pub const SCROLL_HIDDEN_CLASS: &str = "scroll-hidden";

/// Scroll-lock state for one toast.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScrollLock {
    pinned_offset: Option<f64>,
}

impl ScrollLock {
    /// Wheel entered the toast: suppress background scrolling.
    pub(crate) fn wheel(&self, dom: &mut Document) {
        let body = dom.body();
        dom.add_class(body, SCROLL_HIDDEN_CLASS);
    }

    /// Touch gesture started: snapshot the scroll offset and pin the body.
    pub(crate) fn touch_start(&mut self, dom: &mut Document) {
        let offset = dom.scroll_top();
        self.pinned_offset = Some(offset);
        let body = dom.body();
        dom.set_style(body, "position", "fixed");
        dom.set_style(body, "top", &format!("-{offset}px"));
        dom.set_style(body, "width", "100%");
    }

    /// Touch gesture ended: unpin the body and restore the scroll offset.
    pub(crate) fn touch_end(&mut self, dom: &mut Document) {
        let body = dom.body();
        dom.remove_style(body, "position");
        dom.remove_style(body, "top");
        dom.remove_style(body, "width");
        if let Some(offset) = self.pinned_offset.take() {
            dom.set_scroll_top(offset);
        }
        dom.remove_class(body, SCROLL_HIDDEN_CLASS);
    }

    /// Releases every form of the lock (pointer left or toast is hiding).
    pub(crate) fn release(&mut self, dom: &mut Document) {
        if self.pinned_offset.is_some() {
            self.touch_end(dom);
        } else {
            let body = dom.body();
            dom.remove_class(body, SCROLL_HIDDEN_CLASS);
        }
    }
}
