#![forbid(unsafe_code)]

//! Structured element construction for toasts and their containers.
//!
//! Subtrees are built node by node; no markup strings are concatenated. The
//! only raw markup in the system is the caller-supplied body content, set
//! verbatim on the content node.
//!
//! Toast shape:
//!
//! ```text
//! div.crouton.toast-<kind>
//! ├── button.close                 (dismissible only)
//! ├── span.icon.icon-<glyph>       (only when a glyph resolved)
//! └── div.crouton-body
//!     ├── div.crouton-title.ellipsis   (optional, escaped)
//!     └── div.crouton-content          (raw markup)
//! ```

use crate::escape::html_encode;
use crate::options::ToastOptions;
use crate::position::Position;
use crouton_dom::{Document, NodeId};

/// Class marking a per-position container.
pub const CONTAINER_CLASS: &str = "crouton-container";
/// Class marking a toast root element.
pub const TOAST_CLASS: &str = "crouton";
/// Class added to a toast root when it carries a close control.
pub const DISMISSIBLE_CLASS: &str = "dismissible";

/// Element ids of one built toast subtree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltToast {
    pub root: NodeId,
    pub close: Option<NodeId>,
    pub title: Option<NodeId>,
    pub content: NodeId,
}

/// Returns the container for `position`, creating it under `body` on first
/// use. Containers are never destroyed, so at most one exists per position.
pub(crate) fn ensure_container(dom: &mut Document, position: Position) -> NodeId {
    let body = dom.body();
    let vertical = position.vertical().as_css();
    let horizontal = position.horizontal().as_css();
    if let Some(existing) =
        dom.find_child_with_classes(body, &[CONTAINER_CLASS, vertical, horizontal])
    {
        return existing;
    }
    let container = dom.create_element("div");
    dom.add_class(container, CONTAINER_CLASS);
    dom.add_class(container, vertical);
    dom.add_class(container, horizontal);
    dom.append_child(body, container);
    container
}

/// Builds the detached toast subtree for `options`.
///
/// The title is HTML-escaped; the body content is inserted as raw markup.
/// The root starts fully transparent so the entrance fade has somewhere to
/// go.
pub(crate) fn build_toast(dom: &mut Document, options: &ToastOptions) -> BuiltToast {
    let root = dom.create_element("div");
    dom.add_class(root, TOAST_CLASS);
    dom.add_class(root, &format!("toast-{}", options.kind.as_css()));
    dom.set_style(root, "opacity", "0");

    let close = options.dismissible.then(|| {
        dom.add_class(root, DISMISSIBLE_CLASS);
        let button = dom.create_element("button");
        dom.add_class(button, "close");
        dom.set_attr(button, "type", "button");
        dom.set_attr(button, "aria-label", "Close");
        dom.set_text(button, "\u{d7}");
        dom.prepend_child(root, button);
        button
    });

    if let Some(glyph) = options.glyph() {
        let icon = dom.create_element("span");
        dom.add_class(icon, "icon");
        dom.add_class(icon, &format!("icon-{glyph}"));
        dom.append_child(root, icon);
    }

    let body = dom.create_element("div");
    dom.add_class(body, "crouton-body");
    dom.append_child(root, body);

    let title = options
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|raw| {
            let escaped = html_encode(raw);
            let el = dom.create_element("div");
            dom.add_class(el, "crouton-title");
            dom.add_class(el, "ellipsis");
            dom.set_attr(el, "title", &escaped);
            dom.set_text(el, &escaped);
            dom.append_child(body, el);
            el
        });

    let content = dom.create_element("div");
    dom.add_class(content, "crouton-content");
    dom.set_markup(content, options.body());
    dom.append_child(body, content);

    BuiltToast {
        root,
        close,
        title,
        content,
    }
}
