#![forbid(unsafe_code)]

//! Countdown progress indicator.
//!
//! A determinate bar whose fill shrinks from 100% to 0% in 100 discrete
//! steps over the active hide delay. The wrapper carries the placement class
//! (`progress-top`, `progress-bottom`, `progress-background`); the inner bar
//! holds the width style and the progressbar ARIA attributes.

use crate::options::Progress;
use crouton_dom::{Document, NodeId};

/// Number of discrete width steps over the full delay.
pub(crate) const STEPS: u8 = 100;

/// One mounted indicator: wrapper, bar, and remaining width.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProgressIndicator {
    wrapper: NodeId,
    bar: NodeId,
    width: u8,
}

impl ProgressIndicator {
    /// Mounts an indicator on `root`, removing `previous` first so repeated
    /// mounts never stack duplicates.
    ///
    /// Returns `None` when `placement` is disabled.
    pub(crate) fn mount(
        dom: &mut Document,
        root: NodeId,
        placement: Progress,
        previous: Option<ProgressIndicator>,
    ) -> Option<Self> {
        if let Some(previous) = previous {
            dom.remove(previous.wrapper);
        }
        let word = placement.as_css()?;

        let wrapper = dom.create_element("div");
        dom.add_class(wrapper, "progress");
        dom.add_class(wrapper, &format!("progress-{word}"));

        let bar = dom.create_element("div");
        dom.add_class(bar, "progress-bar");
        dom.set_attr(bar, "role", "progressbar");
        dom.set_attr(bar, "aria-valuemin", "0");
        dom.set_attr(bar, "aria-valuenow", "0");
        dom.set_attr(bar, "aria-valuemax", "100");
        dom.set_style(bar, "width", "100%");
        dom.append_child(wrapper, bar);

        if placement.prepends() {
            dom.prepend_child(root, wrapper);
        } else {
            dom.append_child(root, wrapper);
        }

        Some(Self {
            wrapper,
            bar,
            width: STEPS,
        })
    }

    /// Shrinks the bar one step. Returns `false` once the bar is empty and
    /// the caller should stop stepping.
    pub(crate) fn step(&mut self, dom: &mut Document) -> bool {
        if self.width == 0 {
            return false;
        }
        self.width -= 1;
        dom.set_style(self.bar, "width", &format!("{}%", self.width));
        self.width > 0
    }

    /// Remaining width in percent.
    pub(crate) fn width(&self) -> u8 {
        self.width
    }

    /// The wrapper element.
    pub(crate) fn wrapper(&self) -> NodeId {
        self.wrapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(dom: &mut Document) -> NodeId {
        let body = dom.body();
        let root = dom.create_element("div");
        let content = dom.create_element("div");
        dom.append_child(root, content);
        dom.append_child(body, root);
        root
    }

    #[test]
    fn disabled_placement_mounts_nothing() {
        let mut dom = Document::new();
        let root = root(&mut dom);
        assert!(ProgressIndicator::mount(&mut dom, root, Progress::Disabled, None).is_none());
        assert_eq!(dom.children(root).len(), 1);
    }

    #[test]
    fn top_and_background_prepend_bottom_appends() {
        for (placement, first) in [
            (Progress::Top, true),
            (Progress::Background, true),
            (Progress::Bottom, false),
        ] {
            let mut dom = Document::new();
            let root = root(&mut dom);
            let indicator = ProgressIndicator::mount(&mut dom, root, placement, None)
                .expect("indicator mounts");
            let children = dom.children(root);
            let index = if first { 0 } else { children.len() - 1 };
            assert_eq!(children[index], indicator.wrapper());
        }
    }

    #[test]
    fn bar_starts_full_with_aria_attrs() {
        let mut dom = Document::new();
        let root = root(&mut dom);
        let indicator =
            ProgressIndicator::mount(&mut dom, root, Progress::Top, None).expect("mounts");
        let bar = dom.children(indicator.wrapper())[0];
        assert_eq!(dom.style(bar, "width"), Some("100%"));
        assert_eq!(dom.attr(bar, "role"), Some("progressbar"));
        assert_eq!(dom.attr(bar, "aria-valuemax"), Some("100"));
        assert!(dom.has_class(indicator.wrapper(), "progress-top"));
    }

    #[test]
    fn remount_removes_previous_indicator() {
        let mut dom = Document::new();
        let root = root(&mut dom);
        let first = ProgressIndicator::mount(&mut dom, root, Progress::Top, None).expect("mounts");
        let second = ProgressIndicator::mount(&mut dom, root, Progress::Bottom, Some(first))
            .expect("mounts");
        assert!(!dom.contains(first.wrapper()));
        assert!(dom.contains(second.wrapper()));
        let bars = dom
            .children(root)
            .iter()
            .filter(|&&c| dom.has_class(c, "progress"))
            .count();
        assert_eq!(bars, 1);
    }

    #[test]
    fn steps_count_down_to_zero() {
        let mut dom = Document::new();
        let root = root(&mut dom);
        let mut indicator =
            ProgressIndicator::mount(&mut dom, root, Progress::Top, None).expect("mounts");
        let bar = dom.children(indicator.wrapper())[0];

        assert!(indicator.step(&mut dom));
        assert_eq!(dom.style(bar, "width"), Some("99%"));

        for _ in 0..98 {
            indicator.step(&mut dom);
        }
        assert_eq!(indicator.width(), 1);
        // The hundredth step writes 0% and reports exhaustion.
        assert!(!indicator.step(&mut dom));
        assert_eq!(dom.style(bar, "width"), Some("0%"));
        assert!(!indicator.step(&mut dom));
    }
}
