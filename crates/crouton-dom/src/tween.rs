#![forbid(unsafe_code)]

//! Numeric style tweens.
//!
//! [`Animations`] interpolates one inline-style property of one node from a
//! start to an end value over a duration, linearly. Frames are written on
//! [`Animations::step`]; the value written is wherever the clock stands at
//! that moment, so coarse host ticks still converge on the final value.
//!
//! Starting a tween for a `(node, property)` pair that is already animating
//! replaces the running tween (last writer wins). Tweens whose node has been
//! removed are dropped silently.

use crate::node::{Document, NodeId};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Tween {
    node: NodeId,
    property: String,
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

/// Active style tweens.
#[derive(Debug, Default)]
pub struct Animations {
    active: Vec<Tween>,
}

impl Animations {
    /// Creates an animator with no active tweens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of running tweens.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no tween is running.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Starts a tween of `property` on `node` from `from` to `to` over
    /// `duration`, beginning at clock time `start`.
    pub fn animate(
        &mut self,
        node: NodeId,
        property: &str,
        from: f64,
        to: f64,
        duration: Duration,
        start: Duration,
    ) {
        self.active
            .retain(|t| !(t.node == node && t.property == property));
        self.active.push(Tween {
            node,
            property: property.to_string(),
            from,
            to,
            start,
            duration,
        });
    }

    /// Cancels all tweens targeting `node` without writing a final frame.
    pub fn cancel(&mut self, node: NodeId) {
        self.active.retain(|t| t.node != node);
    }

    /// Writes a frame for every running tween at clock time `now` and
    /// retires the completed ones.
    pub fn step(&mut self, now: Duration, dom: &mut Document) {
        self.active.retain_mut(|tween| {
            if !dom.contains(tween.node) {
                return false;
            }
            let elapsed = now.saturating_sub(tween.start);
            let progress = if tween.duration.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f64() / tween.duration.as_secs_f64()).clamp(0.0, 1.0)
            };
            let value = tween.from + (tween.to - tween.from) * progress;
            dom.set_style(tween.node, &tween.property, &format_value(value));
            progress < 1.0
        });
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_writes_interpolated_frames() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::from_millis(200), Duration::ZERO);

        anims.step(Duration::from_millis(100), &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("0.5"));
        assert_eq!(anims.len(), 1);

        anims.step(Duration::from_millis(200), &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("1"));
        assert!(anims.is_empty());
    }

    #[test]
    fn overshoot_clamps_to_final_value() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 1.0, 0.0, Duration::from_millis(100), Duration::ZERO);

        anims.step(Duration::from_secs(5), &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("0"));
        assert!(anims.is_empty());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::ZERO, Duration::ZERO);
        anims.step(Duration::ZERO, &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("1"));
        assert!(anims.is_empty());
    }

    #[test]
    fn restart_replaces_running_tween() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::from_secs(1), Duration::ZERO);
        anims.animate(el, "opacity", 1.0, 0.0, Duration::from_secs(1), Duration::ZERO);
        assert_eq!(anims.len(), 1);
        anims.step(Duration::from_secs(1), &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("0"));
    }

    #[test]
    fn removed_node_drops_tween() {
        let mut doc = Document::new();
        let body = doc.body();
        let el = doc.create_element("div");
        doc.append_child(body, el);
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::from_secs(1), Duration::ZERO);
        doc.remove(el);
        anims.step(Duration::from_millis(500), &mut doc);
        assert!(anims.is_empty());
    }

    #[test]
    fn cancel_drops_all_tweens_for_node() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::from_secs(1), Duration::ZERO);
        anims.animate(el, "width", 0.0, 100.0, Duration::from_secs(1), Duration::ZERO);
        anims.cancel(el);
        assert!(anims.is_empty());
    }

    #[test]
    fn distinct_properties_tween_independently() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let mut anims = Animations::new();
        anims.animate(el, "opacity", 0.0, 1.0, Duration::from_millis(100), Duration::ZERO);
        anims.animate(el, "top", 0.0, 50.0, Duration::from_millis(100), Duration::ZERO);
        assert_eq!(anims.len(), 2);
        anims.step(Duration::from_millis(50), &mut doc);
        assert_eq!(doc.style(el, "opacity"), Some("0.5"));
        assert_eq!(doc.style(el, "top"), Some("25"));
    }
}
