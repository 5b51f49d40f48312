#![forbid(unsafe_code)]

//! The page: document, timers, and animations driven as one unit.

use crate::node::{Document, NodeId};
use crate::timers::{TimerHandle, Timers};
use crate::tween::Animations;
use std::time::Duration;

/// The host environment a widget runs in.
///
/// Bundles the element tree, the timer service, and the animator so a single
/// [`Page::advance`] call moves the whole page forward: the clock ticks,
/// expired timer handles are collected for the caller to dispatch, and every
/// running tween writes its frame for the new time.
#[derive(Debug, Default)]
pub struct Page {
    pub dom: Document,
    pub timers: Timers,
    pub animations: Animations,
}

impl Page {
    /// Creates an empty page at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Advances the page by `dt`.
    ///
    /// Returns the timer handles that expired during the window, in deadline
    /// order. The caller owns dispatch; nothing fires implicitly.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let fired = self.timers.advance(dt);
        self.animations.step(self.timers.now(), &mut self.dom);
        fired
    }

    /// Starts a tween of a numeric style property at the current time.
    pub fn animate_style(
        &mut self,
        node: NodeId,
        property: &str,
        from: f64,
        to: f64,
        duration: Duration,
    ) {
        let start = self.timers.now();
        self.animations
            .animate(node, property, from, to, duration, start);
    }
}
