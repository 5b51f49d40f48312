#![forbid(unsafe_code)]

//! One live toast and its lifecycle state machine.
//!
//! Phases: `Idle | Scheduled → Paused ⇄ Scheduled → Fading → Removed`.
//! Toasts with auto-hide start in `Scheduled`; toasts without rest in
//! `Idle`. Manual dismissal jumps straight to `Fading` from any live phase.
//!
//! Hovering pauses the countdown by clearing both the hide timer and the
//! progress interval; leaving re-arms both with the original full delay and
//! rebuilds the progress bar at 100%. Elapsed time is deliberately
//! forgotten across a pause.
//!
//! Timer handles are exclusively owned by the instance and always cleared
//! before re-arming, so a canceled countdown can never fire a stale removal
//! or progress update.

use crate::markup::{self, BuiltToast};
use crate::options::{Progress, ToastOptions};
use crate::position::Vertical;
use crate::progress::ProgressIndicator;
use crate::scroll::ScrollLock;
use crate::toaster::ToastId;
use crate::{Kind, Position};
use crouton_dom::{NodeId, Page, TimerHandle};
use std::time::Duration;

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible with no auto-hide armed.
    Idle,
    /// Countdown running.
    Scheduled,
    /// Countdown suspended by pointer hover.
    Paused,
    /// Fade-out running; removal timer armed.
    Fading,
    /// Element detached from the document. Terminal.
    Removed,
}

/// Pointer and gesture events a host delivers to a toast.
///
/// The host maps its native events to these variants, the same way a
/// terminal application maps key codes before handing them to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the toast: pause the countdown.
    Enter,
    /// Pointer left the toast: restart the countdown, release scroll lock.
    Leave,
    /// Wheel scrolled over the toast: suppress background scroll.
    Wheel,
    /// Touch gesture started on the toast: pin the page.
    TouchStart,
    /// Touch gesture ended: unpin and restore scroll.
    TouchEnd,
    /// The close control was activated.
    CloseClick,
}

/// A live toast.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    built: BuiltToast,
    container: NodeId,
    phase: Phase,
    kind: Kind,
    position: Position,
    dismissible: bool,
    /// Original full hide delay; `None` disables auto-hide.
    delay: Option<Duration>,
    animation: Duration,
    progress_placement: Progress,
    hide_timer: Option<TimerHandle>,
    progress_timer: Option<TimerHandle>,
    removal_timer: Option<TimerHandle>,
    progress: Option<ProgressIndicator>,
    scroll: ScrollLock,
}

impl Toast {
    /// Builds, attaches, and starts one toast from resolved options.
    pub(crate) fn create(page: &mut Page, options: &ToastOptions, id: ToastId) -> Self {
        let container = markup::ensure_container(&mut page.dom, options.position);
        let built = markup::build_toast(&mut page.dom, options);

        // Newest toast sits nearest the screen edge it is anchored to.
        match options.position.vertical() {
            Vertical::Top => page.dom.prepend_child(container, built.root),
            Vertical::Bottom => page.dom.append_child(container, built.root),
        }

        // Entrance fade is scheduled before any hide timer is armed; the
        // two then run concurrently.
        page.animate_style(built.root, "opacity", 0.0, 1.0, options.animation);

        let mut toast = Self {
            id,
            built,
            container,
            phase: Phase::Idle,
            kind: options.kind.clone(),
            position: options.position,
            dismissible: options.dismissible,
            delay: options.timeout.delay(),
            animation: options.animation,
            progress_placement: options.progress,
            hide_timer: None,
            progress_timer: None,
            removal_timer: None,
            progress: None,
            scroll: ScrollLock::default(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = toast.id.value(),
            kind = toast.kind.as_css(),
            position = toast.position.as_css(),
            "toast created"
        );
        if toast.delay.is_some() {
            toast.schedule(page);
        }
        toast
    }

    /// Arms the hide timer (and progress interval) for the full delay.
    fn schedule(&mut self, page: &mut Page) {
        let Some(delay) = self.delay else {
            return;
        };
        self.clear_countdown(page);

        if !self.progress_placement.is_disabled() {
            self.progress = ProgressIndicator::mount(
                &mut page.dom,
                self.built.root,
                self.progress_placement,
                self.progress.take(),
            );
            self.progress_timer = Some(page.timers.set_interval(delay / 100));
        }
        self.hide_timer = Some(page.timers.set_timeout(delay));
        self.transition(Phase::Scheduled);
    }

    /// Clears the hide timer and the progress interval.
    fn clear_countdown(&mut self, page: &mut Page) {
        if let Some(handle) = self.hide_timer.take() {
            page.timers.clear(handle);
        }
        if let Some(handle) = self.progress_timer.take() {
            page.timers.clear(handle);
        }
    }

    /// Starts the fade-out and arms the removal timer.
    fn begin_fade(&mut self, page: &mut Page) {
        self.clear_countdown(page);
        self.scroll.release(&mut page.dom);

        let from = page
            .dom
            .style(self.built.root, "opacity")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(1.0);
        page.animate_style(self.built.root, "opacity", from, 0.0, self.animation);
        self.removal_timer = Some(page.timers.set_timeout(self.animation));
        self.transition(Phase::Fading);
    }

    /// Dismisses the toast, bypassing any remaining countdown.
    pub(crate) fn dismiss(&mut self, page: &mut Page) -> bool {
        match self.phase {
            Phase::Idle | Phase::Scheduled | Phase::Paused => {
                self.begin_fade(page);
                true
            }
            Phase::Fading | Phase::Removed => false,
        }
    }

    /// Handles an expired timer. Returns `true` when the handle belonged to
    /// this toast.
    pub(crate) fn on_timer(&mut self, page: &mut Page, handle: TimerHandle) -> bool {
        if self.hide_timer == Some(handle) {
            self.hide_timer = None;
            if self.phase == Phase::Scheduled {
                self.begin_fade(page);
            }
            return true;
        }
        if self.progress_timer == Some(handle) {
            let exhausted = match self.progress.as_mut() {
                Some(indicator) => !indicator.step(&mut page.dom),
                None => true,
            };
            if exhausted {
                if let Some(handle) = self.progress_timer.take() {
                    page.timers.clear(handle);
                }
            }
            return true;
        }
        if self.removal_timer == Some(handle) {
            self.removal_timer = None;
            if self.phase == Phase::Fading {
                page.dom.remove(self.built.root);
                self.progress = None;
                self.transition(Phase::Removed);
            }
            return true;
        }
        false
    }

    /// Handles a pointer or gesture event.
    pub(crate) fn pointer(&mut self, page: &mut Page, event: PointerEvent) {
        if self.phase == Phase::Removed {
            return;
        }
        match event {
            PointerEvent::Enter => {
                if self.phase == Phase::Scheduled {
                    self.clear_countdown(page);
                    self.transition(Phase::Paused);
                }
            }
            PointerEvent::Leave => {
                if self.phase == Phase::Paused {
                    // Restart from the full original delay; elapsed time is
                    // forgotten on purpose.
                    self.schedule(page);
                }
                self.scroll.release(&mut page.dom);
            }
            PointerEvent::Wheel => self.scroll.wheel(&mut page.dom),
            PointerEvent::TouchStart => self.scroll.touch_start(&mut page.dom),
            PointerEvent::TouchEnd => self.scroll.touch_end(&mut page.dom),
            PointerEvent::CloseClick => {
                if self.dismissible {
                    self.dismiss(page);
                }
            }
        }
    }

    fn transition(&mut self, phase: Phase) {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = self.id.value(), from = ?self.phase, to = ?phase, "toast phase");
        self.phase = phase;
    }

    /// Identifier assigned by the owning toaster.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the toast reached its terminal phase.
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// The toast root element.
    pub fn root(&self) -> NodeId {
        self.built.root
    }

    /// The close control, when the toast is dismissible. Hosts watch this
    /// element for clicks and deliver [`PointerEvent::CloseClick`].
    pub fn close_button(&self) -> Option<NodeId> {
        self.built.close
    }

    /// The title block, when a title was configured.
    pub fn title_element(&self) -> Option<NodeId> {
        self.built.title
    }

    /// The content block holding the body markup.
    pub fn content_element(&self) -> NodeId {
        self.built.content
    }

    /// The mounted progress indicator wrapper, if any.
    pub fn progress_element(&self) -> Option<NodeId> {
        self.progress.as_ref().map(ProgressIndicator::wrapper)
    }

    /// The container the toast was inserted into.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Resolved kind.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Resolved position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the toast carries a close control.
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// The original full hide delay, if auto-hide is enabled.
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Remaining progress-bar width in percent, when an indicator is
    /// mounted.
    pub fn progress_width(&self) -> Option<u8> {
        self.progress.as_ref().map(ProgressIndicator::width)
    }
}
