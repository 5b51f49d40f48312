#![forbid(unsafe_code)]

//! Transient notification toasts.
//!
//! Toasts are small banners stacked in one of six screen corners. They fade
//! in, optionally auto-hide after a delay (with the countdown pausable by
//! pointer hover and mirrored by an optional progress bar), and can carry a
//! close control for manual dismissal.
//!
//! The library renders into a [`crouton_dom::Page`]: an explicit, owned
//! stand-in for the host page providing the element tree, cancelable
//! timers, and style tweens. The host drives everything by advancing the
//! page clock and forwarding pointer events. Nothing happens between
//! calls, which keeps every lifecycle deterministic.
//!
//! # Example
//!
//! ```rust
//! use crouton::{Progress, Timeout, ToastOptions, Toaster};
//! use crouton_dom::Page;
//! use std::time::Duration;
//!
//! let mut page = Page::new();
//! let mut toaster = Toaster::new();
//!
//! // A bare message uses the defaults: info kind, bottom-center, 3s.
//! let saved = toaster.toast(&mut page, "Saved");
//!
//! // Full options for everything else.
//! let id = toaster.toast(
//!     &mut page,
//!     ToastOptions::new()
//!         .title("Export failed")
//!         .message("The disk is full.")
//!         .kind("error")
//!         .position("top")
//!         .timeout(Timeout::After(Duration::from_secs(5)))
//!         .progress(Progress::Bottom),
//! );
//!
//! // Drive time; expired toasts fade and are removed.
//! toaster.advance(&mut page, Duration::from_secs(3));
//! toaster.advance(&mut page, Duration::from_millis(300));
//! assert!(!toaster.contains(saved));
//! assert!(toaster.contains(id));
//! ```
//!
//! Body content is caller-trusted markup, inserted verbatim; titles are
//! always HTML-escaped. See [`ToastOptions::content`].

pub mod error;
pub mod escape;
pub mod kind;
pub mod markup;
pub mod options;
pub mod position;
mod progress;
mod scroll;
pub mod toast;
pub mod toaster;

pub use error::ConfigError;
pub use escape::{html_decode, html_encode};
pub use kind::Kind;
pub use options::{Progress, Timeout, ToastOptions, ToastSpec};
pub use position::{Horizontal, Position, Vertical};
pub use scroll::SCROLL_HIDDEN_CLASS;
pub use toast::{Phase, PointerEvent, Toast};
pub use toaster::{ToastId, Toaster};
