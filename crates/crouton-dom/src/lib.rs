#![forbid(unsafe_code)]

//! Host-page collaborators for crouton: a retained element tree, a cancelable
//! timer service, and a numeric style-tween animator.
//!
//! Widgets never talk to a real browser. They mutate a [`Document`] (elements,
//! class lists, inline styles, tree insertion/removal), arm timers on
//! [`Timers`], and start tweens on [`Animations`]. The host owns all three,
//! bundled in a [`Page`], and drives them from its own loop:
//!
//! ```rust
//! use crouton_dom::Page;
//! use std::time::Duration;
//!
//! let mut page = Page::new();
//! let el = page.dom.create_element("div");
//! let body = page.dom.body();
//! page.dom.append_child(body, el);
//!
//! let handle = page.timers.set_timeout(Duration::from_millis(100));
//! let fired = page.advance(Duration::from_millis(100));
//! assert_eq!(fired, vec![handle]);
//! ```
//!
//! Everything is single-threaded and deterministic: time only moves when
//! [`Page::advance`] is called, which makes lifecycle behavior exactly
//! reproducible in tests.

pub mod node;
pub mod page;
pub mod timers;
pub mod tween;

pub use node::{Document, NodeId};
pub use page::Page;
pub use timers::{TimerHandle, Timers};
pub use tween::Animations;
