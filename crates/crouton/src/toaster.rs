#![forbid(unsafe_code)]

//! The toast registry and factory.
//!
//! A [`Toaster`] owns the live toasts it created plus an explicit defaults
//! value. There is no global mutable state: every toaster carries its own
//! immutable [`ToastOptions`] defaults, and call sites override fields
//! either through the builder or with struct-update syntax over
//! `toaster.defaults().clone()`.
//!
//! The host wires three things through the toaster: creation
//! ([`Toaster::toast`]), pointer events ([`Toaster::pointer`]), and time
//! ([`Toaster::advance`]).

use crate::options::{ToastOptions, ToastSpec};
use crate::toast::{PointerEvent, Toast};
use crouton_dom::Page;
use std::collections::BTreeMap;
use std::time::Duration;

/// Identifier of a toast created by a [`Toaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates an id with the given value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Creates toasts and drives their lifecycles.
#[derive(Debug, Default)]
pub struct Toaster {
    defaults: ToastOptions,
    toasts: BTreeMap<u64, Toast>,
    next_id: u64,
}

impl Toaster {
    /// Creates a toaster with the process-wide default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toaster whose unspecified fields come from `defaults`
    /// instead of [`ToastOptions::default`].
    pub fn with_defaults(defaults: ToastOptions) -> Self {
        Self {
            defaults,
            toasts: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// The defaults applied to bare-message toasts; clone this as the base
    /// for struct-update overrides.
    pub fn defaults(&self) -> &ToastOptions {
        &self.defaults
    }

    /// Creates one toast.
    ///
    /// A bare `&str`/`String` is treated as a message over this toaster's
    /// defaults; a [`ToastOptions`] value is used as supplied.
    pub fn toast(&mut self, page: &mut Page, spec: impl Into<ToastSpec>) -> ToastId {
        let options = match spec.into() {
            ToastSpec::Message(message) => {
                let mut options = self.defaults.clone();
                options.content = None;
                options.text = None;
                options.message = message;
                options
            }
            ToastSpec::Options(options) => options,
        };
        let id = ToastId::new(self.next_id);
        self.next_id += 1;
        let toast = Toast::create(page, &options, id);
        self.toasts.insert(id.0, toast);
        id
    }

    /// Advances the page by `dt`, dispatches expired timers to their
    /// owning toasts, and drops the toasts that reached `Removed`.
    ///
    /// Returns the ids removed during this window. Timers armed while
    /// dispatching (a removal timer armed by a hide timer, for instance)
    /// fire on a later call.
    pub fn advance(&mut self, page: &mut Page, dt: Duration) -> Vec<ToastId> {
        for handle in page.advance(dt) {
            for toast in self.toasts.values_mut() {
                if toast.on_timer(page, handle) {
                    break;
                }
            }
        }
        let removed: Vec<ToastId> = self
            .toasts
            .iter()
            .filter(|(_, toast)| toast.is_removed())
            .map(|(&id, _)| ToastId(id))
            .collect();
        self.toasts.retain(|_, toast| !toast.is_removed());
        removed
    }

    /// Delivers a pointer or gesture event to a toast.
    ///
    /// Returns `false` when the id is unknown.
    pub fn pointer(&mut self, page: &mut Page, id: ToastId, event: PointerEvent) -> bool {
        match self.toasts.get_mut(&id.0) {
            Some(toast) => {
                toast.pointer(page, event);
                true
            }
            None => false,
        }
    }

    /// Dismisses a toast manually, bypassing any remaining countdown.
    ///
    /// Returns `false` when the id is unknown or the toast is already
    /// hiding.
    pub fn dismiss(&mut self, page: &mut Page, id: ToastId) -> bool {
        self.toasts
            .get_mut(&id.0)
            .is_some_and(|toast| toast.dismiss(page))
    }

    /// Dismisses every live toast.
    pub fn dismiss_all(&mut self, page: &mut Page) {
        for toast in self.toasts.values_mut() {
            toast.dismiss(page);
        }
    }

    /// Looks up a live toast.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id.0)
    }

    /// Returns whether the id refers to a live toast.
    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.contains_key(&id.0)
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether no toast is live.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Iterates live toasts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }
}
