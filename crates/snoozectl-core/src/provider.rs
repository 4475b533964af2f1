//! Keeps the current snooze options in sync with a changing override.
//!
//! The override lives in external settings storage that may change at any
//! time. Whoever watches that storage feeds new values to
//! [`SnoozeOptionsProvider::set_override`]; subscribers are told whenever
//! the resolved options actually change.

use std::fmt;

use tracing::{debug, warn};

use crate::option::ResolvedSnoozeConfig;
use crate::resolver::SnoozeConfigResolver;

/// Handle returned by [`SnoozeOptionsProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ResolvedSnoozeConfig) + Send>;

/// Holds the latest override and the options resolved from it.
pub struct SnoozeOptionsProvider {
    resolver: SnoozeConfigResolver,
    raw_override: Option<String>,
    current: ResolvedSnoozeConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for SnoozeOptionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnoozeOptionsProvider")
            .field("resolver", &self.resolver)
            .field("raw_override", &self.raw_override)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SnoozeOptionsProvider {
    /// Creates a provider and resolves `initial_override` right away.
    pub fn new(resolver: SnoozeConfigResolver, initial_override: Option<String>) -> Self {
        let current = resolve_logged(&resolver, initial_override.as_deref());
        Self {
            resolver,
            raw_override: initial_override,
            current,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The options resolved from the latest override.
    pub fn current(&self) -> &ResolvedSnoozeConfig {
        &self.current
    }

    /// The latest raw override.
    pub fn raw_override(&self) -> Option<&str> {
        self.raw_override.as_deref()
    }

    /// Registers a listener called with the new options on every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ResolvedSnoozeConfig) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replaces the override and re-resolves.
    ///
    /// Returns `true` if the resolved options changed. Listeners only run in
    /// that case.
    pub fn set_override(&mut self, raw_override: Option<String>) -> bool {
        if raw_override == self.raw_override {
            return false;
        }
        self.raw_override = raw_override;

        let resolved = resolve_logged(&self.resolver, self.raw_override.as_deref());
        if resolved == self.current {
            debug!("Snooze override changed but options did not");
            return false;
        }

        self.current = resolved;
        debug!(
            options = ?self.current.minutes(),
            default = self.current.default_option().minutes_to_snooze_for(),
            "Snooze options changed"
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.current);
        }
        true
    }
}

fn resolve_logged(
    resolver: &SnoozeConfigResolver,
    raw_override: Option<&str>,
) -> ResolvedSnoozeConfig {
    let resolution = resolver.resolve_with_diagnostics(raw_override);
    for issue in &resolution.issues {
        warn!(error = %issue, "Bad snooze override");
    }
    resolution.config
}
