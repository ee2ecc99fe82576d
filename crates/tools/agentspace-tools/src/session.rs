//! Deep-research session storage.

use std::sync::{Mutex, PoisonError};

/// Environment variable that seeds [`ProcessSessionStore`].
pub const ENV_SESSION: &str = "SESSION";

/// Holds the assistant session that follow-up research turns continue.
pub trait SessionStore: Send + Sync {
    /// The stored session resource name, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored session.
    fn set(&self, session: String);
}

/// One process-wide session slot. Concurrent writers race; the last one wins.
#[derive(Debug, Default)]
pub struct ProcessSessionStore {
    slot: Mutex<Option<String>>,
}

impl ProcessSessionStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self {
            slot: Mutex::new(initial),
        }
    }

    /// Create a store seeded from `SESSION`. Blank values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let seed = std::env::var(ENV_SESSION)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if seed.is_some() {
            tracing::debug!("seeded research session from {ENV_SESSION}");
        }
        Self::new(seed)
    }
}

impl SessionStore for ProcessSessionStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, session: String) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }
}
