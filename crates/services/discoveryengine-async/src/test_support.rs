//! Test-only helpers for mutating process-global state.
//!
//! Every test that touches the environment (credential discovery, config
//! defaults, the `SESSION` seed) must be marked `#[serial(env)]`.

/// RAII guard that sets or removes an environment variable and restores the
/// previous value on drop.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `val` until the guard is dropped.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with #[serial(env)]
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Remove `key` until the guard is dropped.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with #[serial(env)]
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            // SAFETY: the owning test still holds the serial(env) lock
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            // SAFETY: as above
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
