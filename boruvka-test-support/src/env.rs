//! Scoped environment overrides for tests.
//!
//! `std::env::set_var` is process-global, so every guard holds the shared
//! [`ENV_LOCK`] for its lifetime and restores the previous values on drop.
//! Override several variables with one guard; a second guard on the same
//! thread would deadlock.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialises environment mutation across tests in one binary.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores overridden environment variables when dropped.
///
/// # Examples
/// ```
/// use boruvka_test_support::env::EnvGuard;
///
/// {
///     let _guard = EnvGuard::new(&[
///         ("BORUVKA_DOCTEST_A", Some("1")),
///         ("BORUVKA_DOCTEST_B", None),
///     ]);
///     assert_eq!(std::env::var("BORUVKA_DOCTEST_A").as_deref(), Ok("1"));
///     assert!(std::env::var("BORUVKA_DOCTEST_B").is_err());
/// }
/// assert!(std::env::var("BORUVKA_DOCTEST_A").is_err());
/// ```
pub struct EnvGuard {
    originals: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Applies each `(key, value)` override; `None` removes the variable.
    #[must_use]
    pub fn new(overrides: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let originals = overrides
            .iter()
            .map(|&(key, value)| {
                let original = env::var(key).ok();
                write_var(key, value);
                (key, original)
            })
            .collect();
        Self {
            originals,
            _lock: lock,
        }
    }

    /// Sets a single variable until the guard drops.
    #[must_use]
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::new(&[(key, Some(value))])
    }

    /// Removes a single variable until the guard drops.
    #[must_use]
    pub fn unset(key: &'static str) -> Self {
        Self::new(&[(key, None)])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.originals.iter().rev() {
            write_var(key, original.as_deref());
        }
    }
}

fn write_var(key: &str, value: Option<&str>) {
    match value {
        // SAFETY: callers hold ENV_LOCK.
        Some(value) => unsafe { env::set_var(key, value) },
        // SAFETY: callers hold ENV_LOCK.
        None => unsafe { env::remove_var(key) },
    }
}
