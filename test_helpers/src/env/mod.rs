//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation happens under a global re-entrant mutex and returns an RAII
//! guard restoring the previous state when dropped. Parsing with `clap` reads
//! the environment, so tests that rely on env fallbacks should hold an
//! [`EnvScope`] for as long as they parse.
//!
//! # Examples
//!
//! ```
//! use flag_tags_test_helpers::env;
//!
//! let _scope = env::scope([("APP_PORT", Some("8080")), ("APP_HOST", None)]);
//! assert_eq!(std::env::var("APP_PORT").as_deref(), Ok("8080"));
//! assert!(std::env::var("APP_HOST").is_err());
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Wrapper around `std::env::set_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// Wrapper around `std::env::remove_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn mutate<K, F>(key: K, mutator: F) -> EnvVarGuard
where
    K: Into<String>,
    F: FnOnce(&str),
{
    let key_string = key.into();
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key_string);
    mutator(&key_string);
    EnvVarGuard {
        key: key_string,
        original,
    }
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        if let Some(value) = self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_set_var(&self.key, &value) };
        } else {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_remove_var(&self.key) };
        }
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
///
/// ```
/// use flag_tags_test_helpers::env;
///
/// let _guard = env::set_var("FLAG_TAGS_DOC_KEY", "bar");
/// assert_eq!(std::env::var("FLAG_TAGS_DOC_KEY").as_deref(), Ok("bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key, |name| unsafe { env_set_var(name, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key, |name| unsafe { env_remove_var(name) })
}

/// Holds the environment lock together with a set of guards.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

/// Sets (`Some`) or removes (`None`) each variable and keeps the environment
/// locked until the returned scope is dropped.
pub fn scope<I, K, V>(vars: I) -> EnvScope
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let lock = ENV_MUTEX.lock();
    let guards = vars
        .into_iter()
        .map(|(key, value)| match value {
            Some(text) => set_var(key, text),
            None => remove_var(key),
        })
        .collect();
    EnvScope {
        guards,
        _lock: lock,
    }
}
