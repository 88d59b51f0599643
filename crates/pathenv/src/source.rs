//! Environment sources consulted during a bind.
//!
//! [`ProcessEnv`] reads the real process environment and is what
//! [`bind`](crate::bind) uses. [`MapEnv`] holds variables in memory, for
//! callers that assemble configuration from somewhere other than the process
//! environment and for tests that must not touch global state.

use std::collections::HashMap;
use std::ffi::OsString;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Looks up a variable, returning `None` if it is not set.
    fn get(&self, name: &str) -> Option<OsString>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, name: &str) -> Option<OsString> {
        (**self).get(name)
    }
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// An in-memory set of variables.
///
/// ```rust
/// use std::ffi::OsStr;
///
/// use pathenv::source::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("APP_PORT", "8080");
/// assert_eq!(env.get("APP_PORT").as_deref(), Some(OsStr::new("8080")));
/// assert!(env.get("APP_HOST").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning the source for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&mut self, name: &str) -> Option<OsString> {
        self.vars.remove(name)
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}
