//! Immutable context attached to a registry session.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::constants::KIND_FRAMEWORK;

/// Mapping from context kind (e.g. `framework`) to a context value.
///
/// Never mutated in place: a changed context implies a new session
/// snapshot. The builder-style [`Context::with`] consumes and returns the
/// value, so construction stays explicit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    entries: FxHashMap<SmolStr, SmolStr>,
}

impl Context {
    /// The empty context.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context with a single entry.
    pub fn of(kind: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self::empty().with(kind, value)
    }

    /// Add an entry, consuming the context.
    pub fn with(mut self, kind: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.entries.insert(kind.into(), value.into());
        self
    }

    /// Look up the value for a context kind.
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.entries.get(kind).map(SmolStr::as_str)
    }

    /// The well-known `framework` context value.
    pub fn framework(&self) -> Option<&str> {
        self.get(KIND_FRAMEWORK)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
