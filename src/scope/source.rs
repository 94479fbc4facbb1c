use std::fmt;

use smol_str::SmolStr;

use crate::base::SymbolKind;
use crate::symbol::Symbol;

/// Freshness signal for anything feeding a registry session.
///
/// The count must increase monotonically whenever the underlying data
/// changes, be updated atomically, and be readable without tearing. It is
/// kept separate from [`SymbolSource`] so caching layers can compose over
/// it without coupling to the query interface.
pub trait ModificationTracker {
    fn modification_count(&self) -> u64;
}

/// A contributor of symbol records for one segment of a path.
///
/// Implementations must be in-memory/already-indexed: no blocking I/O may
/// happen inside `lookup` or `lookup_prefix`. Sources that need expensive
/// resolution must perform it out-of-band and answer from a ready-made
/// result set, bumping their modification count when that set changes.
pub trait SymbolSource: ModificationTracker + fmt::Debug + Send + Sync {
    /// Look up symbols by name.
    ///
    /// `name_candidates` is ordered by precedence; the contract is to try
    /// each candidate in turn and return the matches for the first one that
    /// has any. Every returned symbol must satisfy `kind_filter` when one
    /// is given; a violation is reported to the caller as a fault, not
    /// silently dropped.
    fn lookup(
        &self,
        name_candidates: &[SmolStr],
        kind_filter: Option<&SymbolKind>,
    ) -> Vec<Symbol>;

    /// Look up all symbols whose canonical name starts with `prefix`.
    /// Used only by code completion. An empty prefix matches everything.
    fn lookup_prefix(&self, prefix: &str, kind_filter: Option<&SymbolKind>) -> Vec<Symbol>;

    /// Label used in diagnostics and contract-violation reports.
    fn source_name(&self) -> &str {
        "symbol source"
    }
}
