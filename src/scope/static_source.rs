use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use smol_str::SmolStr;

use crate::base::SymbolKind;
use crate::symbol::Symbol;

use super::{ModificationTracker, SymbolSource};

/// Table-backed in-memory [`SymbolSource`].
///
/// Symbols are kept in declaration order, which is also the order lookups
/// return them in. Mutation happens out-of-band of any query and bumps the
/// modification count, so sessions layered over this source report
/// staleness to their callers.
#[derive(Debug)]
pub struct StaticSymbolSource {
    name: SmolStr,
    symbols: RwLock<Vec<Symbol>>,
    version: AtomicU64,
}

impl StaticSymbolSource {
    /// Create an empty source with a diagnostic name.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            symbols: RwLock::new(Vec::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Create a source pre-populated with symbols in declaration order.
    pub fn with_symbols(name: impl Into<SmolStr>, symbols: Vec<Symbol>) -> Self {
        Self {
            name: name.into(),
            symbols: RwLock::new(symbols),
            version: AtomicU64::new(0),
        }
    }

    /// Add a symbol at the end of the declaration order.
    pub fn insert(&self, symbol: Symbol) {
        self.symbols.write().push(symbol);
        self.bump();
    }

    /// Remove all symbols with the given name and kind. Returns how many
    /// were removed.
    pub fn remove(&self, name: &str, kind: &SymbolKind) -> usize {
        let mut symbols = self.symbols.write();
        let before = symbols.len();
        symbols.retain(|s| !(s.name() == name && s.kind() == kind));
        let removed = before - symbols.len();
        drop(symbols);
        if removed > 0 {
            self.bump();
        }
        removed
    }

    /// Remove every symbol.
    pub fn clear(&self) {
        self.symbols.write().clear();
        self.bump();
    }

    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.read().is_empty()
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    fn kind_matches(symbol: &Symbol, kind_filter: Option<&SymbolKind>) -> bool {
        kind_filter.is_none_or(|k| symbol.kind() == k)
    }
}

impl ModificationTracker for StaticSymbolSource {
    fn modification_count(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }
}

impl SymbolSource for StaticSymbolSource {
    fn lookup(
        &self,
        name_candidates: &[SmolStr],
        kind_filter: Option<&SymbolKind>,
    ) -> Vec<Symbol> {
        let symbols = self.symbols.read();
        for candidate in name_candidates {
            let hits: Vec<Symbol> = symbols
                .iter()
                .filter(|s| s.name() == candidate.as_str() && Self::kind_matches(s, kind_filter))
                .cloned()
                .collect();
            if !hits.is_empty() {
                return hits;
            }
        }
        Vec::new()
    }

    fn lookup_prefix(&self, prefix: &str, kind_filter: Option<&SymbolKind>) -> Vec<Symbol> {
        self.symbols
            .read()
            .iter()
            .filter(|s| s.name().starts_with(prefix) && Self::kind_matches(s, kind_filter))
            .cloned()
            .collect()
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Origin;

    fn elements() -> SymbolKind {
        SymbolKind::html("elements")
    }

    fn sym(name: &str) -> Symbol {
        Symbol::new(name, elements(), Origin::new("test"))
    }

    #[test]
    fn first_nonempty_candidate_wins() {
        let source = StaticSymbolSource::with_symbols("t", vec![sym("button"), sym("input")]);
        let hits = source.lookup(&["missing".into(), "input".into(), "button".into()], None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "input");
    }

    #[test]
    fn prefix_lookup_keeps_declaration_order() {
        let source = StaticSymbolSource::with_symbols(
            "t",
            vec![sym("input"), sym("inner-block"), sym("button")],
        );
        let hits = source.lookup_prefix("in", None);
        let names: Vec<&str> = hits.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["input", "inner-block"]);
        // Empty prefix matches everything.
        assert_eq!(source.lookup_prefix("", None).len(), 3);
    }

    #[test]
    fn kind_filter_applies() {
        let attr = Symbol::new("disabled", SymbolKind::html("attributes"), Origin::new("t"));
        let source = StaticSymbolSource::with_symbols("t", vec![sym("button"), attr]);
        let hits = source.lookup(&["disabled".into()], Some(&elements()));
        assert!(hits.is_empty());
        let hits = source.lookup(&["disabled".into()], Some(&SymbolKind::html("attributes")));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn mutation_bumps_modification_count() {
        let source = StaticSymbolSource::new("t");
        assert_eq!(source.modification_count(), 0);
        source.insert(sym("button"));
        assert_eq!(source.modification_count(), 1);
        assert_eq!(source.remove("button", &elements()), 1);
        assert_eq!(source.modification_count(), 2);
        // Removing a missing symbol does not signal a change.
        assert_eq!(source.remove("button", &elements()), 0);
        assert_eq!(source.modification_count(), 2);
    }
}
