//! Composable scope chains over contributed symbol sources.
//!
//! A [`ScopeChain`] is an ordered stack of layers, each either a leaf
//! [`SymbolSource`] or a nested chain. Resolution order is deterministic:
//! earlier layers shadow later layers on a name collision, and strict-scope
//! queries restrict resolution to the contextual layers supplied by the
//! caller.

mod source;
mod static_source;

pub use source::{ModificationTracker, SymbolSource};
pub use static_source::StaticSymbolSource;

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::SymbolKind;
use crate::names::NameConversionEngine;
use crate::symbol::Symbol;

/// Fault raised when a [`SymbolSource`] violates its lookup contract.
///
/// Ordinary absence of results is never an error; this exists because
/// silently tolerating an off-kind symbol would corrupt completion results
/// downstream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error(
        "symbol source `{source_name}` returned `{symbol}` of kind {actual} for kind filter {requested}"
    )]
    KindContractViolation {
        source_name: String,
        symbol: SmolStr,
        actual: SymbolKind,
        requested: SymbolKind,
    },
}

/// How a layer entered the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerProvenance {
    /// Globally contributed; skipped under strict scope, and inert when
    /// registered for a framework other than the session's.
    Ambient,
    /// Derived from caller-supplied context or from narrowing into a
    /// matched symbol's own scope; always consulted.
    Contextual,
}

#[derive(Clone, Debug)]
enum LayerEntry {
    Source(Arc<dyn SymbolSource>),
    Chain(Arc<ScopeChain>),
}

/// One layer of a scope chain.
#[derive(Clone, Debug)]
pub struct ScopeLayer {
    entry: LayerEntry,
    provenance: LayerProvenance,
    framework: Option<SmolStr>,
}

impl ScopeLayer {
    /// An ambient layer active in every context.
    pub fn ambient(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            entry: LayerEntry::Source(source),
            provenance: LayerProvenance::Ambient,
            framework: None,
        }
    }

    /// An ambient layer only active when the session context names the
    /// given framework.
    pub fn ambient_for_framework(
        framework: impl Into<SmolStr>,
        source: Arc<dyn SymbolSource>,
    ) -> Self {
        Self {
            entry: LayerEntry::Source(source),
            provenance: LayerProvenance::Ambient,
            framework: Some(framework.into()),
        }
    }

    /// A contextual layer, consulted even under strict scope.
    pub fn contextual(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            entry: LayerEntry::Source(source),
            provenance: LayerProvenance::Contextual,
            framework: None,
        }
    }

    /// A contextual layer wrapping a whole nested chain.
    pub fn contextual_chain(chain: Arc<ScopeChain>) -> Self {
        Self {
            entry: LayerEntry::Chain(chain),
            provenance: LayerProvenance::Contextual,
            framework: None,
        }
    }

    pub fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    fn is_active(&self, strict_scope: bool, framework: Option<&str>) -> bool {
        if strict_scope && self.provenance == LayerProvenance::Ambient {
            return false;
        }
        match &self.framework {
            Some(required) => framework == Some(required.as_str()),
            None => true,
        }
    }
}

/// Everything segment resolution needs besides the segment text.
pub(crate) struct ResolveParams<'a> {
    pub names: &'a NameConversionEngine,
    pub framework: Option<&'a str>,
    pub strict_scope: bool,
    pub virtual_symbols: bool,
    pub kind_filter: Option<&'a SymbolKind>,
}

/// Key under which earlier layers shadow later ones. Two kinds may share a
/// name (an element and an attribute), so the kind participates.
type ShadowKey = (SymbolKind, SmolStr);

/// An ordered, composable stack of symbol sources.
#[derive(Clone, Debug, Default)]
pub struct ScopeChain {
    layers: Vec<ScopeLayer>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layers(layers: Vec<ScopeLayer>) -> Self {
        Self { layers }
    }

    pub fn push(&mut self, layer: ScopeLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[ScopeLayer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Visit every leaf source reachable from this chain, in layer order.
    pub fn for_each_source<F>(&self, visit: &mut F)
    where
        F: FnMut(&Arc<dyn SymbolSource>),
    {
        for layer in &self.layers {
            match &layer.entry {
                LayerEntry::Source(source) => visit(source),
                LayerEntry::Chain(chain) => chain.for_each_source(visit),
            }
        }
    }

    /// Resolve one path segment to its matching symbols.
    ///
    /// Layers are consulted in declared order. For each source layer the
    /// segment is expanded into canonical candidates and the first
    /// non-empty candidate's matches are taken; later layers never add a
    /// `(kind, name)` an earlier layer already produced. Virtual symbols
    /// are dropped unless requested. An unresolvable segment is an empty
    /// result, not an error.
    pub(crate) fn resolve(
        &self,
        segment: &str,
        params: &ResolveParams<'_>,
    ) -> Result<Vec<Symbol>, QueryError> {
        let candidates = params.names.canonical_candidates(params.kind_filter, segment);
        let mut seen: FxHashSet<ShadowKey> = FxHashSet::default();
        let mut out = Vec::new();
        self.collect(&candidates, params, &mut seen, &mut out)?;
        trace!(segment, matches = out.len(), "segment resolved");
        Ok(out)
    }

    fn collect(
        &self,
        candidates: &[SmolStr],
        params: &ResolveParams<'_>,
        seen: &mut FxHashSet<ShadowKey>,
        out: &mut Vec<Symbol>,
    ) -> Result<(), QueryError> {
        for layer in &self.layers {
            if !layer.is_active(params.strict_scope, params.framework) {
                continue;
            }
            match &layer.entry {
                LayerEntry::Source(source) => {
                    let hits = source.lookup(candidates, params.kind_filter);
                    Self::admit(source.as_ref(), hits, params, seen, out)?;
                }
                LayerEntry::Chain(chain) => {
                    chain.collect(candidates, params, seen, out)?;
                }
            }
        }
        Ok(())
    }

    /// Resolve every symbol visible at this point in the chain. Same layer
    /// order, shadowing and filtering as [`Self::resolve`]; used by code
    /// completion to enumerate the terminal scope's candidate pool.
    pub(crate) fn resolve_all(
        &self,
        params: &ResolveParams<'_>,
    ) -> Result<Vec<Symbol>, QueryError> {
        let mut seen: FxHashSet<ShadowKey> = FxHashSet::default();
        let mut out = Vec::new();
        self.collect_all(params, &mut seen, &mut out)?;
        trace!(matches = out.len(), "scope enumerated");
        Ok(out)
    }

    fn collect_all(
        &self,
        params: &ResolveParams<'_>,
        seen: &mut FxHashSet<ShadowKey>,
        out: &mut Vec<Symbol>,
    ) -> Result<(), QueryError> {
        for layer in &self.layers {
            if !layer.is_active(params.strict_scope, params.framework) {
                continue;
            }
            match &layer.entry {
                LayerEntry::Source(source) => {
                    // An empty prefix asks the source for everything it has.
                    let hits = source.lookup_prefix("", params.kind_filter);
                    Self::admit(source.as_ref(), hits, params, seen, out)?;
                }
                LayerEntry::Chain(chain) => {
                    chain.collect_all(params, seen, out)?;
                }
            }
        }
        Ok(())
    }

    /// Filter one layer's hits into the output, enforcing the source
    /// contract and the cross-layer shadow invariant.
    fn admit(
        source: &dyn SymbolSource,
        hits: Vec<Symbol>,
        params: &ResolveParams<'_>,
        seen: &mut FxHashSet<ShadowKey>,
        out: &mut Vec<Symbol>,
    ) -> Result<(), QueryError> {
        // Shadowing applies across layers, not within one: a single layer
        // may legitimately contribute several symbols under one name.
        let mut produced: Vec<ShadowKey> = Vec::new();
        for hit in hits {
            if let Some(requested) = params.kind_filter {
                if hit.kind() != requested {
                    return Err(QueryError::KindContractViolation {
                        source_name: source.source_name().to_string(),
                        symbol: SmolStr::new(hit.name()),
                        actual: hit.kind().clone(),
                        requested: requested.clone(),
                    });
                }
            }
            if !params.virtual_symbols && hit.is_virtual() {
                continue;
            }
            let key = (hit.kind().clone(), SmolStr::new(hit.name()));
            if seen.contains(&key) {
                continue;
            }
            produced.push(key);
            out.push(hit);
        }
        seen.extend(produced);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Origin;

    fn elements() -> SymbolKind {
        SymbolKind::html("elements")
    }

    fn sym(name: &str, origin: &str) -> Symbol {
        Symbol::new(name, elements(), Origin::new(origin))
    }

    fn source(name: &str, symbols: Vec<Symbol>) -> Arc<dyn SymbolSource> {
        Arc::new(StaticSymbolSource::with_symbols(name, symbols))
    }

    fn params<'a>(names: &'a NameConversionEngine) -> ResolveParams<'a> {
        ResolveParams {
            names,
            framework: None,
            strict_scope: false,
            virtual_symbols: true,
            kind_filter: None,
        }
    }

    #[test]
    fn earlier_layers_shadow_later_ones() {
        let chain = ScopeChain::from_layers(vec![
            ScopeLayer::ambient(source("first", vec![sym("button", "first")])),
            ScopeLayer::ambient(source("second", vec![sym("button", "second")])),
        ]);
        let names = NameConversionEngine::empty();
        let hits = chain.resolve("button", &params(&names)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].origin().source(), "first");
    }

    #[test]
    fn nested_chains_resolve_in_declaration_order() {
        let inner = Arc::new(ScopeChain::from_layers(vec![ScopeLayer::ambient(source(
            "inner",
            vec![sym("input", "inner")],
        ))]));
        let chain = ScopeChain::from_layers(vec![
            ScopeLayer::contextual_chain(inner),
            ScopeLayer::ambient(source("outer", vec![sym("input", "outer"), sym("button", "outer")])),
        ]);
        let names = NameConversionEngine::empty();

        // The nested chain comes first and shadows the outer layer.
        let hits = chain.resolve("input", &params(&names)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].origin().source(), "inner");

        // The outer layer still answers for names the inner one lacks.
        let hits = chain.resolve("button", &params(&names)).unwrap();
        assert_eq!(hits.len(), 1);

        let mut count = 0;
        chain.for_each_source(&mut |_| count += 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn strict_scope_skips_ambient_layers() {
        let chain = ScopeChain::from_layers(vec![
            ScopeLayer::ambient(source("ambient", vec![sym("button", "ambient")])),
            ScopeLayer::contextual(source("ctx", vec![sym("widget", "ctx")])),
        ]);
        let names = NameConversionEngine::empty();
        let strict = ResolveParams {
            strict_scope: true,
            ..params(&names)
        };

        assert!(chain.resolve("button", &strict).unwrap().is_empty());
        assert_eq!(chain.resolve("widget", &strict).unwrap().len(), 1);
    }
}
