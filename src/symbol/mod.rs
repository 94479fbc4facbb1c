//! Symbol records produced by contributing sources.
//!
//! A [`Symbol`] is an immutable, value-like record for one resolved
//! vocabulary entry. Identity is structural: two symbols are equal when
//! their name, kind and origin agree, regardless of the nested scope
//! sources they carry.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::SymbolKind;
use crate::scope::SymbolSource;

/// Provenance of a symbol: which contributing source produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    source: SmolStr,
    framework: Option<SmolStr>,
}

impl Origin {
    /// Create an origin for a frameworkless contributing source.
    pub fn new(source: impl Into<SmolStr>) -> Self {
        Self {
            source: source.into(),
            framework: None,
        }
    }

    /// Attach the framework this source contributes for.
    pub fn with_framework(mut self, framework: impl Into<SmolStr>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Name of the contributing source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Framework the source contributes for, if any.
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }
}

/// A resolved vocabulary entry.
///
/// Built by contributing sources via the builder-style `with_*` methods:
///
/// ```
/// use websym::{Origin, Symbol, SymbolKind};
///
/// let sym = Symbol::new("button", SymbolKind::html("elements"), Origin::new("html-spec"))
///     .with_qualified_name("html/elements/button");
/// assert_eq!(sym.name(), "button");
/// assert!(!sym.is_virtual());
/// ```
#[derive(Clone, Debug)]
pub struct Symbol {
    name: SmolStr,
    qualified_name: SmolStr,
    kind: SymbolKind,
    origin: Origin,
    is_virtual: bool,
    is_abstract: bool,
    scope: Vec<Arc<dyn SymbolSource>>,
}

impl Symbol {
    /// Create a new symbol. The qualified name defaults to the plain name.
    pub fn new(name: impl Into<SmolStr>, kind: SymbolKind, origin: Origin) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name,
            kind,
            origin,
            is_virtual: false,
            is_abstract: false,
            scope: Vec::new(),
        }
    }

    /// Set the fully qualified name.
    pub fn with_qualified_name(mut self, qualified_name: impl Into<SmolStr>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    /// Mark this symbol as synthesized by a pattern rather than declared
    /// literally.
    pub fn with_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    /// Mark this symbol as a grouping node that cannot terminate a query
    /// unless abstract results were explicitly requested.
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Add a symbol source reachable inside this symbol (e.g. the
    /// attributes of a tag).
    pub fn with_scope_source(mut self, source: Arc<dyn SymbolSource>) -> Self {
        self.scope.push(source);
        self
    }

    /// Canonical name as declared by the contributing source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Symbol sources nested inside this symbol, in declaration order.
    pub fn scope_sources(&self) -> &[Arc<dyn SymbolSource>] {
        &self.scope
    }

    /// Whether deeper path segments can resolve inside this symbol.
    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty()
    }
}

// Structural identity: name + kind + origin. The nested scope is carried
// data, not identity.
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.origin == other.origin
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.origin.hash(state);
    }
}
