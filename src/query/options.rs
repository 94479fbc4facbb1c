use std::sync::Arc;

use crate::base::SymbolKind;
use crate::scope::SymbolSource;

/// Matching flags and caller-supplied context for one query.
///
/// Defaults: `virtual_symbols = true`, `abstract_symbols = false`,
/// `strict_scope = false`, no context scopes, no kind filter. Construct
/// explicitly at each call site and adjust with the `with_*` methods.
#[derive(Clone, Debug)]
pub struct QueryOptions {
    /// Include symbols synthesized by a pattern rather than declared
    /// literally.
    pub virtual_symbols: bool,
    /// Allow abstract grouping nodes as terminal results. They are always
    /// traversed into at non-terminal segments regardless.
    pub abstract_symbols: bool,
    /// Resolve only within contextual layers, skipping ambient/global ones.
    pub strict_scope: bool,
    /// Extra context scopes for this query, consulted before the session's
    /// root layers and always treated as contextual.
    pub context_scopes: Vec<Arc<dyn SymbolSource>>,
    /// Kind filter applied at the terminal segment.
    pub kind_filter: Option<SymbolKind>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            virtual_symbols: true,
            abstract_symbols: false,
            strict_scope: false,
            context_scopes: Vec::new(),
            kind_filter: None,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_virtual_symbols(mut self, include: bool) -> Self {
        self.virtual_symbols = include;
        self
    }

    pub fn with_abstract_symbols(mut self, include: bool) -> Self {
        self.abstract_symbols = include;
        self
    }

    pub fn with_strict_scope(mut self, strict: bool) -> Self {
        self.strict_scope = strict;
        self
    }

    pub fn with_context_scope(mut self, scope: Arc<dyn SymbolSource>) -> Self {
        self.context_scopes.push(scope);
        self
    }

    pub fn with_kind_filter(mut self, kind: SymbolKind) -> Self {
        self.kind_filter = Some(kind);
        self
    }
}
