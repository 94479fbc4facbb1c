//! Registry sessions: the public query surface.
//!
//! A [`RegistrySession`] binds one project/context snapshot: a root scope
//! chain, a context, the active name conversion rules, and a modification
//! counter aggregated from the underlying sources. Sessions are immutable
//! once built and cheap to clone; deriving a session with extra name
//! conversion rules shares the underlying scope data.

mod pointer;

pub use pointer::SessionPointer;

use std::sync::Arc;

use crate::base::constants::DEFAULT_MAX_SEGMENT_FAN_OUT;
use crate::base::split_path;
use crate::context::Context;
use crate::names::{NameConversionEngine, NameConversionRules};
use crate::query::{CompletionItem, QueryEngine, QueryOptions};
use crate::scope::{ModificationTracker, QueryError, ScopeChain, ScopeLayer, SymbolSource};
use crate::symbol::Symbol;

/// State shared between a session, its clones, and its derived variants.
#[derive(Debug)]
pub(crate) struct SessionCore {
    pub(crate) scope: ScopeChain,
    pub(crate) context: Context,
    pub(crate) allow_resolve: bool,
    pub(crate) max_segment_fan_out: usize,
}

/// The stable, modification-tracked handle bound to one project/context
/// snapshot.
///
/// Queries are pure functions of (session, path, flags) and may run
/// concurrently from multiple threads without external locking. Mutation of
/// underlying sources is observed only through
/// [`RegistrySession::modification_count`].
#[derive(Clone, Debug)]
pub struct RegistrySession {
    core: Arc<SessionCore>,
    names: NameConversionEngine,
}

impl RegistrySession {
    pub fn builder() -> RegistrySessionBuilder {
        RegistrySessionBuilder::new()
    }

    pub fn context(&self) -> &Context {
        &self.core.context
    }

    /// The framework selected by the session context, if any.
    pub fn framework(&self) -> Option<&str> {
        self.core.context.framework()
    }

    /// Whether resolution is currently permitted. When false, both query
    /// operations return empty results without traversing.
    pub fn allow_resolve(&self) -> bool {
        self.core.allow_resolve
    }

    pub fn names(&self) -> &NameConversionEngine {
        &self.names
    }

    pub fn scope(&self) -> &ScopeChain {
        &self.core.scope
    }

    /// Run an exact-match query over a pre-segmented path.
    ///
    /// An unmatched path is `Ok(vec![])`; the only error is a contract
    /// violation by a contributing source.
    pub fn run_name_match_query<S: AsRef<str>>(
        &self,
        path: &[S],
        options: &QueryOptions,
    ) -> Result<Vec<Symbol>, QueryError> {
        if !self.core.allow_resolve {
            return Ok(Vec::new());
        }
        self.engine().name_match(&self.core.scope, path, options)
    }

    /// Run an exact-match query over a `/`-delimited path string. Empty
    /// leading/trailing segments are preserved by the split.
    pub fn run_name_match_query_path(
        &self,
        path: &str,
        options: &QueryOptions,
    ) -> Result<Vec<Symbol>, QueryError> {
        self.run_name_match_query(&split_path(path), options)
    }

    /// Run a code-completion query. The whole terminal scope is offered;
    /// `caret_offset` is the byte position of the insertion point within
    /// the last segment, clamped when out of range and carried on each
    /// item for the presenter to narrow against.
    pub fn run_code_completion_query<S: AsRef<str>>(
        &self,
        path: &[S],
        caret_offset: usize,
        options: &QueryOptions,
    ) -> Result<Vec<CompletionItem>, QueryError> {
        if !self.core.allow_resolve {
            return Ok(Vec::new());
        }
        self.engine()
            .code_completion(&self.core.scope, path, caret_offset, options)
    }

    /// Run a code-completion query over a `/`-delimited path string.
    pub fn run_code_completion_query_path(
        &self,
        path: &str,
        caret_offset: usize,
        options: &QueryOptions,
    ) -> Result<Vec<CompletionItem>, QueryError> {
        self.run_code_completion_query(&split_path(path), caret_offset, options)
    }

    /// Derive a session with `rules` layered at the highest precedence.
    /// Scope data is shared; the original session keeps using only its
    /// original rules.
    pub fn with_name_conversion_rules(&self, rules: Vec<NameConversionRules>) -> Self {
        Self {
            core: Arc::clone(&self.core),
            names: self.names.layered(rules),
        }
    }

    /// Obtain a durable handle that can be re-resolved to this session
    /// across asynchronous boundaries. Re-resolution yields `None` once
    /// every session sharing this snapshot has been dropped.
    pub fn create_pointer(&self) -> SessionPointer {
        SessionPointer::new(self)
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(
            &self.names,
            self.core.context.framework(),
            self.core.max_segment_fan_out,
        )
    }

    pub(crate) fn from_parts(core: Arc<SessionCore>, names: NameConversionEngine) -> Self {
        Self { core, names }
    }

    pub(crate) fn core(&self) -> &Arc<SessionCore> {
        &self.core
    }
}

impl ModificationTracker for RegistrySession {
    /// Aggregate modification count over every source the session
    /// transitively depends on. Wrapping sum, recomputed per read.
    fn modification_count(&self) -> u64 {
        let mut count: u64 = 0;
        self.core.scope.for_each_source(&mut |source| {
            count = count.wrapping_add(source.modification_count());
        });
        count
    }
}

/// Builder for [`RegistrySession`].
#[derive(Debug)]
pub struct RegistrySessionBuilder {
    layers: Vec<ScopeLayer>,
    context: Context,
    rules: Vec<NameConversionRules>,
    allow_resolve: bool,
    max_segment_fan_out: usize,
}

impl RegistrySessionBuilder {
    fn new() -> Self {
        Self {
            layers: Vec::new(),
            context: Context::empty(),
            rules: Vec::new(),
            allow_resolve: true,
            max_segment_fan_out: DEFAULT_MAX_SEGMENT_FAN_OUT,
        }
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Add an ambient source, active in every context.
    pub fn add_source(mut self, source: Arc<dyn SymbolSource>) -> Self {
        self.layers.push(ScopeLayer::ambient(source));
        self
    }

    /// Add an ambient source that is inert unless the session context
    /// names the given framework.
    pub fn add_framework_source(
        mut self,
        framework: impl Into<smol_str::SmolStr>,
        source: Arc<dyn SymbolSource>,
    ) -> Self {
        self.layers
            .push(ScopeLayer::ambient_for_framework(framework, source));
        self
    }

    /// Add a contextual source, consulted even under strict scope.
    pub fn add_contextual_source(mut self, source: Arc<dyn SymbolSource>) -> Self {
        self.layers.push(ScopeLayer::contextual(source));
        self
    }

    /// Add an arbitrary pre-built layer.
    pub fn add_layer(mut self, layer: ScopeLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Set the name conversion rule sets, highest precedence first.
    pub fn rules(mut self, rules: Vec<NameConversionRules>) -> Self {
        self.rules = rules;
        self
    }

    /// Gate resolution off, e.g. during an inconsistent intermediate
    /// project state.
    pub fn allow_resolve(mut self, allow: bool) -> Self {
        self.allow_resolve = allow;
        self
    }

    /// Bound how many ambiguous matches at one segment are descended into.
    pub fn max_segment_fan_out(mut self, bound: usize) -> Self {
        self.max_segment_fan_out = bound.max(1);
        self
    }

    pub fn build(self) -> RegistrySession {
        RegistrySession {
            core: Arc::new(SessionCore {
                scope: ScopeChain::from_layers(self.layers),
                context: self.context,
                allow_resolve: self.allow_resolve,
                max_segment_fan_out: self.max_segment_fan_out,
            }),
            names: NameConversionEngine::new(self.rules),
        }
    }
}
