//! Path traversal: name-match and code-completion queries.
//!
//! The engine walks a [`ScopeChain`] one segment at a time. At non-terminal
//! segments every match's nested scope is unioned into a composite chain
//! for the next segment — ambiguity is carried forward, not resolved early.
//! The terminal segment either requires an exact (converted-name) match or,
//! for completion, enumerates the whole reachable pool; the caret fixes the
//! insertion point, not the pool.

mod completion;
mod options;

pub use completion::CompletionItem;
pub use options::QueryOptions;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::names::NameConversionEngine;
use crate::scope::{QueryError, ResolveParams, ScopeChain, ScopeLayer};
use crate::symbol::Symbol;

/// One traversal over a scope chain. Borrows session state; created fresh
/// per query.
pub(crate) struct QueryEngine<'a> {
    names: &'a NameConversionEngine,
    framework: Option<&'a str>,
    max_segment_fan_out: usize,
}

impl<'a> QueryEngine<'a> {
    pub(crate) fn new(
        names: &'a NameConversionEngine,
        framework: Option<&'a str>,
        max_segment_fan_out: usize,
    ) -> Self {
        Self {
            names,
            framework,
            max_segment_fan_out,
        }
    }

    /// Exact-match query over a segmented path.
    pub(crate) fn name_match<S: AsRef<str>>(
        &self,
        root: &ScopeChain,
        path: &[S],
        options: &QueryOptions,
    ) -> Result<Vec<Symbol>, QueryError> {
        let Some((last, leading)) = path.split_last() else {
            return Ok(Vec::new());
        };
        let Some(chain) = self.traverse(root, leading, options)? else {
            return Ok(Vec::new());
        };
        let last = last.as_ref();
        if last.is_empty() {
            // An empty terminal segment names nothing; completion is the
            // operation that offers the whole scope.
            return Ok(Vec::new());
        }
        let mut matches = chain.resolve(last, &self.terminal_params(options))?;
        if !options.abstract_symbols {
            matches.retain(|s| !s.is_abstract());
        }
        debug!(segment = last, matches = matches.len(), "name match query done");
        Ok(matches)
    }

    /// Completion query: offers the terminal scope's whole candidate pool.
    /// The caret offset marks the insertion point inside the last segment
    /// (out-of-range offsets are clamped); narrowing against the text
    /// already typed is left to the presenting collaborator, since the
    /// typed text may match a candidate only through a name rule the
    /// presenter applies.
    pub(crate) fn code_completion<S: AsRef<str>>(
        &self,
        root: &ScopeChain,
        path: &[S],
        caret_offset: usize,
        options: &QueryOptions,
    ) -> Result<Vec<CompletionItem>, QueryError> {
        let Some((last, leading)) = path.split_last() else {
            return Ok(Vec::new());
        };
        let Some(chain) = self.traverse(root, leading, options)? else {
            return Ok(Vec::new());
        };
        let last = last.as_ref();
        let caret = clamp_to_char_boundary(last, caret_offset);

        let symbols = chain.resolve_all(&self.terminal_params(options))?;
        let mut items = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if !options.abstract_symbols && symbol.is_abstract() {
                continue;
            }
            let label = self.names.display_name(symbol.kind(), symbol.name());
            items.push(CompletionItem::new(label, caret, last.len(), symbol));
        }
        debug!(segment = last, caret, items = items.len(), "code completion query done");
        Ok(items)
    }

    /// Walk all leading segments, narrowing into matched symbols' scopes.
    /// `Ok(None)` means a segment failed to resolve and the whole query is
    /// empty.
    fn traverse<S: AsRef<str>>(
        &self,
        root: &ScopeChain,
        leading: &[S],
        options: &QueryOptions,
    ) -> Result<Option<ScopeChain>, QueryError> {
        let mut current = self.working_chain(root, options);
        let params = self.traversal_params(options);
        for segment in leading {
            let segment = segment.as_ref();
            if segment.is_empty() {
                // A leading `/` anchors at the root without consuming a
                // resolution step.
                continue;
            }
            let matches = current.resolve(segment, &params)?;
            if matches.is_empty() {
                return Ok(None);
            }
            if matches.len() > self.max_segment_fan_out {
                warn!(
                    segment,
                    matches = matches.len(),
                    bound = self.max_segment_fan_out,
                    "ambiguous segment truncated before descending"
                );
            }
            let mut seen_sources: FxHashSet<*const ()> = FxHashSet::default();
            let mut next = ScopeChain::new();
            for symbol in matches.iter().take(self.max_segment_fan_out) {
                for source in symbol.scope_sources() {
                    // Two matches may share one scope source; descend once.
                    let addr = std::sync::Arc::as_ptr(source) as *const u8 as *const ();
                    if !seen_sources.insert(addr) {
                        continue;
                    }
                    next.push(ScopeLayer::contextual(source.clone()));
                }
            }
            current = next;
        }
        Ok(Some(current))
    }

    /// Compose the query's working chain: caller-supplied context scopes
    /// first (they shadow), then the session's root layers.
    fn working_chain(&self, root: &ScopeChain, options: &QueryOptions) -> ScopeChain {
        if options.context_scopes.is_empty() {
            return root.clone();
        }
        let mut chain = ScopeChain::new();
        for scope in &options.context_scopes {
            chain.push(ScopeLayer::contextual(scope.clone()));
        }
        for layer in root.layers() {
            chain.push(layer.clone());
        }
        chain
    }

    /// Non-terminal segments carry no kind filter: grouping nodes may be of
    /// any kind. Abstract symbols stay traversable here.
    fn traversal_params<'b>(&'b self, options: &'b QueryOptions) -> ResolveParams<'b> {
        ResolveParams {
            names: self.names,
            framework: self.framework,
            strict_scope: options.strict_scope,
            virtual_symbols: options.virtual_symbols,
            kind_filter: None,
        }
    }

    fn terminal_params<'b>(&'b self, options: &'b QueryOptions) -> ResolveParams<'b> {
        ResolveParams {
            names: self.names,
            framework: self.framework,
            strict_scope: options.strict_scope,
            virtual_symbols: options.virtual_symbols,
            kind_filter: options.kind_filter.as_ref(),
        }
    }
}

/// Clamp a caret offset into the segment, snapping back to a char boundary
/// so multi-byte text cannot split a code point.
fn clamp_to_char_boundary(segment: &str, offset: usize) -> usize {
    let mut offset = offset.min(segment.len());
    while offset > 0 && !segment.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::clamp_to_char_boundary;

    #[test]
    fn caret_clamping() {
        assert_eq!(clamp_to_char_boundary("input", 3), 3);
        assert_eq!(clamp_to_char_boundary("input", 99), 5);
        assert_eq!(clamp_to_char_boundary("", 4), 0);
        // "é" is two bytes; offset 1 falls inside it.
        assert_eq!(clamp_to_char_boundary("élan", 1), 0);
    }
}
