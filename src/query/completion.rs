use smol_str::SmolStr;

use crate::base::SymbolKind;
use crate::symbol::Symbol;

/// One code-completion candidate.
///
/// The replace range always spans the whole last path segment, not just the
/// text before the caret, so accepting a completion overwrites trailing
/// characters already typed. Presentation concerns (icons, ranking,
/// narrowing against the typed text) belong to the UI collaborator; the
/// carried [`Symbol`] and caret offset hold the metadata it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    label: SmolStr,
    caret_offset: usize,
    replace_len: usize,
    symbol: Symbol,
}

impl CompletionItem {
    pub(crate) fn new(
        label: SmolStr,
        caret_offset: usize,
        replace_len: usize,
        symbol: Symbol,
    ) -> Self {
        Self {
            label,
            caret_offset,
            replace_len,
            symbol,
        }
    }

    /// Display name, converted through the session's name rules.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The clamped caret position within the replaced segment; the typed
    /// text before it is what the presenter narrows against.
    pub fn caret_offset(&self) -> usize {
        self.caret_offset
    }

    /// Bytes of the existing last segment to replace, counted from the
    /// segment start.
    pub fn replace_len(&self) -> usize {
        self.replace_len
    }

    /// The matched symbol, for icons/typing in the UI.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn kind(&self) -> &SymbolKind {
        self.symbol.kind()
    }

    pub fn is_virtual(&self) -> bool {
        self.symbol.is_virtual()
    }

    pub fn is_abstract(&self) -> bool {
        self.symbol.is_abstract()
    }
}
