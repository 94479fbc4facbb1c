use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::SymbolKind;

use super::NameConversionRules;

/// Ordered collection of name conversion rule sets.
///
/// Rule sets are consulted in precedence order, most-recently-added first;
/// the first set whose selector matches the target kind is used. When no
/// set matches, or when no target kind is known, names pass through
/// unchanged. Layering additional rules produces a new engine sharing the
/// existing rule storage, so derived registry sessions stay cheap.
#[derive(Clone, Debug, Default)]
pub struct NameConversionEngine {
    // Index 0 has the highest precedence.
    rules: Arc<[NameConversionRules]>,
}

impl NameConversionEngine {
    /// Create an engine from rule sets ordered highest-precedence first.
    pub fn new(rules: Vec<NameConversionRules>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// An engine with no rules: the identity transform everywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive an engine with `additional` rule sets prepended at the
    /// highest precedence. The original engine is untouched.
    pub fn layered(&self, additional: Vec<NameConversionRules>) -> Self {
        if additional.is_empty() {
            return self.clone();
        }
        let mut rules = additional;
        rules.extend(self.rules.iter().cloned());
        Self::new(rules)
    }

    fn rule_for(&self, kind: &SymbolKind) -> Option<&NameConversionRules> {
        self.rules.iter().find(|r| r.selector().matches(kind))
    }

    /// Ordered canonical-form candidates to attempt against a source for a
    /// query token. `kind` is the target symbol kind when one is known;
    /// without one the token is its own single candidate.
    pub fn canonical_candidates(&self, kind: Option<&SymbolKind>, token: &str) -> Vec<SmolStr> {
        match kind.and_then(|k| self.rule_for(k)) {
            Some(rules) => rules.canonical_candidates(token),
            None => vec![SmolStr::new(token)],
        }
    }

    /// Display/query-form name for a canonical symbol name.
    pub fn display_name(&self, kind: &SymbolKind, canonical: &str) -> SmolStr {
        match self.rule_for(kind) {
            Some(rules) => rules.display_name(canonical),
            None => SmolStr::new(canonical),
        }
    }
}
