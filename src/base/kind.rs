use std::fmt;

use smol_str::SmolStr;

/// Top-level namespace a vocabulary entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Html,
    Css,
    Js,
}

impl Namespace {
    /// Get the canonical lowercase name of this namespace.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Html => "html",
            Namespace::Css => "css",
            Namespace::Js => "js",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a symbol: a namespace plus a kind name within it.
///
/// Examples: `html/elements`, `html/attributes`, `css/properties`.
/// Kind names are free-form so contributing sources can introduce their own
/// categories without touching this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolKind {
    namespace: Namespace,
    kind: SmolStr,
}

impl SymbolKind {
    /// Create a new symbol kind.
    pub fn new(namespace: Namespace, kind: impl Into<SmolStr>) -> Self {
        Self {
            namespace,
            kind: kind.into(),
        }
    }

    /// Shorthand for a kind in the HTML namespace.
    pub fn html(kind: impl Into<SmolStr>) -> Self {
        Self::new(Namespace::Html, kind)
    }

    /// Shorthand for a kind in the CSS namespace.
    pub fn css(kind: impl Into<SmolStr>) -> Self {
        Self::new(Namespace::Css, kind)
    }

    /// Shorthand for a kind in the JS namespace.
    pub fn js(kind: impl Into<SmolStr>) -> Self {
        Self::new(Namespace::Js, kind)
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.kind)
    }
}

/// Matcher over symbol kinds used by name conversion rules and kind filters.
///
/// `None` in either position is a wildcard, so a selector can target a whole
/// namespace (`html/*`) or every kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindSelector {
    namespace: Option<Namespace>,
    kind: Option<SmolStr>,
}

impl KindSelector {
    /// Selector matching every symbol kind.
    pub fn any() -> Self {
        Self::default()
    }

    /// Selector matching every kind within one namespace.
    pub fn of_namespace(namespace: Namespace) -> Self {
        Self {
            namespace: Some(namespace),
            kind: None,
        }
    }

    /// Selector matching exactly one symbol kind.
    pub fn of_kind(kind: SymbolKind) -> Self {
        Self {
            namespace: Some(kind.namespace),
            kind: Some(kind.kind),
        }
    }

    /// Check whether a symbol kind is selected.
    pub fn matches(&self, kind: &SymbolKind) -> bool {
        if let Some(ns) = self.namespace {
            if ns != kind.namespace {
                return false;
            }
        }
        if let Some(k) = &self.kind {
            if k != &kind.kind {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_wildcards() {
        let elements = SymbolKind::html("elements");
        let properties = SymbolKind::css("properties");

        assert!(KindSelector::any().matches(&elements));
        assert!(KindSelector::any().matches(&properties));

        let html_only = KindSelector::of_namespace(Namespace::Html);
        assert!(html_only.matches(&elements));
        assert!(!html_only.matches(&properties));

        let exact = KindSelector::of_kind(elements.clone());
        assert!(exact.matches(&elements));
        assert!(!exact.matches(&SymbolKind::html("attributes")));
    }

    #[test]
    fn kind_display() {
        assert_eq!(SymbolKind::html("elements").to_string(), "html/elements");
        assert_eq!(SymbolKind::css("properties").to_string(), "css/properties");
    }
}
