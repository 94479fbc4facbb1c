use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::base::KindSelector;

/// One bidirectional name transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameTransform {
    /// Leave the name unchanged.
    Identity,
    /// ASCII-insensitive lowercase fold.
    Lowercase,
    /// `my-attr` → `myAttr`
    HyphenToCamel,
    /// `myAttr` → `my-attr`
    CamelToHyphen,
    /// Drop a fixed prefix; names without the prefix pass through unchanged.
    StripPrefix(SmolStr),
    /// Prepend a fixed prefix.
    AddPrefix(SmolStr),
}

impl NameTransform {
    /// Apply this transform to a name.
    pub fn apply(&self, name: &str) -> SmolStr {
        match self {
            NameTransform::Identity => SmolStr::new(name),
            NameTransform::Lowercase => SmolStr::new(name.to_lowercase()),
            NameTransform::HyphenToCamel => hyphen_to_camel(name),
            NameTransform::CamelToHyphen => camel_to_hyphen(name),
            NameTransform::StripPrefix(prefix) => {
                SmolStr::new(name.strip_prefix(prefix.as_str()).unwrap_or(name))
            }
            NameTransform::AddPrefix(prefix) => SmolStr::new(format!("{prefix}{name}")),
        }
    }
}

fn hyphen_to_camel(name: &str) -> SmolStr {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    SmolStr::new(out)
}

fn camel_to_hyphen(name: &str) -> SmolStr {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_uppercase() && !out.is_empty() {
            out.push('-');
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    SmolStr::new(out)
}

/// A rule set scoped to some symbol kinds.
///
/// `canonical` lists the transforms tried, in order, to turn a query token
/// into canonical candidates for source lookup. `display` converts a
/// canonical symbol name back into the query/display form. A fresh rule set
/// is the identity in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameConversionRules {
    selector: KindSelector,
    canonical: Vec<NameTransform>,
    display: NameTransform,
}

impl NameConversionRules {
    /// Create an identity rule set for the selected kinds.
    pub fn new(selector: KindSelector) -> Self {
        Self {
            selector,
            canonical: vec![NameTransform::Identity],
            display: NameTransform::Identity,
        }
    }

    /// Replace the canonical-candidate transforms.
    pub fn with_canonical(mut self, transforms: Vec<NameTransform>) -> Self {
        self.canonical = transforms;
        self
    }

    /// Replace the display transform.
    pub fn with_display(mut self, transform: NameTransform) -> Self {
        self.display = transform;
        self
    }

    pub fn selector(&self) -> &KindSelector {
        &self.selector
    }

    /// Expand a query token into ordered, deduplicated canonical candidates.
    pub fn canonical_candidates(&self, token: &str) -> Vec<SmolStr> {
        let mut candidates: IndexSet<SmolStr> = IndexSet::with_capacity(self.canonical.len());
        for transform in &self.canonical {
            candidates.insert(transform.apply(token));
        }
        candidates.into_iter().collect()
    }

    /// Convert a canonical symbol name into its display form.
    pub fn display_name(&self, canonical: &str) -> SmolStr {
        self.display.apply(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphen_camel_round_trip() {
        assert_eq!(NameTransform::HyphenToCamel.apply("my-attr"), "myAttr");
        assert_eq!(
            NameTransform::HyphenToCamel.apply("custom-widget-name"),
            "customWidgetName"
        );
        assert_eq!(NameTransform::CamelToHyphen.apply("myAttr"), "my-attr");
        assert_eq!(NameTransform::CamelToHyphen.apply("onClick"), "on-click");
        // Already-plain names pass through.
        assert_eq!(NameTransform::HyphenToCamel.apply("button"), "button");
        assert_eq!(NameTransform::CamelToHyphen.apply("button"), "button");
    }

    #[test]
    fn prefix_transforms() {
        assert_eq!(
            NameTransform::StripPrefix("on-".into()).apply("on-click"),
            "click"
        );
        assert_eq!(
            NameTransform::StripPrefix("on-".into()).apply("click"),
            "click"
        );
        assert_eq!(NameTransform::AddPrefix("v-".into()).apply("if"), "v-if");
    }

    #[test]
    fn candidates_keep_order_and_dedup() {
        let rules = NameConversionRules::new(KindSelector::any()).with_canonical(vec![
            NameTransform::Identity,
            NameTransform::HyphenToCamel,
            NameTransform::Lowercase,
        ]);
        // "button" is unchanged by all three transforms.
        assert_eq!(rules.canonical_candidates("button"), vec!["button"]);
        assert_eq!(
            rules.canonical_candidates("my-attr"),
            vec!["my-attr", "myAttr"]
        );
    }

    #[test]
    fn fresh_rules_are_identity() {
        let rules = NameConversionRules::new(KindSelector::any());
        assert_eq!(rules.canonical_candidates("Whatever"), vec!["Whatever"]);
        assert_eq!(rules.display_name("Whatever"), "Whatever");
    }
}
