//! Name conversion between query tokens and canonical symbol spellings.
//!
//! Frameworks disagree about casing: a template may write `my-attr` while
//! the contributing source declares `myAttr`. The [`NameConversionEngine`]
//! applies an ordered list of kind-scoped [`NameConversionRules`] to expand
//! a query token into the canonical candidates to attempt against a source,
//! and to convert canonical names back into the display form shown to the
//! caller. Everything here is a pure function over the rule configuration.

mod engine;
mod rules;

pub use engine::NameConversionEngine;
pub use rules::{NameConversionRules, NameTransform};
