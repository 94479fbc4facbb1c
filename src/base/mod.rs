//! Foundation types for the websym registry.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Namespace`], [`SymbolKind`] - classification of vocabulary entries
//! - [`KindSelector`] - wildcard-able kind matcher for rules and filters
//! - [`split_path`] - slash splitting with empty-segment preservation
//! - Domain constants (well-known context kinds and symbol kind names)
//!
//! This module has NO dependencies on other websym modules.

pub mod constants;
mod kind;
mod path;

pub use kind::{KindSelector, Namespace, SymbolKind};
pub use path::split_path;
