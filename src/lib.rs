//! # websym-base
//!
//! Core library for hierarchical web-vocabulary symbol registries, as used
//! by editor tooling ("jump to symbol", "validate reference", code
//! completion). Cooperating frameworks contribute overlapping vocabularies
//! of tags, attributes and CSS constructs; a registry session resolves
//! slash-delimited symbolic paths against them and produces exact matches
//! or ranked completion candidates.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → RegistrySession, builder, stable pointers
//!   ↓
//! query     → QueryEngine (name match + completion), QueryOptions
//!   ↓
//! scope     → SymbolSource capability, ScopeChain, StaticSymbolSource
//!   ↓
//! names     → NameConversionEngine, kind-scoped conversion rules
//!   ↓
//! symbol    → Symbol records and provenance
//!   ↓
//! base      → Primitives (Namespace, SymbolKind, path splitting)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use websym::{
//!     Origin, QueryOptions, RegistrySession, StaticSymbolSource, Symbol, SymbolKind,
//! };
//!
//! let elements = SymbolKind::html("elements");
//! let source = Arc::new(StaticSymbolSource::with_symbols(
//!     "html-spec",
//!     vec![
//!         Symbol::new("button", elements.clone(), Origin::new("html-spec")),
//!         Symbol::new("input", elements.clone(), Origin::new("html-spec")),
//!     ],
//! ));
//! let session = RegistrySession::builder().add_source(source).build();
//!
//! let matches = session
//!     .run_name_match_query_path("button", &QueryOptions::new())
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name(), "button");
//! ```

// ============================================================================
// MODULES (dependency order: base → symbol → names → scope → query → session)
// ============================================================================

/// Foundation types: namespaces, symbol kinds, path splitting
pub mod base;

/// Immutable session context (framework selection etc.)
pub mod context;

/// Name conversion between query tokens and canonical spellings
pub mod names;

/// Query traversal: name matching and code completion
pub mod query;

/// Symbol sources and composable scope chains
pub mod scope;

/// Registry sessions: the public query surface
pub mod session;

/// Symbol records and provenance
pub mod symbol;

// Re-export commonly needed items
pub use base::{KindSelector, Namespace, SymbolKind, split_path};
pub use context::Context;
pub use names::{NameConversionEngine, NameConversionRules, NameTransform};
pub use query::{CompletionItem, QueryOptions};
pub use scope::{
    LayerProvenance, ModificationTracker, QueryError, ScopeChain, ScopeLayer, StaticSymbolSource,
    SymbolSource,
};
pub use session::{RegistrySession, RegistrySessionBuilder, SessionPointer};
pub use symbol::{Origin, Symbol};
