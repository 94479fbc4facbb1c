//! Shared fixtures for registry integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::Lazy;
use websym::base::constants::{KIND_HTML_ATTRIBUTES, KIND_HTML_ELEMENTS};
use websym::{Origin, RegistrySession, StaticSymbolSource, Symbol, SymbolKind};

pub fn elements() -> SymbolKind {
    SymbolKind::html(KIND_HTML_ELEMENTS)
}

pub fn attributes() -> SymbolKind {
    SymbolKind::html(KIND_HTML_ATTRIBUTES)
}

pub fn element(name: &str, origin: &str) -> Symbol {
    Symbol::new(name, elements(), Origin::new(origin))
}

pub fn attribute(name: &str, origin: &str) -> Symbol {
    Symbol::new(name, attributes(), Origin::new(origin))
}

/// The ambient HTML source used by most tests:
///
/// - `button` (attributes `disabled`, `type` in its nested scope)
/// - `input`
/// - `inner-block`
/// - `tag` — abstract grouping node whose nested scope holds the three
///   concrete elements above
/// - `v-anything` — virtual
pub fn html_source() -> Arc<StaticSymbolSource> {
    let button_attrs = Arc::new(StaticSymbolSource::with_symbols(
        "button-attrs",
        vec![
            attribute("disabled", "html-spec"),
            attribute("type", "html-spec"),
        ],
    ));
    let button = element("button", "html-spec").with_scope_source(button_attrs);
    let input = element("input", "html-spec");
    let inner_block = element("inner-block", "html-spec");

    let tag_children = Arc::new(StaticSymbolSource::with_symbols(
        "tag-children",
        vec![button.clone(), input.clone(), inner_block.clone()],
    ));
    let tag = element("tag", "html-spec")
        .with_abstract(true)
        .with_scope_source(tag_children);

    let v_anything = element("v-anything", "html-spec").with_virtual(true);

    Arc::new(StaticSymbolSource::with_symbols(
        "html-spec",
        vec![button, input, inner_block, tag, v_anything],
    ))
}

/// Context-scoped source contributing `custom-widget`.
pub fn widgets_source() -> Arc<StaticSymbolSource> {
    Arc::new(StaticSymbolSource::with_symbols(
        "widgets",
        vec![element("custom-widget", "widgets")],
    ))
}

/// Session over [`html_source`] (ambient) plus [`widgets_source`]
/// (contextual).
pub fn standard_session() -> RegistrySession {
    RegistrySession::builder()
        .add_source(html_source())
        .add_contextual_source(widgets_source())
        .build()
}

/// Shared read-only instance of the standard session. Queries are pure, so
/// tests can share it freely.
pub static STANDARD_SESSION: Lazy<RegistrySession> = Lazy::new(standard_session);
