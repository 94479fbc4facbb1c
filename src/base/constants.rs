//! Well-known names shared between registry sessions and their collaborators.

/// Context kind selecting the active framework for a session.
///
/// The value under this key decides which framework-gated ambient layers
/// are consulted during resolution.
pub const KIND_FRAMEWORK: &str = "framework";

// Common symbol kind names. Contributing sources are free to use their own
// kind strings; these cover the vocabulary shared by the built-in tests and
// typical HTML/CSS contributors.
pub const KIND_HTML_ELEMENTS: &str = "elements";
pub const KIND_HTML_ATTRIBUTES: &str = "attributes";
pub const KIND_HTML_EVENTS: &str = "events";
pub const KIND_CSS_PROPERTIES: &str = "properties";
pub const KIND_CSS_CLASSES: &str = "classes";
pub const KIND_CSS_FUNCTIONS: &str = "functions";
pub const KIND_JS_PROPERTIES: &str = "properties";
pub const KIND_JS_EVENTS: &str = "events";

/// Upper bound on how many ambiguous matches at one path segment are
/// descended into before the remainder is discarded.
pub const DEFAULT_MAX_SEGMENT_FAN_OUT: usize = 64;
