//! Error and diagnostic types.
//!
//! `Error` covers conditions that abort a single parse. `Diagnostic` covers
//! conditions that are recoverable at the point they're found (an unknown
//! element, a priority collision, a validation failure) and are instead
//! accumulated into a [`LoadReport`] so a caller can inspect what was
//! skipped without losing the rest of a batch load.

use thiserror::Error;

#[derive(Debug, Error)]
/// Error happened during the parsing process.
pub enum ParseError {
    #[error("XML parser error: {0}")]
    /// Xml error.
    XmlParserError(#[from] xmltree::ParseError),

    #[error("YAML parser error: {0}")]
    /// YAML scan/parse error.
    YamlParserError(#[from] yaml_rust::ScanError),

    #[error("URL parser error: {0}")]
    /// url failed to parse a URL.
    UrlParseError(#[from] url::ParseError),

    #[error("Input/output error: {0} ")]
    /// IO.
    IOError(#[from] std::io::Error),

    #[error("Invalid tag: {0}")]
    /// The expected tag is misused.
    InvalidTag(String),

    #[error("A required tag is missing: {0}")]
    /// Required tag is missing.
    MissingTag(String),

    #[error("Missing attribute {0} required by tag {1}")]
    /// A required attribute is missing.
    MissingAttribute(String, String),

    #[error("The tag {0} doesn't have a value")]
    /// A missing value that's required.
    MissingValue(String),

    #[error("Invalid value {0} passed to attribute {1} for tag {2}")]
    /// A value passed to an attribute for a specific tag is invalid.
    InvalidValue(String, String, String),

    #[error("Schema violation in {element}: {reason}")]
    /// A structural/semantic rule of the format was violated (wrong root
    /// element, unsupported format version, a component missing a field the
    /// dialect requires).
    Schema {
        /// Element or document the violation was found in.
        element: String,
        /// Human readable reason.
        reason: String,
    },

    #[error("Error parsing {0}: {1}")]
    /// A parsing error requiring a reason.
    Other(String, String),

    #[error("load cancelled")]
    /// A cooperative cancellation token fired during an async load.
    Cancelled,
}

impl ParseError {
    /// Creates an invalid value error.
    pub fn invalid_value(val: &str, attr: &str, tag: &str) -> Self {
        ParseError::InvalidValue(val.to_string(), attr.to_string(), tag.to_string())
    }

    /// Creates an invalid tag error.
    pub fn invalid_tag(tag: &str) -> Self {
        ParseError::InvalidTag(tag.to_string())
    }

    /// Creates a missing attribute error.
    pub fn missing_attribute(attr: &str, tag: &str) -> Self {
        ParseError::MissingAttribute(attr.to_string(), tag.to_string())
    }

    /// Creates a missing tag error.
    pub fn missing_tag(tag: &str) -> Self {
        ParseError::MissingTag(tag.to_string())
    }

    /// Creates a missing value error.
    pub fn missing_value(tag: &str) -> Self {
        ParseError::MissingValue(tag.to_string())
    }

    /// Creates a schema violation error.
    pub fn schema(element: &str, reason: &str) -> Self {
        ParseError::Schema {
            element: element.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a other error.
    pub fn other(tag: &str, reason: &str) -> Self {
        ParseError::Other(tag.to_string(), reason.to_string())
    }
}

/// A non-fatal condition discovered while loading a batch of components into
/// a [`crate::pool::Pool`]. None of these stop the load; they're surfaced so
/// callers can decide whether to warn, log, or ignore.
#[derive(Debug, Clone, Error)]
pub enum Diagnostic {
    #[error("unknown element <{tag}> under <{parent}>, ignored")]
    /// An element the codec doesn't recognize was skipped.
    UnknownElement {
        /// Parent element the unknown child was found under.
        parent: String,
        /// The unrecognized tag name.
        tag: String,
    },

    #[error("component {data_id} collided with an existing entry of {resolution}")]
    /// Two components claimed the same data id and neither could take
    /// priority over the other deterministically.
    Collision {
        /// The data id both components share.
        data_id: String,
        /// How the collision was resolved (or that it was rejected).
        resolution: String,
    },

    #[error("component {data_id} failed validation: {reason}")]
    /// A component survived parsing but failed a Refine-step invariant
    /// (missing required field, dangling reference, …) and was hidden from
    /// default pool queries.
    Validation {
        /// The offending component's data id.
        data_id: String,
        /// Human readable reason.
        reason: String,
    },

    #[error("unknown category {name:?} retained")]
    /// A category name not present in the active registry was kept anyway.
    UnknownCategory {
        /// The unrecognized category name.
        name: String,
    },

    #[error("failed to fetch external release list for {data_id}: {reason}")]
    /// A `ReleaseFetcher` failed to resolve a component's external release
    /// list; the list is marked `errored` but the load still succeeds.
    ReleaseFetchFailed {
        /// The affected component's data id.
        data_id: String,
        /// Human readable reason.
        reason: String,
    },
}

/// Outcome of a batch load: how many components made it in, plus every
/// non-fatal [`Diagnostic`] collected along the way.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    /// Number of components successfully inserted.
    pub inserted: usize,
    /// Non-fatal diagnostics gathered while loading.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn merge(&mut self, other: LoadReport) {
        self.inserted += other.inserted;
        self.diagnostics.extend(other.diagnostics);
    }
}
