//! Error types for code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generation operations
///
/// Every variant is fatal to the pass that raised it. Malformed schema input is a
/// build-time defect, so nothing here is retried or recovered locally.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Schema type tag outside the closed tag set
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A mandatory schema key is absent
    #[error("missing field `{field}` in {fragment}")]
    MissingField {
        field: &'static str,
        fragment: String,
    },

    /// Map-typed value declared without nested entries
    #[error("map entries should not be empty when the type is map: {fragment}")]
    EmptyMapEntries { fragment: String },

    /// Callback parameter on a function with no registered signature
    #[error("unresolved callback signature for function: {0}")]
    UnresolvedCallbackSignature(String),

    /// Variant mapping requested for an enum that was never registered
    #[error("unresolved enum table: {0}")]
    UnresolvedEnumTable(String),

    /// Two schema functions or enums map to the same target name
    #[error("mapped name collision: `{first}` and `{second}` both map to `{mapped}`")]
    MappedNameCollision {
        mapped: String,
        first: String,
        second: String,
    },

    /// A type/context combination that a well-formed model cannot produce
    #[error("invalid combination of type {ty} in context `{context}`")]
    Unrenderable { ty: String, context: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CodegenError {
    /// Short, stable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CodegenError::UnknownType(_) => "unknown_type",
            CodegenError::MissingField { .. } => "missing_field",
            CodegenError::EmptyMapEntries { .. } => "empty_map_entries",
            CodegenError::UnresolvedCallbackSignature(_) => "unresolved_callback_signature",
            CodegenError::UnresolvedEnumTable(_) => "unresolved_enum_table",
            CodegenError::MappedNameCollision { .. } => "mapped_name_collision",
            CodegenError::Unrenderable { .. } => "unrenderable",
            CodegenError::InvalidConfig(_) => "invalid_config",
            CodegenError::Json(_) => "json",
            CodegenError::Toml(_) => "toml",
        }
    }

    /// Build a [`CodegenError::MissingField`] carrying the offending fragment
    pub(crate) fn missing<T: serde::Serialize>(field: &'static str, raw: &T) -> Self {
        CodegenError::MissingField {
            field,
            fragment: fragment_of(raw),
        }
    }
}

/// Render a schema fragment compactly for error messages
pub(crate) fn fragment_of<T: serde::Serialize>(raw: &T) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "<unserializable>".to_string())
}
