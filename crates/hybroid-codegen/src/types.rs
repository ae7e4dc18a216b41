//! Schema type tags and their closed semantic counterpart.

use crate::error::{CodegenError, CodegenResult};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a schema value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiType {
    Bool,
    Number,
    Fixed,
    Entity,
    List,
    Map,
    String,
    Callback,
}

impl ApiType {
    /// Every variant, in declaration order.
    pub const ALL: [ApiType; 8] = [
        ApiType::Bool,
        ApiType::Number,
        ApiType::Fixed,
        ApiType::Entity,
        ApiType::List,
        ApiType::Map,
        ApiType::String,
        ApiType::Callback,
    ];

    /// Resolve a schema type tag, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use hybroid_codegen::ApiType;
    ///
    /// assert_eq!(ApiType::resolve("Int64").unwrap(), ApiType::Number);
    /// assert!(ApiType::resolve("float").is_err());
    /// ```
    pub fn resolve(tag: &str) -> CodegenResult<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "boolean" => Ok(ApiType::Bool),
            "int32" | "int64" => Ok(ApiType::Number),
            "fixedpoint" => Ok(ApiType::Fixed),
            "entityid" => Ok(ApiType::Entity),
            "list" => Ok(ApiType::List),
            "map" => Ok(ApiType::Map),
            "string" => Ok(ApiType::String),
            "callback" => Ok(ApiType::Callback),
            _ => Err(CodegenError::UnknownType(tag.to_string())),
        }
    }

    /// Name used for this type in generated documentation signatures.
    pub fn doc_name(self) -> &'static str {
        match self {
            ApiType::Bool => "bool",
            ApiType::Number => "number",
            ApiType::Fixed => "fixed",
            ApiType::Entity => "entity",
            ApiType::List => "list",
            ApiType::Map => "struct",
            ApiType::String => "text",
            ApiType::Callback => "fn",
        }
    }
}

impl FromStr for ApiType {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
