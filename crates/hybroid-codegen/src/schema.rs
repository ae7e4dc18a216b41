//! Raw shapes of the JSON input documents.
//!
//! Mandatory keys are modelled as `Option` so that their absence surfaces as
//! [`CodegenError::MissingField`](crate::CodegenError::MissingField) carrying the
//! offending fragment instead of a bare deserialization error.

use crate::error::CodegenResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A documented library: `[pewpew_lib, fmath_lib]` in the upstream document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLibrary {
    #[serde(default)]
    pub functions: Vec<RawFunction>,

    #[serde(default)]
    pub enums: Vec<RawEnum>,
}

/// A function entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFunction {
    #[serde(default)]
    pub func_name: Option<String>,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub parameters: Vec<RawParam>,

    #[serde(default)]
    pub return_types: Vec<RawParam>,
}

/// A parameter, return value or struct field entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_entries: Option<MapEntries>,

    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<String>,
}

/// Nested struct fields, either listed or keyed by field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapEntries {
    List(Vec<RawParam>),
    Keyed(IndexMap<String, RawParam>),
}

impl MapEntries {
    /// Entries in declaration order; keyed entries take their key as name
    /// unless they declare one.
    pub fn into_entries(self) -> Vec<RawParam> {
        match self {
            MapEntries::List(entries) => entries,
            MapEntries::Keyed(entries) => entries
                .into_iter()
                .map(|(key, mut entry)| {
                    entry.name.get_or_insert(key);
                    entry
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MapEntries::List(entries) => entries.is_empty(),
            MapEntries::Keyed(entries) => entries.is_empty(),
        }
    }
}

/// An enum entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEnum {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub values: Vec<String>,
}

/// A diagnostic entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAlert {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub category: Option<String>,

    #[serde(default)]
    pub fields: IndexMap<String, String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub message_format: Vec<RawSpecifier>,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub note_format: Vec<RawSpecifier>,
}

/// A template substitution: a bare field or `{field: transform}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSpecifier {
    Field(String),
    Transformed(IndexMap<String, String>),
}

/// Parse the upstream documentation document (an array of libraries).
pub fn parse_document(json: &str) -> CodegenResult<Vec<RawLibrary>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse one alert batch (an array of alert entries).
pub fn parse_alerts(json: &str) -> CodegenResult<Vec<RawAlert>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn parse_document___reads_libraries_in_order() {
        let json = r#"[
            {"functions": [{"func_name": "print", "comment": "", "parameters": [], "return_types": []}],
             "enums": [{"name": "EntityType", "values": ["BAF"]}]},
            {"functions": []}
        ]"#;

        let libs = parse_document(json).unwrap();

        assert_eq!(libs.len(), 2);
        assert_eq!(libs[0].functions[0].func_name.as_deref(), Some("print"));
        assert_eq!(libs[0].enums[0].values, vec!["BAF"]);
        assert!(libs[1].enums.is_empty());
    }

    #[test]
    fn MapEntries___list___preserves_order() {
        let raw: RawParam = serde_json::from_str(
            r#"{"type": "map", "map_entries": [{"name": "b", "type": "int32"}, {"name": "a", "type": "boolean"}]}"#,
        )
        .unwrap();

        let entries = raw.map_entries.unwrap().into_entries();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn MapEntries___keyed___uses_keys_as_names_in_order() {
        let raw: RawParam = serde_json::from_str(
            r#"{"type": "map", "map_entries": {"shield": {"type": "int32"}, "has_lost": {"type": "boolean"}}}"#,
        )
        .unwrap();

        let entries = raw.map_entries.unwrap().into_entries();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["shield", "has_lost"]);
    }

    #[test]
    fn RawSpecifier___parses_both_shapes() {
        let specs: Vec<RawSpecifier> =
            serde_json::from_str(r#"["token", {"name": "strings.ToUpper({})"}]"#).unwrap();

        assert_eq!(specs[0], RawSpecifier::Field("token".into()));
        assert!(matches!(&specs[1], RawSpecifier::Transformed(m) if m["name"] == "strings.ToUpper({})"));
    }

    #[test]
    fn RawAlert___missing_optional_keys___default() {
        let alert: RawAlert =
            serde_json::from_str(r#"{"name": "X", "type": "Error", "message": "m"}"#).unwrap();

        assert!(alert.fields.is_empty());
        assert!(alert.note.is_empty());
        assert!(alert.message_format.is_empty());
    }
}
