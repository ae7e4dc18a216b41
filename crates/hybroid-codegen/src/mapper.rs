//! Memoized identifier translation.
//!
//! The mapper owns two independent tables: plain identifiers (functions) and
//! enum-scoped identifiers (enum names and their variants). A lookup returns
//! the cached value, then the manual override, then computes one with the
//! supplied [`CaseConvention`] and caches it. Entries are kept in
//! first-resolution order so the tables can be listed back deterministically.
//!
//! A mapper lives for one generation run. Call [`IdentifierMapper::clear`]
//! (or build a new one) before translating an unrelated document.

use crate::error::{CodegenError, CodegenResult};
use crate::naming::CaseConvention;
use crate::overrides;
use indexmap::IndexMap;

/// Variant table of one registered enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable {
    mapped: String,
    variants: IndexMap<String, String>,
}

impl EnumTable {
    fn new(mapped: String) -> Self {
        Self {
            mapped,
            variants: IndexMap::new(),
        }
    }

    /// Mapped name of the enum.
    pub fn mapped(&self) -> &str {
        &self.mapped
    }

    /// `(source, mapped)` variant pairs in first-resolution order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Get-or-compute cache over function and enum identifiers.
#[derive(Debug, Clone, Default)]
pub struct IdentifierMapper {
    functions: IndexMap<String, String>,
    enums: IndexMap<String, EnumTable>,
}

impl IdentifierMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a function identifier.
    ///
    /// Repeated calls with the same key return the same value until the
    /// mapper is cleared. A computed name already taken by another key is a
    /// [`CodegenError::MappedNameCollision`]; override entries may collide.
    pub fn map_function(&mut self, key: &str, convention: CaseConvention) -> CodegenResult<String> {
        if let Some(mapped) = self.functions.get(key) {
            return Ok(mapped.clone());
        }

        let mapped = match overrides::function(key) {
            Some(mapped) => {
                tracing::debug!(key, mapped, "function override");
                mapped.to_string()
            }
            None => {
                let mapped = convention.apply(key);
                if let Some((first, _)) = self.functions.iter().find(|(_, m)| **m == mapped) {
                    return Err(CodegenError::MappedNameCollision {
                        mapped,
                        first: first.clone(),
                        second: key.to_string(),
                    });
                }
                tracing::debug!(key, mapped = %mapped, "function name computed");
                mapped
            }
        };

        self.functions.insert(key.to_string(), mapped.clone());
        Ok(mapped)
    }

    /// Map an enum name, registering an empty variant table on first sight.
    ///
    /// `key` may be either the schema name or an already mapped name of a
    /// registered enum.
    pub fn map_enum(&mut self, key: &str, convention: CaseConvention) -> CodegenResult<String> {
        if let Some(source) = self.resolve_enum_key(key) {
            return Ok(self.enums[source].mapped.clone());
        }

        let mapped = match overrides::enum_name(key) {
            Some(mapped) => mapped.to_string(),
            None => convention.apply(key),
        };

        if let Some((first, _)) = self.enums.iter().find(|(_, t)| t.mapped == mapped) {
            return Err(CodegenError::MappedNameCollision {
                mapped,
                first: first.clone(),
                second: key.to_string(),
            });
        }

        tracing::debug!(key, mapped = %mapped, "enum registered");
        self.enums
            .insert(key.to_string(), EnumTable::new(mapped.clone()));
        Ok(mapped)
    }

    /// Map a variant of a registered enum.
    ///
    /// `enum_key` may be the enum's schema name or its mapped name. Variant
    /// overrides are always keyed by the schema name.
    pub fn map_enum_variant(
        &mut self,
        enum_key: &str,
        variant_key: &str,
        convention: CaseConvention,
    ) -> CodegenResult<String> {
        let source = self
            .resolve_enum_key(enum_key)
            .ok_or_else(|| CodegenError::UnresolvedEnumTable(enum_key.to_string()))?
            .to_string();

        let table = self
            .enums
            .get_mut(&source)
            .ok_or_else(|| CodegenError::UnresolvedEnumTable(enum_key.to_string()))?;

        if let Some(mapped) = table.variants.get(variant_key) {
            return Ok(mapped.clone());
        }

        let mapped = match overrides::variant(&source, variant_key) {
            Some(mapped) => {
                tracing::debug!(enum_key = %source, variant_key, mapped, "variant override");
                mapped.to_string()
            }
            None => convention.apply(variant_key),
        };

        table
            .variants
            .insert(variant_key.to_string(), mapped.clone());
        Ok(mapped)
    }

    /// Look up an enum table by schema name or mapped name.
    pub fn enum_table(&self, key: &str) -> Option<&EnumTable> {
        self.resolve_enum_key(key).map(|source| &self.enums[source])
    }

    /// `(source, mapped)` function pairs in first-resolution order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `(source, table)` enum pairs in registration order.
    pub fn enums(&self) -> impl Iterator<Item = (&str, &EnumTable)> {
        self.enums.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.functions.clear();
        self.enums.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.enums.is_empty()
    }

    /// Resolve to the schema name, trying the direct key before a reverse
    /// scan over mapped names.
    fn resolve_enum_key(&self, key: &str) -> Option<&str> {
        if let Some((source, _)) = self.enums.get_key_value(key) {
            return Some(source.as_str());
        }

        self.enums
            .iter()
            .find(|(_, table)| table.mapped == key)
            .map(|(source, _)| source.as_str())
    }
}
