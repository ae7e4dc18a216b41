//! Per-run generation state.

use crate::alert::ImportSet;
use crate::config::GeneratorConfig;
use crate::mapper::IdentifierMapper;

/// Mutable state threaded through one generation run.
///
/// Holds the identifier caches, the inferred import set and the alert id
/// counter. Nothing here is shared between runs: build a fresh context (or
/// call [`GenerationContext::reset`]) before translating an unrelated
/// document.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    library: String,
    mapper: IdentifierMapper,
    imports: ImportSet,
    last_alert_id: u32,
    alert_id_prefix: String,
    known_modules: Vec<String>,
}

impl GenerationContext {
    /// Create an empty context with no library bound.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            library: String::new(),
            mapper: IdentifierMapper::new(),
            imports: ImportSet::new(),
            last_alert_id: 0,
            alert_id_prefix: config.alert_id_prefix.clone(),
            known_modules: config.known_modules.clone(),
        }
    }

    /// Create a context rendering the library named `library`.
    pub fn for_library(library: &str, config: &GeneratorConfig) -> Self {
        let mut ctx = Self::new(config);
        ctx.library = library.to_string();
        ctx
    }

    /// Name of the library being rendered, as used in enum descriptors.
    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn mapper(&self) -> &IdentifierMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut IdentifierMapper {
        &mut self.mapper
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Record every known module referenced by `expr`.
    pub fn record_imports(&mut self, expr: &str) {
        self.imports.record(expr, &self.known_modules);
    }

    /// Assign the next alert id. The first call returns 1.
    pub fn next_alert_id(&mut self) -> u32 {
        self.last_alert_id += 1;
        self.last_alert_id
    }

    pub fn alert_id_prefix(&self) -> &str {
        &self.alert_id_prefix
    }

    /// Drop cached names, inferred imports and the alert counter.
    ///
    /// The bound library and the configuration stay in place.
    pub fn reset(&mut self) {
        self.mapper.clear();
        self.imports.clear();
        self.last_alert_id = 0;
    }
}
