//! hybroid-codegen - Declarative-to-source generation for Hybroid
//!
//! This crate turns the host scripting library's JSON documentation and the
//! compiler's alert descriptions into Go source and markdown:
//! - [`ApiType`] resolves schema type tags into a closed type set
//! - [`IdentifierMapper`] translates and caches host identifiers
//! - [`ValueModel`], [`FunctionModel`] and [`EnumModel`] describe the API
//! - [`emitter`] renders walker registrations, docs and inverse mappings
//! - [`alert`] synthesizes diagnostic types from message templates
//!
//! Every run threads an explicit [`GenerationContext`]; no state survives
//! between runs.
//!
//! # Example
//!
//! ```
//! use hybroid_codegen::{GeneratorConfig, generate_alerts};
//!
//! let json = r#"[{"name": "UnexpectedToken", "type": "Error",
//!                 "message": "unexpected %s", "message_format": ["Token"]}]"#;
//! let code = generate_alerts(json, "Parser", &GeneratorConfig::default()).unwrap();
//!
//! assert!(code.contains(r#"return fmt.Sprintf("unexpected %s", ut.Token)"#));
//! assert!(code.contains(r#"return "hyb001P""#));
//! ```

pub mod alert;
mod config;
mod context;
pub mod descriptor;
pub mod emitter;
mod error;
pub mod exceptions;
mod mapper;
mod model;
pub mod naming;
pub mod overrides;
pub mod schema;
mod types;
mod value;

pub use alert::{AlertModel, ImportSet, Specifier};
pub use config::{GeneratorConfig, LibraryConfig};
pub use context::GenerationContext;
pub use descriptor::Descriptor;
pub use emitter::LibraryArtifacts;
pub use error::{CodegenError, CodegenResult};
pub use mapper::{EnumTable, IdentifierMapper};
pub use model::{EnumModel, FunctionModel};
pub use naming::CaseConvention;
pub use types::ApiType;
pub use value::ValueModel;

/// Render every library of a documentation document.
///
/// The n-th library of the document is paired with the n-th entry of
/// [`GeneratorConfig::libraries`] and rendered with its own fresh context.
pub fn generate_libraries(
    json: &str,
    config: &GeneratorConfig,
) -> CodegenResult<Vec<(LibraryConfig, LibraryArtifacts)>> {
    let document = schema::parse_document(json)?;

    document
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let library = config.library(index).ok_or_else(|| {
                CodegenError::InvalidConfig(format!(
                    "no library configured for document entry {index}"
                ))
            })?;
            let mut ctx = GenerationContext::for_library(&library.name, config);
            let artifacts = emitter::render_library(raw, library, &mut ctx)?;
            Ok((library.clone(), artifacts))
        })
        .collect()
}

/// Render one alert batch into a `package alerts` source file.
///
/// Ids start at 1 for every call.
pub fn generate_alerts(json: &str, stage: &str, config: &GeneratorConfig) -> CodegenResult<String> {
    let alerts = schema::parse_alerts(json)?;
    let mut ctx = GenerationContext::new(config);
    alert::render_alert_file(&alerts, stage, &mut ctx)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiType, CaseConvention, CodegenError, CodegenResult, Descriptor, EnumModel,
        FunctionModel, GenerationContext, GeneratorConfig, IdentifierMapper, LibraryArtifacts,
        LibraryConfig, ValueModel, generate_alerts, generate_libraries,
    };
}
