//! Api command implementation

use anyhow::{Context, Result};
use hybroid_codegen::{GeneratorConfig, LibraryArtifacts, LibraryConfig, generate_libraries};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where each artifact of a library lands
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub registration: PathBuf,
    pub docs: PathBuf,
    pub mapping: PathBuf,
}

impl OutputDirs {
    /// Docs and mapping default to the registration directory.
    pub fn new(out_dir: PathBuf, docs_dir: Option<PathBuf>, mapping_dir: Option<PathBuf>) -> Self {
        Self {
            docs: docs_dir.unwrap_or_else(|| out_dir.clone()),
            mapping: mapping_dir.unwrap_or_else(|| out_dir.clone()),
            registration: out_dir,
        }
    }
}

/// Run the api command
pub fn run(input: &Path, dirs: &OutputDirs, config: &GeneratorConfig) -> Result<()> {
    config.validate().context("Invalid generator configuration")?;

    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read documentation: {}", input.display()))?;

    let libraries = generate_libraries(&json, config)
        .with_context(|| format!("Failed to generate API from {}", input.display()))?;

    for (library, artifacts) in &libraries {
        let written = write_library(library, artifacts, dirs)?;
        println!("✓ {} ({} files)", library.name, written.len());
        for path in written {
            println!("  {}", path.display());
        }
    }

    println!("\n✓ Generated {} libraries", libraries.len());

    Ok(())
}

/// Write the three artifacts of one library, returning the written paths
pub fn write_library(
    library: &LibraryConfig,
    artifacts: &LibraryArtifacts,
    dirs: &OutputDirs,
) -> Result<Vec<PathBuf>> {
    let outputs = [
        (
            dirs.registration.join(format!("api_{}.gen.go", library.slug)),
            &artifacts.registration,
        ),
        (dirs.docs.join(format!("{}.gen.md", library.slug)), &artifacts.docs),
        (dirs.mapping.join(format!("{}.gen.go", library.slug)), &artifacts.mapping),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        write_file(&path, content)?;
        written.push(path);
    }

    Ok(written)
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
