//! Alerts command implementation

use anyhow::{Context, Result};
use hybroid_codegen::naming::to_title_case;
use hybroid_codegen::{GeneratorConfig, generate_alerts};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::write_file;

/// An alert batch on disk and the stage it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertBatch {
    pub path: PathBuf,
    pub stem: String,
    pub stage: String,
}

/// Run the alerts command
pub fn run(input_dir: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<()> {
    config.validate().context("Invalid generator configuration")?;

    let batches = discover(input_dir)?;
    if batches.is_empty() {
        anyhow::bail!("No alert batches (*.json) found in {}", input_dir.display());
    }

    for batch in &batches {
        let json = fs::read_to_string(&batch.path)
            .with_context(|| format!("Failed to read {}", batch.path.display()))?;
        let code = generate_alerts(&json, &batch.stage, config)
            .with_context(|| format!("Failed to generate alerts from {}", batch.path.display()))?;

        let output = out_dir.join(format!("{}.gen.go", batch.stem));
        write_file(&output, &code)?;
        info!(stage = %batch.stage, output = %output.display(), "alert batch rendered");
        println!("✓ {} -> {}", batch.stage, output.display());
    }

    println!("\n✓ Generated {} alert files", batches.len());

    Ok(())
}

/// List `*.json` files of a directory, sorted by file name
pub fn discover(input_dir: &Path) -> Result<Vec<AlertBatch>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read directory: {}", input_dir.display()))?;

    let mut batches = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", input_dir.display()))?
            .path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        batches.push(AlertBatch {
            stage: to_title_case(&stem),
            stem,
            path,
        });
    }

    batches.sort_by(|a, b| a.stem.cmp(&b.stem));
    Ok(batches)
}
