//! Configuration loading and the check command

use anyhow::{Context, Result};
use hybroid_codegen::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hybroid-codegen.toml";

/// Load the configuration: explicit path, then `./hybroid-codegen.toml`, then defaults
pub fn load(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match resolve_path(explicit, Path::new(".")) {
        Some(path) => GeneratorConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

/// The configuration file to load, if any
pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Run the check command
pub fn check(explicit: Option<&Path>, config: &GeneratorConfig) -> Result<()> {
    let source = resolve_path(explicit, Path::new("."))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    println!("Checking configuration: {}", source);

    config.validate().context("Configuration validation failed")?;

    println!("\n✓ Configuration is valid!");
    println!("  Alert id prefix: {}", config.alert_id_prefix);
    println!("  Known modules: {}", config.known_modules.join(", "));
    println!("  Libraries:");
    for library in &config.libraries {
        println!("    {} (slug: {}, order: {})", library.name, library.slug, library.order);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_path___explicit___wins_over_working_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "").unwrap();

        let path = resolve_path(Some(Path::new("custom.json")), temp.path());

        assert_eq!(path, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn resolve_path___default_file_present___is_used() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "").unwrap();

        let path = resolve_path(None, temp.path());

        assert_eq!(path, Some(temp.path().join(DEFAULT_CONFIG_FILE)));
    }

    #[test]
    fn resolve_path___nothing_present___is_none() {
        let temp = TempDir::new().unwrap();

        assert_eq!(resolve_path(None, temp.path()), None);
    }

    #[test]
    fn load___explicit_toml___parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("codegen.toml");
        fs::write(&path, "alert_id_prefix = \"hbr\"\n").unwrap();

        let config = load(Some(path.as_path())).unwrap();

        assert_eq!(config.alert_id_prefix, "hbr");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn check___invalid_config___fails() {
        let config = GeneratorConfig {
            alert_id_prefix: String::new(),
            ..GeneratorConfig::default()
        };

        assert!(check(None, &config).is_err());
    }
}
