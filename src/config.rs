//! Configuration for bookshelf.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BOOKSHELF_REFERENCE_YEAR, BOOKSHELF_SEED, BOOKSHELF_LOG)
//! 2. Config file (.bookshelf/config.yaml)
//! 3. Defaults (system clock, no seed, log level "info")
//!
//! Config file discovery:
//! - Searches current directory and parents for .bookshelf/config.yaml
//! - Falls back to ~/.bookshelf/config.yaml
//! - Paths in config file are relative to the config file's project root

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::Clock;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_LOG_LEVEL: &str = "info";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Pin the "current year" instead of reading the system clock
    pub reference_year: Option<i32>,
    /// Seed file to preload (relative to the project root)
    pub seed: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Year source for new catalogs
    pub clock: Clock,
    /// Seed file to preload, if any
    pub seed: Option<PathBuf>,
    /// Default tracing filter
    pub log_level: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            clock: Clock::System,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".bookshelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".bookshelf").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Overrides read from the environment
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    reference_year: Option<String>,
    seed: Option<String>,
    log_level: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            reference_year: std::env::var("BOOKSHELF_REFERENCE_YEAR").ok(),
            seed: std::env::var("BOOKSHELF_SEED").ok(),
            log_level: std::env::var("BOOKSHELF_LOG").ok(),
        }
    }
}

/// Merge a config file (if any) with environment overrides
fn resolve(
    config_file: Option<PathBuf>,
    file: Option<ConfigFile>,
    env: EnvOverrides,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig {
        config_file: config_file.clone(),
        ..Default::default()
    };

    if let (Some(config_path), Some(file)) = (config_file.as_deref(), file) {
        // Base directory is the parent of .bookshelf/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(year) = file.catalog.reference_year {
            resolved.clock = Clock::Fixed(year);
        }
        if let Some(ref seed) = file.catalog.seed {
            resolved.seed = Some(resolve_path(base_dir, seed));
        }
        if let Some(level) = file.log_level {
            resolved.log_level = level;
        }
    }

    if let Some(year) = env.reference_year {
        let year: i32 = year
            .trim()
            .parse()
            .with_context(|| format!("Invalid BOOKSHELF_REFERENCE_YEAR: {}", year))?;
        resolved.clock = Clock::Fixed(year);
    }
    if let Some(seed) = env.seed {
        resolved.seed = Some(PathBuf::from(seed));
    }
    if let Some(level) = env.log_level {
        resolved.log_level = level;
    }

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = config_file
        .as_deref()
        .map(load_config_file)
        .transpose()?;

    resolve(config_file, file, EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let dir = temp.path().join(".bookshelf");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None, EnvOverrides::default()).unwrap();

        assert_eq!(config.clock, Clock::System);
        assert!(config.seed.is_none());
        assert_eq!(config.log_level, "info");
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
catalog:
  reference_year: 2024
  seed: data/books.yaml
log_level: debug
"#,
        );

        let file = load_config_file(&config_path).unwrap();
        assert_eq!(file.version, "1.0");
        assert_eq!(file.catalog.reference_year, Some(2024));
        assert_eq!(file.catalog.seed, Some("data/books.yaml".to_string()));

        let config = resolve(Some(config_path), Some(file), EnvOverrides::default()).unwrap();
        assert_eq!(config.clock, Clock::Fixed(2024));
        assert_eq!(config.seed, Some(temp.path().join("data/books.yaml")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            "version: \"1.0\"\ncatalog:\n  reference_year: 2024\n",
        );
        let file = load_config_file(&config_path).unwrap();

        let env = EnvOverrides {
            reference_year: Some("2030".to_string()),
            seed: Some("/tmp/seed.json".to_string()),
            log_level: None,
        };
        let config = resolve(Some(config_path), Some(file), env).unwrap();

        assert_eq!(config.clock, Clock::Fixed(2030));
        assert_eq!(config.seed, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_reference_year() {
        let env = EnvOverrides {
            reference_year: Some("next year".to_string()),
            ..Default::default()
        };

        assert!(resolve(None, None, env).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./books.yaml"),
            PathBuf::from("/home/user/project/./books.yaml")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/books.yaml"),
            PathBuf::from("/absolute/books.yaml")
        );
    }
}
