use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TipboardError};

/// Main configuration structure for Tipboard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where the tip collection is retrieved from
    #[serde(default)]
    pub source: SourceConfig,
    /// Table layout and quick-filter options
    #[serde(default)]
    pub board: BoardConfig,
    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from an explicit path, or from the first default
    /// location that exists. Falls back to defaults when no file is found.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            tracing::info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let default_paths = [
            dirs::home_dir().map(|h| h.join(".tipboard").join("config.toml")),
            dirs::config_dir().map(|c| c.join("tipboard").join("config.toml")),
            Some(PathBuf::from("config.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TipboardError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content)
            .map_err(|e| TipboardError::Config(format!("Failed to parse config: {e}")))
    }
}

/// Tip collection source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL of the static site serving the data file
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed resource path of the data file
    #[serde(default = "default_path")]
    pub path: String,
}

impl SourceConfig {
    /// Full location of the data document (URL or local file path)
    pub fn location(&self) -> String {
        if self.base_url.is_empty() {
            return self.path.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_path() -> String {
    "/data/tips.json".to_string()
}

/// Board presentation configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BoardConfig {
    /// Show the risk column (and enable the risk filter and badge)
    #[serde(default)]
    pub show_risk: bool,
    /// Category options for the filter selector and chips.
    /// Empty means derive them from the loaded data.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Export configuration. The file name is always
/// [`EXPORT_FILE_NAME`](crate::export::EXPORT_FILE_NAME); only the directory varies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory the export file is written into
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source.base_url, "http://localhost:8080");
        assert_eq!(config.source.path, "/data/tips.json");
        assert!(!config.board.show_risk);
        assert!(config.board.categories.is_empty());
        assert_eq!(config.export.dir, PathBuf::from("."));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
[source]
base_url = "https://tips.example.com/"
path = "/data/tips.json"

[board]
show_risk = true
categories = ["Network", "System"]

[export]
dir = "/tmp/exports"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse TOML");

        assert_eq!(config.source.base_url, "https://tips.example.com/");
        assert!(config.board.show_risk);
        assert_eq!(config.board.categories, vec!["Network", "System"]);
        assert_eq!(config.export.dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_toml_partial_deserialization() {
        let toml_str = r#"
[board]
show_risk = true
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse partial TOML");

        assert!(config.board.show_risk);
        assert_eq!(config.source.path, "/data/tips.json");
        assert_eq!(config.export.dir, PathBuf::from("."));
    }

    #[test]
    fn test_export_file_name_is_not_configurable() {
        let toml_str = r#"
[export]
dir = "out"
file_name = "backup.json"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(config.export.dir, PathBuf::from("out"));

        let rendered = toml::to_string(&config.export).expect("Failed to serialize");
        assert!(!rendered.contains("file_name"));
        assert!(!rendered.contains("backup.json"));
    }

    #[test]
    fn test_location_joins_base_and_path() {
        let source = SourceConfig {
            base_url: "https://tips.example.com/".to_string(),
            path: "/data/tips.json".to_string(),
        };
        assert_eq!(source.location(), "https://tips.example.com/data/tips.json");
    }

    #[test]
    fn test_location_without_base_is_path() {
        let source = SourceConfig {
            base_url: String::new(),
            path: "./tips.json".to_string(),
        };
        assert_eq!(source.location(), "./tips.json");
    }

    #[test]
    fn test_load_missing_explicit_file_is_config_error() {
        let err = Config::load(Some(Path::new("/nonexistent/tipboard.toml"))).unwrap_err();
        assert!(matches!(err, TipboardError::Config(_)));
    }
}
