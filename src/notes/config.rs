//! Per-app configuration for notesmith

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the optional configuration file at the app root
pub const CONFIG_FILE: &str = "notesmith.toml";

/// Configuration for a notes app being maintained
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the JSON note documents, relative to the app root
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,

    /// Pattern for note files inside the notes directory
    #[serde(default = "default_note_pattern")]
    pub note_pattern: String,

    /// File name of the generated index page
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Document fields consulted for a note's display title, in order
    #[serde(default = "default_title_fields")]
    pub title_fields: Vec<String>,

    /// Static file server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Static file server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Local port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the system browser once the server is up
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_notes_dir() -> String {
    "notes".to_string()
}

fn default_note_pattern() -> String {
    "*.json".to_string()
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_title_fields() -> Vec<String> {
    vec![
        "title".to_string(),
        "main_title".to_string(),
        "topic".to_string(),
    ]
}

fn default_port() -> u16 {
    8000
}

fn default_open_browser() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            note_pattern: default_note_pattern(),
            index_file: default_index_file(),
            title_fields: default_title_fields(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open_browser: default_open_browser(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the app root or return defaults
    pub fn load_or_default(app_root: &Path) -> Result<Self> {
        let config_path = app_root.join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: AppConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Check if a file name matches the note pattern
    pub fn matches_note(&self, file_name: &str) -> bool {
        glob_match_simple(&self.note_pattern, file_name)
    }
}

/// Simple glob matching helper for single-`*` patterns
fn glob_match_simple(pattern: &str, name: &str) -> bool {
    if pattern.contains('*') {
        let parts: Vec<&str> = pattern.split('*').collect();
        if parts.len() == 2 {
            return name.starts_with(parts[0]) && name.ends_with(parts[1]);
        }
    }

    name == pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.notes_dir, "notes");
        assert_eq!(config.note_pattern, "*.json");
        assert_eq!(config.index_file, "index.html");
        assert_eq!(config.title_fields, vec!["title", "main_title", "topic"]);
        assert_eq!(config.server.port, 8000);
        assert!(config.server.open_browser);
    }

    #[test]
    fn test_glob_matching() {
        assert!(glob_match_simple("*.json", "web-basics.json"));
        assert!(!glob_match_simple("*.json", "index.html"));
        assert!(glob_match_simple("notes.toml", "notes.toml"));
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            notes_dir = "documents"

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.notes_dir, "documents");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.note_pattern, "*.json");
        assert!(config.server.open_browser);
    }

    #[test]
    fn test_load_or_default_reads_config_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "notes_dir = \"pages\"\n").unwrap();

        let config = AppConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.notes_dir, "pages");

        let missing = AppConfig::load_or_default(&tmp.path().join("elsewhere")).unwrap();
        assert_eq!(missing.notes_dir, "notes");
    }
}
