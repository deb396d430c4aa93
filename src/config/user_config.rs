//! User-level configuration for worksight
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/worksight/config.toml (or the file named by `WORKSIGHT_CONFIG`)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "WORKSIGHT_CONFIG";
/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WORKSIGHT_DATA_DIR";
/// Environment variable overriding the default output format
pub const FORMAT_ENV: &str = "WORKSIGHT_FORMAT";

/// Keys accepted by `worksight config set`
pub const SETTABLE_KEYS: &[&str] = &["storage.data_dir", "output.format", "output.no_emoji"];

const EXAMPLE_CONFIG: &str = r#"# WorkSight User Configuration

[storage]
# Where assessment history and dashboard state are kept
# data_dir = "/home/me/.local/share/worksight"

[output]
# Default output format: text, json, markdown
# format = "text"

# Disable emoji in text output
# no_emoji = false
"#;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding assessments.jsonl and state.json
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format: text, json, markdown
    pub format: Option<String>,

    /// Disable emoji in text output
    pub no_emoji: Option<bool>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config file
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            match std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|content| Ok(toml::from_str::<UserConfig>(&content)?))
            {
                Ok(file_config) => {
                    debug!("Loaded user config from {}", path.display());
                    config.merge(file_config);
                }
                Err(e) => warn!("Failed to load {}: {}", path.display(), e),
            }
        }

        // Environment variables override everything
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.storage.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(format) = std::env::var(FORMAT_ENV) {
            if !format.trim().is_empty() {
                config.output.format = Some(format);
            }
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|p| p.join("worksight").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.storage.data_dir.is_some() {
            self.storage.data_dir = other.storage.data_dir;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.no_emoji.is_some() {
            self.output.no_emoji = other.output.no_emoji;
        }
    }

    /// Data directory, falling back to the platform default
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::storage::default_data_dir)
    }

    /// Default output format
    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    pub fn no_emoji(&self) -> bool {
        self.output.no_emoji.unwrap_or(false)
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, EXAMPLE_CONFIG)?;
        }

        Ok(config_path)
    }

    /// Set `key` (e.g. `output.format`) to `value` in the config file text,
    /// keeping comments and unrelated lines intact.
    pub fn set_value(content: &str, key: &str, value: &str) -> Result<String> {
        if !SETTABLE_KEYS.contains(&key) {
            bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            );
        }
        let Some((section, field)) = key.split_once('.') else {
            bail!("Config key must look like <section>.<field>");
        };

        let rendered = match key {
            "output.no_emoji" => match value {
                "true" | "false" => value.to_string(),
                _ => bail!("output.no_emoji must be true or false"),
            },
            "output.format" => match value {
                "text" | "json" | "markdown" | "md" => format!("\"{}\"", value),
                _ => bail!("output.format must be one of: text, json, markdown"),
            },
            _ => format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")),
        };
        let line = format!("{} = {}", field, rendered);

        let commented = regex::Regex::new(&format!(r"(?m)^#\s*{}\s*=.*$", regex::escape(field)))?;
        let active = regex::Regex::new(&format!(r"(?m)^{}\s*=.*$", regex::escape(field)))?;
        let header = format!("[{}]", section);

        let mut content = content.to_string();
        if active.is_match(&content) {
            content = active.replace(&content, regex::NoExpand(&line)).to_string();
        } else if commented.is_match(&content) {
            content = commented.replace(&content, regex::NoExpand(&line)).to_string();
        } else if let Some(pos) = content.find(&header) {
            let insert_at = content[pos..]
                .find('\n')
                .map(|i| pos + i + 1)
                .unwrap_or(content.len());
            if insert_at == content.len() && !content.ends_with('\n') {
                content.push('\n');
                content.push_str(&line);
                content.push('\n');
            } else {
                content.insert_str(insert_at, &format!("{}\n", line));
            }
        } else {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("\n{}\n{}\n", header, line));
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert_eq!(config.format(), "text");
        assert!(!config.no_emoji());
        assert!(config.data_dir().ends_with("worksight"));
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[storage]
data_dir = "/srv/worksight"

[output]
format = "json"
no_emoji = true
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/srv/worksight"));
        assert_eq!(config.format(), "json");
        assert!(config.no_emoji());
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert_eq!(config.format(), "text");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_invalid_toml_does_not_crash() {
        let bad_toml = "this is [[ not valid toml {{{}}}";
        assert!(toml::from_str::<UserConfig>(bad_toml).is_err());
    }

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = UserConfig::default();
        base.output.format = Some("markdown".into());
        let other = UserConfig {
            storage: StorageConfig {
                data_dir: Some("/tmp/ws".into()),
            },
            output: OutputConfig {
                format: None,
                no_emoji: Some(true),
            },
        };
        base.merge(other);
        assert_eq!(base.data_dir(), PathBuf::from("/tmp/ws"));
        assert_eq!(base.format(), "markdown");
        assert!(base.no_emoji());
    }

    #[test]
    fn test_set_value_uncomments_example_line() {
        let content = "[output]\n# format = \"text\"\n";
        let updated = UserConfig::set_value(content, "output.format", "json").unwrap();
        assert_eq!(updated, "[output]\nformat = \"json\"\n");
        let config: UserConfig = toml::from_str(&updated).unwrap();
        assert_eq!(config.format(), "json");
    }

    #[test]
    fn test_set_value_replaces_existing_line() {
        let content = "[output]\nno_emoji = false\n";
        let updated = UserConfig::set_value(content, "output.no_emoji", "true").unwrap();
        assert_eq!(updated, "[output]\nno_emoji = true\n");
    }

    #[test]
    fn test_set_value_adds_section() {
        let updated = UserConfig::set_value("", "storage.data_dir", "/data/ws").unwrap();
        let config: UserConfig = toml::from_str(&updated).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/data/ws"));
    }

    #[test]
    fn test_set_value_inserts_under_existing_header() {
        let content = "[storage]\n\n[output]\nformat = \"text\"\n";
        let updated = UserConfig::set_value(content, "storage.data_dir", "/x").unwrap();
        let config: UserConfig = toml::from_str(&updated).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/x"));
        assert_eq!(config.format(), "text");
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        assert!(UserConfig::set_value("", "ai.model", "x").is_err());
        assert!(UserConfig::set_value("", "output.format", "sarif").is_err());
        assert!(UserConfig::set_value("", "output.no_emoji", "yes").is_err());
    }

    #[test]
    fn test_example_config_is_valid_and_settable() {
        let config: UserConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.storage.data_dir.is_none());

        let updated = UserConfig::set_value(EXAMPLE_CONFIG, "output.no_emoji", "true").unwrap();
        assert!(updated.contains("# Disable emoji in text output\nno_emoji = true\n"));
        let config: UserConfig = toml::from_str(&updated).unwrap();
        assert!(config.no_emoji());
    }
}
