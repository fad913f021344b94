use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridfactConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_db")]
    pub db: PathBuf,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default, skip_serializing_if = "is_default_settings")]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            preview_rows: default_preview_rows(),
        }
    }
}

fn is_default_settings(s: &Settings) -> bool {
    s == &Settings::default()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_db() -> PathBuf {
    PathBuf::from("database.sqlite")
}

fn default_greeting() -> String {
    "Hey there! Ask me a question.".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_preview_rows() -> u32 {
    10
}

impl Default for GridfactConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            db: default_db(),
            greeting: default_greeting(),
            settings: Settings::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<GridfactConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let mut ignored_keys = std::collections::HashSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);

    // serde_ignored wrapper to capture unknown fields
    let cfg: GridfactConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        eprintln!("WARN: Ignored unknown config fields: {:?}", ignored_keys);
    }

    if cfg.model.trim().is_empty() {
        return Err(ConfigError("config has no model".into()));
    }

    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"model: gemini-1.5-flash
db: database.sqlite
greeting: "Hey there! Ask me a question."
settings:
  temperature: 0.0
  max_output_tokens: 1024
  preview_rows: 10
"#,
    )
    .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
