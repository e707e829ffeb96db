use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{LabelError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Class name -> color token. Classes listed here are not prompted for.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_box_line_width")]
    pub box_line_width: f32,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f32,
    #[serde(default = "default_label_offset")]
    pub label_offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_bar_color")]
    pub bar_color: String,
}

// Default value functions
fn default_box_line_width() -> f32 {
    2.0
}

fn default_label_font_size() -> f32 {
    12.0
}

fn default_label_offset() -> i64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_bar_color() -> String {
    "skyblue".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            box_line_width: default_box_line_width(),
            label_font_size: default_label_font_size(),
            label_offset: default_label_offset(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bar_color: default_bar_color(),
        }
    }
}

/// Get the path to the per-user config file
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "label-validator")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist and parse. The per-user file is optional and
/// falls back to defaults when it is missing or broken.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|e| LabelError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return parse_config(path, &content);
    }

    let Some(path) = config_path() else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    match std::fs::read_to_string(&path)
        .map_err(|e| LabelError::Config {
            path: path.clone(),
            message: e.to_string(),
        })
        .and_then(|content| parse_config(&path, &content))
    {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            Ok(AppConfig::default())
        }
    }
}

pub fn parse_config(path: &Path, content: &str) -> Result<AppConfig> {
    toml::from_str(content).map_err(|e| LabelError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
