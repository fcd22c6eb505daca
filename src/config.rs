//! Configuration file handling for stipple-braille.
//!
//! Loads configuration from `~/.config/stipple-braille/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::braille::Border;
use crate::source::{DEFAULT_BLUR, DEFAULT_IMAGE_SIZE};
use crate::stipple::StippleParams;

/// Configuration file structure for stipple-braille.
/// Loaded from ~/.config/stipple-braille/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub stipple: StippleParams,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ImageConfig {
    /// Square size images are resampled to before stippling.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Gaussian blur sigma applied after resizing.
    #[serde(default = "default_blur")]
    pub blur: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_IMAGE_SIZE,
            blur: DEFAULT_BLUR,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_border")]
    pub border: Border,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border: default_border(),
        }
    }
}

fn default_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

fn default_blur() -> f32 {
    DEFAULT_BLUR
}

fn default_border() -> Border {
    Border::Line
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# stipple-braille configuration

[stipple]
# Fraction of pixels turned into dots (0.0 - 1.0)
percentage = 0.33
# Spread of the suppression kernel in pixels
sigma = 0.9
# Weight of image brightness when choosing dots
content_bias = 0.5
# Place dots on bright areas instead of dark ones
negate = false

[image]
# Images are resampled to size x size (must be even)
size = 256
# Gaussian blur applied after resampling (0 disables)
blur = 0.5

[render]
# Border: none, line, square
border = "line"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("stipple-braille").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/stipple-braille/config.toml")
        })
}
