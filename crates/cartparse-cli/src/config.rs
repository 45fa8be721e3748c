//! Configuration management for the CLI
//!
//! Configuration comes from, in increasing precedence:
//! - Default values
//! - The first configuration file found (TOML, YAML or JSON)
//! - Environment variables
//! - Command-line arguments

use crate::error::{Error, Result};
use cartparse_core::DEFAULT_TOLERANCE;
use cartparse_schemas::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document parsing settings
    pub parser: ParserConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Consistency check settings
    pub check: CheckConfig,
}

/// Document parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Cell delimiter
    pub delimiter: char,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used without `-v`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Consistency check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Allowed difference between two amounts
    pub tolerance: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: char::from(DEFAULT_DELIMITER),
        }
    }
}

impl ParserConfig {
    /// The delimiter as the byte the tokenizer splits on
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
            .map_err(|reason| Error::config(format!("parser.delimiter {}", reason)))
    }
}

/// Accept `delimiter` only if it is one ASCII byte other than a line break
pub fn delimiter_byte(delimiter: char) -> std::result::Result<u8, String> {
    if matches!(delimiter, '\n' | '\r') {
        return Err("cannot be a line break".to_string());
    }

    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| format!("must be an ASCII character, got {:?}", delimiter))
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Supported configuration file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "TOML, YAML or JSON".to_string(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::of(path)? {
            FileFormat::Toml => toml::from_str(&content).map_err(|e| {
                Error::config(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Configuration file paths searched by [`Config::load`], in order
    pub fn default_config_paths() -> Vec<PathBuf> {
        const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
        let mut paths = Vec::new();

        // Current directory
        for ext in EXTENSIONS {
            paths.push(PathBuf::from(format!(".cartparse.{}", ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let cartparse_dir = config_dir.join("cartparse");
            for ext in EXTENSIONS {
                paths.push(cartparse_dir.join(format!("config.{}", ext)));
            }
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            for ext in EXTENSIONS {
                paths.push(home_dir.join(format!(".cartparse.{}", ext)));
            }
        }

        paths
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))
    }

    /// Save configuration to a file; the extension picks the format
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::of(path)? {
            FileFormat::Toml => self.to_toml()?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.parser.delimiter_byte()?;
        if !self.check.tolerance.is_finite() || self.check.tolerance < 0.0 {
            return Err(Error::config(format!(
                "check.tolerance must be a non-negative number, got {}",
                self.check.tolerance
            )));
        }
        if crate::cli::OutputFormat::from_name(&self.output.format).is_none() {
            return Err(Error::config(format!(
                "Unknown output.format: {}",
                self.output.format
            )));
        }
        Ok(())
    }
}
