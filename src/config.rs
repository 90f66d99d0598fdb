// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Configuration file types and parsing for the logging pipeline.
//!
//! JSON5 configuration format supporting:
//! - Root/module tag text and the tag width policy
//! - Default level for bare (unprefixed) lines
//! - Optional file sink directory and process identity override
//! - Comments and trailing commas

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{Level, TagLayout, WidthPolicy};

/// Widest tag body the variable policy will emit
const TAG_WIDTH_MAX: i64 = 128;

/// Startup configuration (JSON5 file format)
///
/// `width` selects the tag policy by sign: positive pads on the right
/// (left-aligned), negative pads on the left (right-aligned), zero keeps
/// the tag at its natural size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Root tag text, shared by every module of the process
    #[serde(default)]
    pub root_tag: String,

    /// Module tag text appended after the root
    #[serde(default)]
    pub module_tag: String,

    /// Signed tag width; see the struct docs for the sign convention
    #[serde(default = "default_width")]
    pub width: i64,

    /// Delimiter pair wrapped around the rendered tag
    #[serde(default = "default_delimiters")]
    pub delimiters: (String, String),

    /// Level assigned to bare lines outside a capture session.
    /// `None` suppresses them.
    #[serde(default = "default_level")]
    pub default_level: Level,

    /// Identity reported to the platform log and used to name the log
    /// file. Defaults to the executable name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ident: Option<String>,

    /// Directory for the file sink; no file sink when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output_dir: Option<PathBuf>,
}

fn default_width() -> i64 {
    -24
}

fn default_delimiters() -> (String, String) {
    ("[".to_string(), "]".to_string())
}

fn default_level() -> Level {
    Level::None
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            root_tag: String::new(),
            module_tag: String::new(),
            width: default_width(),
            delimiters: default_delimiters(),
            default_level: default_level(),
            ident: None,
            output_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from a JSON5 file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON5 string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize configuration to JSON5 string (with pretty formatting)
    pub fn to_json5(&self) -> String {
        // json5 crate doesn't have pretty printing, so we use serde_json for output
        // and rely on json5 for input (which handles comments and trailing commas)
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5();
        std::fs::write(path, content)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width.abs() > TAG_WIDTH_MAX {
            return Err(ConfigError::InvalidWidth { width: self.width });
        }

        if let Some(ident) = &self.ident {
            if ident.is_empty() || ident.contains(['/', '\\']) {
                return Err(ConfigError::InvalidIdent {
                    ident: ident.clone(),
                });
            }
        }

        Ok(())
    }

    /// Tag layout built from the tag fields and the signed width
    pub fn tag_layout(&self) -> TagLayout {
        let policy = match self.width {
            w if w > 0 => WidthPolicy::FixedLeft(w as usize),
            w if w < 0 => WidthPolicy::FixedRight(w.unsigned_abs() as usize),
            _ => WidthPolicy::Variable,
        };
        TagLayout {
            root: self.root_tag.clone(),
            module: self.module_tag.clone(),
            policy,
            delimiters: self.delimiters.clone(),
        }
    }

    /// The configured identity, or the executable name when unset
    pub fn resolved_ident(&self) -> String {
        self.ident
            .clone()
            .unwrap_or_else(default_process_ident)
    }
}

/// Identity derived from the running executable's file stem
pub fn default_process_ident() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "app".to_string())
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError(std::path::PathBuf, String),
    ParseError(String),
    InvalidWidth { width: i64 },
    InvalidIdent { ident: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, msg) => {
                write!(
                    f,
                    "failed to read config file '{}': {}",
                    path.display(),
                    msg
                )
            }
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::InvalidWidth { width } => {
                write!(
                    f,
                    "tag width {} out of range (magnitude at most {})",
                    width, TAG_WIDTH_MAX
                )
            }
            ConfigError::InvalidIdent { ident } => {
                write!(f, "invalid log identity '{}'", ident)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = LogConfig::parse("{}").unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.width, -24);
        assert_eq!(config.default_level, Level::None);
    }

    #[test]
    fn test_parse_config_with_comments() {
        let json5 = r#"{
            // Identity shown by the platform log
            ident: "transferd",
            root_tag: "XFER",
            module_tag: "net",
            width: 0, // natural size
            default_level: "Info",
        }"#;

        let config = LogConfig::parse(json5).unwrap();
        assert_eq!(config.ident.as_deref(), Some("transferd"));
        assert_eq!(config.root_tag, "XFER");
        assert_eq!(config.default_level, Level::Info);
        assert_eq!(config.tag_layout().policy, WidthPolicy::Variable);
    }

    #[test]
    fn test_width_sign_selects_policy() {
        let mut config = LogConfig::default();

        config.width = 10;
        assert_eq!(config.tag_layout().policy, WidthPolicy::FixedLeft(10));

        config.width = -10;
        assert_eq!(config.tag_layout().policy, WidthPolicy::FixedRight(10));

        config.width = 0;
        assert_eq!(config.tag_layout().policy, WidthPolicy::Variable);
    }

    #[test]
    fn test_validate_width_out_of_range() {
        let config = LogConfig {
            width: 129,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWidth { width: 129 })
        ));

        let config = LogConfig {
            width: -129,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWidth { width: -129 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ident() {
        let config = LogConfig {
            ident: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdent { .. })
        ));

        let config = LogConfig {
            ident: Some("a/b".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn test_resolved_ident_prefers_configured_value() {
        let config = LogConfig {
            ident: Some("named".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_ident(), "named");

        // Unset falls back to the executable name, which is never empty.
        let config = LogConfig::default();
        assert!(!config.resolved_ident().is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = LogConfig {
            root_tag: "XFER".to_string(),
            module_tag: "net".to_string(),
            width: -16,
            default_level: Level::Debug,
            ident: Some("transferd".to_string()),
            output_dir: Some(PathBuf::from("/var/log/transferd")),
            ..Default::default()
        };

        let json5 = config.to_json5();
        let parsed = LogConfig::parse(&json5).unwrap();
        assert_eq!(config, parsed);
    }
}
