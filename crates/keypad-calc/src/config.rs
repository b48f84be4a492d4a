//! Calculator configuration
//!
//! Loaded from YAML. Every field has a default, so an empty file is valid:
//!
//! ```yaml
//! error_text: "Error"
//! log_filter: "warn"
//! tui:
//!   show_help: true
//!   title: "Calculator"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Calculator;
use crate::error::{CliError, CliResult};

/// Terminal front end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show the key help sidebar
    pub show_help: bool,
    /// Title of the display panel
    pub title: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_help: true,
            title: "Calculator".to_string(),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Text shown in place of a number after an arithmetic error
    pub error_text: String,
    /// `tracing` filter used when no `-v` flag is given
    pub log_filter: String,
    /// Terminal front end settings
    pub tui: TuiConfig,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            error_text: Calculator::DEFAULT_ERROR_TEXT.to_string(),
            log_filter: "warn".to_string(),
            tui: TuiConfig::default(),
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error display text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the default log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Show or hide the TUI help sidebar
    #[must_use]
    pub const fn with_show_help(mut self, show: bool) -> Self {
        self.tui.show_help = show;
        self
    }

    /// Set the TUI display title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.tui.title = title.into();
        self
    }

    /// Parses and validates a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails validation.
    pub fn from_yaml_str(yaml: &str) -> CliResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] for an empty error text.
    pub fn validate(&self) -> CliResult<()> {
        if self.error_text.trim().is_empty() {
            return Err(CliError::config("error_text must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CalcConfig::new();
        assert_eq!(config.error_text, "Error");
        assert_eq!(config.log_filter, "warn");
        assert!(config.tui.show_help);
        assert_eq!(config.tui.title, "Calculator");
    }

    #[test]
    fn test_builder_chain() {
        let config = CalcConfig::new()
            .with_error_text("E")
            .with_log_filter("debug")
            .with_show_help(false)
            .with_title("Calc");
        assert_eq!(config.error_text, "E");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.tui.show_help);
        assert_eq!(config.tui.title, "Calc");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = CalcConfig::from_yaml_str("error_text: Oops\ntui:\n  show_help: false\n")
            .unwrap();
        assert_eq!(config.error_text, "Oops");
        assert!(!config.tui.show_help);
        assert_eq!(config.tui.title, "Calculator");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        assert_eq!(CalcConfig::from_yaml_str("").unwrap(), CalcConfig::default());
        assert_eq!(
            CalcConfig::from_yaml_str("  \n").unwrap(),
            CalcConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_malformed() {
        let err = CalcConfig::from_yaml_str("error_text: [unclosed").unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml_rejects_empty_error_text() {
        let err = CalcConfig::from_yaml_str("error_text: \"\"").unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CalcConfig::new().with_title("Pocket");
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert_eq!(CalcConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error_text: NaN!").unwrap();
        writeln!(file, "log_filter: info").unwrap();
        let config = CalcConfig::load(file.path()).unwrap();
        assert_eq!(config.error_text, "NaN!");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalcConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }
}
