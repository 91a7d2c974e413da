// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::infrastructure::InputFormat;
use crate::presentation::OutputFormat;

#[derive(Clone, Debug)]
pub struct AppConfig {
    input_path: Option<PathBuf>,
    input_format: InputFormat,
    output_format: OutputFormat,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "warn".into()
}

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup("TITLE_SLUG_INPUT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let input_format = match lookup("TITLE_SLUG_INPUT_FORMAT") {
            Some(v) => parse_input_format(&v)?,
            None => InputFormat::default(),
        };

        let output_format = match lookup("TITLE_SLUG_OUTPUT_FORMAT") {
            Some(v) => parse_output_format(&v)?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(default_log_filter);

        Ok(Self {
            input_path,
            input_format,
            output_format,
            log_filter,
        })
    }

    /// Path to read titles from; `None` means stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input_path.as_ref()
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_input_format(value: &str) -> Result<InputFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "lines" => Ok(InputFormat::Lines),
        "metadata" | "json" => Ok(InputFormat::Metadata),
        other => Err(ConfigError::Invalid(format!(
            "TITLE_SLUG_INPUT_FORMAT must be `lines` or `metadata`, got `{other}`"
        ))),
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "plain" => Ok(OutputFormat::Plain),
        "jsonl" | "json-lines" => Ok(OutputFormat::JsonLines),
        other => Err(ConfigError::Invalid(format!(
            "TITLE_SLUG_OUTPUT_FORMAT must be `plain` or `jsonl`, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_read_lines_from_stdin() {
        let config = config_from(&[]).unwrap();
        assert!(config.input_path().is_none());
        assert_eq!(config.input_format(), InputFormat::Lines);
        assert_eq!(config.output_format(), OutputFormat::Plain);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("TITLE_SLUG_INPUT", "src/data/videos_metadata.json"),
            ("TITLE_SLUG_INPUT_FORMAT", "Metadata"),
            ("TITLE_SLUG_OUTPUT_FORMAT", "jsonl"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(
            config.input_path(),
            Some(&PathBuf::from("src/data/videos_metadata.json"))
        );
        assert_eq!(config.input_format(), InputFormat::Metadata);
        assert_eq!(config.output_format(), OutputFormat::JsonLines);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn blank_input_path_means_stdin() {
        let config = config_from(&[("TITLE_SLUG_INPUT", "  ")]).unwrap();
        assert!(config.input_path().is_none());
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(matches!(
            config_from(&[("TITLE_SLUG_INPUT_FORMAT", "xml")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("TITLE_SLUG_OUTPUT_FORMAT", "csv")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}
