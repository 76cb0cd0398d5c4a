use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Cleaning rules applied by the pipeline.
///
/// Every field has a default, so a JSON rules file only needs the keys it
/// overrides:
///
/// ```json
/// { "range_min": 6.5, "range_max": 8.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Columns that must be present in the input header.
    pub required_columns: Vec<String>,
    /// Columns coerced to numbers; unreadable cells become missing.
    pub numeric_columns: Vec<String>,
    /// Columns whose missing cells disqualify a row.
    pub critical_columns: Vec<String>,
    /// Column checked against `[range_min, range_max]`, both ends inclusive.
    pub range_column: String,
    pub range_min: f64,
    pub range_max: f64,
    /// Field delimiter for both input and output files.
    pub delimiter: char,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            required_columns: strings(&["temperature_c", "salinity_psu", "species", "station_id", "ph"]),
            numeric_columns: strings(&["temperature_c", "salinity_psu"]),
            critical_columns: strings(&["temperature_c", "salinity_psu", "ph"]),
            range_column: "ph".to_string(),
            range_min: 5.0,
            range_max: 9.0,
            delimiter: ',',
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("range_min ({min}) is greater than range_max ({max})")]
    InvertedRange { min: f64, max: f64 },

    #[error("delimiter {0:?} is not a single ASCII character")]
    Delimiter(char),
}

impl PipelineConfig {
    /// Load overrides from a JSON file and validate the result.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range_min > self.range_max {
            return Err(ConfigError::InvertedRange {
                min: self.range_min,
                max: self.range_max,
            });
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// The delimiter as the byte the CSV reader and writer expect.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::Delimiter(self.delimiter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_marine_schema() {
        let config = PipelineConfig::default();
        assert!(config.required_columns.iter().any(|c| c == "ph"));
        assert_eq!(config.range_column, "ph");
        assert_eq!((config.range_min, config.range_max), (5.0, 9.0));
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PipelineConfig::from_json_str(r#"{ "range_min": 6.5, "delimiter": ";" }"#)
            .expect("valid config");
        assert_eq!(config.range_min, 6.5);
        assert_eq!(config.range_max, 9.0);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.numeric_columns, PipelineConfig::default().numeric_columns);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = PipelineConfig::from_json_str(r#"{ "range_min": 9.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRange { .. }));
    }

    #[test]
    fn rejects_unknown_keys_and_wide_delimiters() {
        assert!(matches!(
            PipelineConfig::from_json_str(r#"{ "ph_min": 5 }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json_str(r#"{ "delimiter": "¦" }"#),
            Err(ConfigError::Delimiter('¦'))
        ));
    }
}
