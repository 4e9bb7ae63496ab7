//! Configuration
//!
//! Every section has defaults matching the reference tweet dataset, so a
//! config file only needs to name what it changes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label value marking a positive tweet
pub const DEFAULT_POSITIVE_LABEL: i32 = 4;
/// Label predicted for everything that is not positive
pub const DEFAULT_NEGATIVE_LABEL: i32 = 0;
/// Bias counters the skew of the training distribution towards negatives
pub const DEFAULT_DECISION_THRESHOLD: f64 = -0.03;
/// Records between two training progress notifications
pub const DEFAULT_PROGRESS_INTERVAL: usize = 30_000;
/// Shortest token kept after filtering
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierSettings,
    pub tokenizer: TokenizerSettings,
    pub training: TrainingSettings,
    pub data: DataSettings,
    pub logging: LoggingSettings,
}

/// Decision rule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Sentinel label meaning "positive"
    pub positive_label: i32,
    /// Label predicted when the score does not clear the threshold
    pub negative_label: i32,
    /// Average score must be strictly greater than this to predict positive
    pub decision_threshold: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            positive_label: DEFAULT_POSITIVE_LABEL,
            negative_label: DEFAULT_NEGATIVE_LABEL,
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerSettings {
    pub min_token_len: usize,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
    /// Report progress every N records (0 disables notifications)
    pub progress_interval: usize,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Layout of the data and target files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Skip the first line of each file
    pub has_headers: bool,
    /// Column of the record identifier in the data file
    pub id_column: usize,
    /// Column of the author in the data file
    pub author_column: usize,
    /// First column of the text; every later column is part of the text too
    pub text_column: usize,
    /// Column of the label in the target file
    pub label_column: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: true,
            id_column: 1,
            author_column: 2,
            text_column: 3,
            label_column: 1,
        }
    }
}

impl DataSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::config(format!(
                "delimiter '{}' is not an ASCII character",
                self.delimiter
            )));
        }
        if self.text_column <= self.id_column || self.text_column <= self.author_column {
            return Err(Error::config(
                "text_column must come after id_column and author_column",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.classifier.positive_label == self.classifier.negative_label {
            return Err(Error::config(
                "positive_label and negative_label must differ",
            ));
        }
        if self.tokenizer.min_token_len == 0 {
            return Err(Error::config("min_token_len must be at least 1"));
        }
        self.data.validate()
    }
}

/// Load configuration from a `.toml`, `.json` or `.yaml` file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let config: AppConfig = match ext {
        "toml" => toml::from_str(&content).map_err(|e| Error::config(e.to_string()))?,
        "json" => serde_json::from_str(&content).map_err(|e| Error::config(e.to_string()))?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| Error::config(e.to_string()))?
        }
        _ => {
            return Err(Error::config(format!(
                "unsupported config format '{ext}'"
            )))
        }
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.classifier.positive_label, 4);
        assert_eq!(config.classifier.negative_label, 0);
        assert_eq!(config.classifier.decision_threshold, -0.03);
        assert_eq!(config.training.progress_interval, 30_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[classifier]\ndecision_threshold = 0.1").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.classifier.decision_threshold, 0.1);
        assert_eq!(config.classifier.positive_label, 4);
        assert_eq!(config.data.text_column, 3);
    }

    #[test]
    fn test_yaml_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "data:\n  delimiter: \"\\t\"\n  has_headers: false").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data.delimiter, '\t');
        assert!(!config.data.has_headers);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(load_config(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_same_labels_rejected() {
        let mut config = AppConfig::default();
        config.classifier.negative_label = 4;
        assert!(config.validate().is_err());
    }
}
