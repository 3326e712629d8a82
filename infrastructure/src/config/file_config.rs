//! Raw TOML configuration data types
//!
//! These structs mirror the TOML file. Model and approach names stay
//! strings here so a typo becomes a reported issue instead of a parse
//! failure of the whole file.

use crate::ollama::gateway::DEFAULT_BASE_URL;
use reasoner_application::config::generation_params::DEFAULT_TEMPERATURE;
use reasoner_domain::{Model, ReasoningApproach};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending key (e.g. "session.model")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// `[ollama]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Server address
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout; unset means wait indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: None,
        }
    }
}

impl FileOllamaConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// `[session]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Model identifier (deepseek-r1:7b or deepseek-r1:1.5b)
    pub model: String,
    /// Initial reasoning approach label
    pub approach: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            approach: ReasoningApproach::default().to_string(),
        }
    }
}

impl FileSessionConfig {
    /// Parse the model name, falling back to the default with an issue
    pub fn parse_model(&self) -> (Model, Option<ConfigIssue>) {
        match self.model.parse() {
            Ok(model) => (model, None),
            Err(e) => (
                Model::default(),
                Some(ConfigIssue {
                    field: "session.model".to_string(),
                    message: e.to_string(),
                }),
            ),
        }
    }

    /// Parse the approach label, falling back to the default with an issue
    pub fn parse_approach(&self) -> (ReasoningApproach, Option<ConfigIssue>) {
        match self.approach.parse() {
            Ok(approach) => (approach, None),
            Err(e) => (
                ReasoningApproach::default(),
                Some(ConfigIssue {
                    field: "session.approach".to_string(),
                    message: e.to_string(),
                }),
            ),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// `[repl]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while waiting for the model
    pub show_progress: bool,
    /// Path to the input history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostic logs to this file
    pub file: Option<String>,
    /// Write the conversation as JSONL to this file
    pub conversation_log: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ollama: FileOllamaConfig,
    pub session: FileSessionConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.session.parse_model().1);
        issues.extend(self.session.parse_approach().1);

        if !(0.0..=2.0).contains(&self.ollama.temperature) {
            issues.push(ConfigIssue {
                field: "ollama.temperature".to_string(),
                message: format!(
                    "{} is outside the usual 0.0-2.0 range",
                    self.ollama.temperature
                ),
            });
        }

        if self.ollama.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                field: "ollama.timeout_seconds".to_string(),
                message: "timeout cannot be 0; remove the key to wait indefinitely".to_string(),
            });
        }

        issues
    }
}
