//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the spinner while the model is working
    pub show_progress: bool,
    /// Path to history file; `None` uses the platform data dir
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Build from a configured history path, expanding a leading `~/`
    pub fn with_history_file(mut self, path: Option<&str>) -> Self {
        self.history_file = path.map(expand_home);
        self
    }

    /// Resolve where input history lives, if anywhere
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("reasoner").join("history.txt")))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig::default().with_history_file(Some("/tmp/reasoner-history"));
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/reasoner-history"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = ReplConfig::default().with_history_file(Some("~/hist.txt"));
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("hist.txt"));
        }
    }

    #[test]
    fn test_default_history_under_data_dir() {
        let config = ReplConfig::default();
        if let Some(path) = config.history_path() {
            assert!(path.ends_with("reasoner/history.txt"));
        }
    }
}
