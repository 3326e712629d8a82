//! CLI command definitions

use clap::Parser;
use reasoner_domain::{Model, ReasoningApproach};
use std::path::PathBuf;

/// CLI arguments for reasoner
#[derive(Parser, Debug)]
#[command(name = "reasoner")]
#[command(author, version, about = "Reasoning assistant for locally hosted DeepSeek-R1 models")]
#[command(long_about = r#"
Reasoner is an interactive chat with a DeepSeek-R1 model served by Ollama.

Every answer is shown in two panels:
  Thinking  - the model's chain of thought
  Response  - the final answer (150 words at most)

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./reasoner.toml     Project-level config
3. ~/.config/reasoner/config.toml   Global config

Example:
  reasoner
  reasoner --model deepseek-r1:1.5b --approach critical
  reasoner --base-url http://gpu-box:11434 --log-conversation chat.jsonl
"#)]
pub struct Cli {
    /// Model to chat with (deepseek-r1:7b or deepseek-r1:1.5b)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<Model>,

    /// Initial reasoning approach (analytical, critical, strategic, systems)
    #[arg(short, long, value_name = "APPROACH")]
    pub approach: Option<ReasoningApproach>,

    /// Ollama server address
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Sampling temperature
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append the conversation as JSONL to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["reasoner"]).unwrap();
        assert!(cli.model.is_none());
        assert!(cli.approach.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_model_and_approach_parse() {
        let cli = Cli::try_parse_from([
            "reasoner",
            "--model",
            "deepseek-r1:1.5b",
            "--approach",
            "systems-thinking",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.model, Some(Model::DeepseekR1_1_5b));
        assert_eq!(cli.approach, Some(ReasoningApproach::SystemsThinking));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!(Cli::try_parse_from(["reasoner", "--model", "llama3"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "reasoner",
            "--base-url",
            "http://gpu-box:11434",
            "-t",
            "0.2",
            "--log-conversation",
            "chat.jsonl",
            "-q",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(cli.temperature, Some(0.2));
        assert_eq!(cli.log_conversation, Some(PathBuf::from("chat.jsonl")));
        assert!(cli.quiet);
        assert!(cli.no_color);
    }
}
