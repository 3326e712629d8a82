//! CLI entrypoint for reasoner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use reasoner_application::{
    ConversationLogger, GenerationParams, LlmGateway, NoConversationLogger, SendMessageUseCase,
};
use reasoner_domain::ChatSession;
use reasoner_infrastructure::{ConfigLoader, JsonlConversationLogger, OllamaGateway};
use reasoner_presentation::{ChatRepl, Cli, OutputConfig, ReplConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting reasoner");

    for issue in config.validate() {
        warn!("Config issue: {}", issue);
    }

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    let (config_model, _) = config.session.parse_model();
    let (config_approach, _) = config.session.parse_approach();
    let model = cli.model.unwrap_or(config_model);
    let approach = cli.approach.unwrap_or(config_approach);

    let params = GenerationParams::default()
        .with_temperature(cli.temperature.unwrap_or(config.ollama.temperature));

    // === Dependency Injection ===
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.ollama.base_url.clone());
    let gateway = OllamaGateway::with_timeout(base_url, config.ollama.timeout())
        .context("Failed to create Ollama client")?;
    let endpoint = gateway.base_url().to_string();
    let gateway: Arc<dyn LlmGateway> = Arc::new(gateway);

    let conversation_log = cli
        .log_conversation
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    let use_case = SendMessageUseCase::new(gateway.clone())
        .with_conversation_logger(conversation_logger(conversation_log.as_deref()));

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        ..ReplConfig::default()
    }
    .with_history_file(config.repl.history_file.as_deref());

    let repl = ChatRepl::new(gateway, use_case)
        .with_params(params)
        .with_config(repl_config)
        .with_endpoint(endpoint);

    let session = repl.run(ChatSession::new(model, approach)).await?;
    info!("Session ended with {} turns", session.transcript().len());

    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn conversation_logger(path: Option<&Path>) -> Arc<dyn ConversationLogger> {
    let Some(path) = path else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!("Logging conversation to {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!(
                "Could not open conversation log {}: {}",
                path.display(),
                e
            );
            Arc::new(NoConversationLogger)
        }
    }
}
