//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{Command, InputLine};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use reasoner_application::{
    GatewayError, GenerationParams, LlmGateway, ProgressNotifier, SendMessageError,
    SendMessageInput, SendMessageUseCase,
};
use reasoner_domain::{ChatSession, ReasoningApproach};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL
///
/// Owns nothing of the conversation itself: the session is handed to
/// [`ChatRepl::run`] and handed back when the user quits.
pub struct ChatRepl {
    gateway: Arc<dyn LlmGateway>,
    use_case: SendMessageUseCase,
    params: GenerationParams,
    config: ReplConfig,
    endpoint: String,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<dyn LlmGateway>, use_case: SendMessageUseCase) -> Self {
        Self {
            gateway,
            use_case,
            params: GenerationParams::default(),
            config: ReplConfig::default(),
            endpoint: String::new(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Server address shown by `/status`
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run the interactive REPL until the user quits
    pub async fn run(&self, session: ChatSession) -> std::io::Result<ChatSession> {
        let mut line_editor = self.line_editor();
        let mut session = session;

        self.print_welcome(&session);

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(session.approach().label().to_string()),
                DefaultPromptSegment::Empty,
            );

            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => match InputLine::classify(&line) {
                    InputLine::Blank => continue,
                    InputLine::Command(command) => {
                        if self.handle_command(command, &mut session).await {
                            break;
                        }
                    }
                    InputLine::Message(text) => {
                        session = self.send(session, text).await;
                    }
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(session)
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create history directory {}: {}", parent.display(), e);
            return editor;
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                debug!("Using input history at {}", path.display());
                editor.with_history(Box::new(history))
            }
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self, session: &ChatSession) {
        println!();
        println!("{}", ConsoleFormatter::banner());
        println!("{}", ConsoleFormatter::format_session_info(session));
        println!("{}", "Type /help for commands.".dimmed());
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_transcript(session.transcript())
        );
        println!();
    }

    /// Send one user message and render the outcome.
    ///
    /// Always returns the session, including after a failed model call.
    pub async fn send(&self, session: ChatSession, text: &str) -> ChatSession {
        println!();

        let input = SendMessageInput::new(text).with_params(self.params);
        let progress: Box<dyn ProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        let session = match self
            .use_case
            .execute(session, input, progress.as_ref())
            .await
        {
            Ok(output) => {
                println!("{}", ConsoleFormatter::format_panels(&output.split()));
                output.session
            }
            Err(failure) => {
                eprintln!(
                    "{}",
                    ConsoleFormatter::format_error(&failure.error.to_string())
                );
                if matches!(
                    failure.error,
                    SendMessageError::GatewayError(GatewayError::ConnectionError(_))
                ) {
                    eprintln!("Is Ollama running at {}?", self.endpoint_label());
                }
                failure.into_session()
            }
        };
        println!();
        session
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: Command, session: &mut ChatSession) -> bool {
        match command {
            Command::Quit => {
                println!("Bye!");
                return true;
            }
            Command::Help => {
                println!();
                println!("{}", Command::help_text());
            }
            Command::Approach(None) => {
                println!();
                println!("Current approach: {}", session.approach().label().bold());
            }
            Command::Approach(Some(name)) => match name.parse::<ReasoningApproach>() {
                Ok(approach) => {
                    session.set_approach(approach);
                    println!("Reasoning approach set to {}", approach.label().bold());
                }
                Err(e) => {
                    println!("{}", ConsoleFormatter::format_error(&e.to_string()));
                    Self::print_approaches(session.approach());
                }
            },
            Command::Approaches => Self::print_approaches(session.approach()),
            Command::Model => {
                println!();
                println!("Model: {} (fixed for this session)", session.model());
            }
            Command::History => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(session.transcript())
                );
            }
            Command::Status => self.print_status(session).await,
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        println!();
        false
    }

    fn print_approaches(current: ReasoningApproach) {
        println!();
        println!("Reasoning approaches:");
        for approach in ReasoningApproach::all() {
            let marker = if approach == current { "*" } else { " " };
            println!("  {} {}", marker, approach.label());
        }
    }

    async fn print_status(&self, session: &ChatSession) {
        println!();
        match self.gateway.available_models().await {
            Ok(models) => {
                println!("{} {}", "Ollama reachable at".green(), self.endpoint_label());
                let wanted = session.model().as_str();
                if models.iter().any(|m| m == wanted) {
                    println!("Model {} is installed", wanted);
                } else {
                    println!(
                        "{} model {} is not installed (try: ollama pull {})",
                        "Warning:".yellow().bold(),
                        wanted,
                        wanted
                    );
                }
            }
            Err(e) => {
                println!("{}", ConsoleFormatter::format_error(&e.to_string()));
            }
        }
    }

    fn endpoint_label(&self) -> &str {
        if self.endpoint.is_empty() {
            "the configured address"
        } else {
            &self.endpoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reasoner_application::CompletionRequest;
    use reasoner_domain::{Model, Role};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        models: Vec<String>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                models: vec!["deepseek-r1:7b".to_string()],
            }
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, GatewayError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("no reply scripted".to_string())))
        }

        async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
            Ok(self.models.clone())
        }
    }

    fn repl(replies: Vec<Result<String, GatewayError>>) -> ChatRepl {
        let gateway: Arc<dyn LlmGateway> = Arc::new(ScriptedGateway::new(replies));
        let use_case = SendMessageUseCase::new(gateway.clone());
        ChatRepl::new(gateway, use_case).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    #[tokio::test]
    async fn test_send_appends_both_turns() {
        let repl = repl(vec![Ok(
            "<think>Weigh it.</think><response>Take it.</response>".to_string()
        )]);
        let session = ChatSession::new(Model::default(), ReasoningApproach::Analytical);

        let session = repl.send(session, "Should I take this job?").await;

        let turns = session.transcript().all();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].role, Role::User);
        assert!(turns[2].is_model_output());
    }

    #[tokio::test]
    async fn test_send_stores_text_as_typed() {
        let repl = repl(vec![Ok("<response>ok</response>".to_string())]);
        let session = ChatSession::new(Model::default(), ReasoningApproach::Analytical);

        let InputLine::Message(text) = InputLine::classify("  indented\tquestion  ") else {
            panic!("Expected a message");
        };
        let session = repl.send(session, text).await;

        assert_eq!(session.transcript().all()[1].text, "  indented\tquestion  ");
    }

    #[tokio::test]
    async fn test_send_failure_keeps_session() {
        let repl = repl(vec![Err(GatewayError::ConnectionError(
            "connection refused".to_string(),
        ))]);
        let session = ChatSession::new(Model::default(), ReasoningApproach::Critical);

        let session = repl.send(session, "Hello?").await;

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.approach(), ReasoningApproach::Critical);
        assert_eq!(session.transcript().last().unwrap().role, Role::User);
    }

    #[tokio::test]
    async fn test_approach_command_changes_session() {
        let repl = repl(vec![]);
        let mut session = ChatSession::new(Model::default(), ReasoningApproach::Analytical);

        let exit = repl
            .handle_command(
                Command::Approach(Some("systems thinking".to_string())),
                &mut session,
            )
            .await;
        assert!(!exit);
        assert_eq!(session.approach(), ReasoningApproach::SystemsThinking);

        // Unknown names leave the approach untouched
        repl.handle_command(Command::Approach(Some("lateral".to_string())), &mut session)
            .await;
        assert_eq!(session.approach(), ReasoningApproach::SystemsThinking);
    }

    #[tokio::test]
    async fn test_quit_and_read_only_commands() {
        let repl = repl(vec![]);
        let mut session = ChatSession::new(Model::default(), ReasoningApproach::Strategic);

        for command in [
            Command::Help,
            Command::Approaches,
            Command::Model,
            Command::History,
            Command::Status,
            Command::Unknown("/nope".to_string()),
        ] {
            assert!(!repl.handle_command(command, &mut session).await);
        }
        assert_eq!(session.transcript().len(), 1);

        assert!(repl.handle_command(Command::Quit, &mut session).await);
    }
}
