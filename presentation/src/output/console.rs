//! Console rendering of the conversation

use colored::Colorize;
use reasoner_domain::{ChatSession, Role, SplitResponse, Transcript, Turn};

pub const TITLE: &str = "DeepSeek-R1: Reasoning Assistant";
pub const CAPTION: &str = "Your AI Partner for Critical Thinking and Analysis";

const WIDTH: usize = 60;

/// Formats the transcript and status lines for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title block shown once at startup
    pub fn banner() -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{:^width$}\n{}",
            line.cyan(),
            TITLE.bold(),
            CAPTION.dimmed(),
            line.cyan(),
            width = WIDTH
        )
    }

    /// Render one turn.
    ///
    /// User turns and the greeting are shown verbatim. Model output is
    /// split into a Thinking panel and a Response panel.
    pub fn format_turn(turn: &Turn) -> String {
        match turn.role {
            Role::User => format!("{} {}", "You:".green().bold(), turn.text),
            Role::Assistant if turn.is_greeting => {
                format!("{} {}", "Assistant:".cyan().bold(), turn.text)
            }
            Role::Assistant => Self::format_panels(&SplitResponse::parse(&turn.text)),
        }
    }

    /// Render both segments of a model response
    pub fn format_panels(split: &SplitResponse) -> String {
        let mut output = String::new();
        output.push_str(&Self::panel("Thinking", &split.reasoning));
        output.push('\n');
        output.push_str(&Self::panel("Response", &split.answer));
        output
    }

    /// Render every turn in order
    pub fn format_transcript(transcript: &Transcript) -> String {
        transcript
            .iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// One-line summary of the session settings
    pub fn format_session_info(session: &ChatSession) -> String {
        format!(
            "{} {}   {} {}",
            "Model:".dimmed(),
            session.model(),
            "Approach:".dimmed(),
            session.approach()
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn panel(title: &str, body: &str) -> String {
        let header = format!("── {} ", title);
        let rule = "─".repeat(WIDTH.saturating_sub(header.chars().count()));
        let body = if body.is_empty() {
            format!("{}", "(empty)".dimmed())
        } else {
            Self::indent(body, "│ ")
        };

        let header = match title {
            "Thinking" => format!("{}{}", header.yellow().bold(), rule.yellow()),
            _ => format!("{}{}", header.cyan().bold(), rule.cyan()),
        };

        format!("{}\n{}\n", header, body)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
