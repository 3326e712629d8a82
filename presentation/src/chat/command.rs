//! Slash commands understood by the chat REPL

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Show the current approach, or switch to the named one
    Approach(Option<String>),
    Approaches,
    Model,
    History,
    Status,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a line starting with `/`. Returns `None` for ordinary messages.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        let command = match name {
            "help" | "h" | "?" => Command::Help,
            "approach" => Command::Approach(arg.map(str::to_string)),
            "approaches" => Command::Approaches,
            "model" => Command::Model,
            "history" => Command::History,
            "status" => Command::Status,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?       - Show this help
  /approach [NAME]    - Show or change the reasoning approach
  /approaches         - List reasoning approaches
  /model              - Show the model for this session
  /history            - Show the conversation so far
  /status             - Check the Ollama server
  /quit, /exit, /q    - Exit chat"
    }
}

/// One line read from the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine<'a> {
    Blank,
    Command(Command),
    /// Message text exactly as typed
    Message(&'a str),
}

impl<'a> InputLine<'a> {
    /// Whitespace only decides blank lines and commands; messages are kept raw.
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return InputLine::Blank;
        }
        match Command::parse(line) {
            Some(command) => InputLine::Command(command),
            None => InputLine::Message(line),
        }
    }
}
