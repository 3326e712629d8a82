//! Prompt assembly: transcript → role-tagged message sequence.

use crate::prompt::template::PromptTemplate;
use crate::reasoning::ReasoningApproach;
use crate::session::entities::{Role, Transcript};
use serde::{Deserialize, Serialize};

/// Role of a message in the chat-style model request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl PromptRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::System => "system",
            PromptRole::User => "user",
            PromptRole::Assistant => "assistant",
        }
    }
}

/// One message of the request sent to the model. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Assistant,
            content: content.into(),
        }
    }
}

/// Build the full message sequence for the next model call.
///
/// One system message bound to `approach`, then one message per turn in
/// transcript order. Prior model output is replayed verbatim. The greeting
/// turn is skipped.
pub fn build_prompt(transcript: &Transcript, approach: ReasoningApproach) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(transcript.len());
    messages.push(PromptMessage::system(PromptTemplate::system(approach)));

    for turn in transcript.iter() {
        match turn.role {
            Role::User => messages.push(PromptMessage::user(turn.text.clone())),
            Role::Assistant if !turn.is_greeting => {
                messages.push(PromptMessage::assistant(turn.text.clone()))
            }
            Role::Assistant => {}
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Turn;

    #[test]
    fn test_fresh_transcript_yields_only_system_message() {
        let messages = build_prompt(&Transcript::new(), ReasoningApproach::Analytical);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, PromptRole::System);
        assert!(messages[0].content.contains("Analytical thinking"));
    }

    #[test]
    fn test_greeting_is_never_replayed() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("Should I take this job?"));

        let messages = build_prompt(&transcript, ReasoningApproach::Strategic);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], PromptMessage::user("Should I take this job?"));
        assert!(
            messages
                .iter()
                .all(|m| !m.content.contains("I'm your reasoning assistant"))
        );
    }

    #[test]
    fn test_history_replayed_in_order_with_markers() {
        let raw = "<think>Consider pay.</think><response>Take it.</response>";
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("Should I take this job?"));
        transcript.append(Turn::assistant(raw));
        transcript.append(Turn::user("What about relocation?"));

        let messages = build_prompt(&transcript, ReasoningApproach::Critical);
        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::System,
                PromptRole::User,
                PromptRole::Assistant,
                PromptRole::User
            ]
        );
        assert_eq!(messages[2].content, raw);
        assert_eq!(messages[3].content, "What about relocation?");
    }

    #[test]
    fn test_system_message_follows_current_approach() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("hi"));
        let messages = build_prompt(&transcript, ReasoningApproach::SystemsThinking);
        assert!(messages[0].content.contains("Systems Thinking thinking"));
    }

    #[test]
    fn test_prompt_role_serializes_lowercase() {
        let json = serde_json::to_value(PromptMessage::assistant("x")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(PromptRole::System.as_str(), "system");
    }
}
