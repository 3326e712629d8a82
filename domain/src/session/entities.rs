//! Session domain entities

use crate::core::model::Model;
use crate::reasoning::ReasoningApproach;
use serde::{Deserialize, Serialize};

/// Fixed text of the synthetic assistant turn every session starts with.
pub const GREETING: &str = "Hello! I'm your reasoning assistant. Share your thoughts or questions, and I'll help you analyze them systematically. 🤔";

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation (Entity)
///
/// Assistant text is stored raw, markers and all. Splitting happens at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// Set only on the synthetic first assistant turn.
    pub is_greeting: bool,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_greeting: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            is_greeting: false,
        }
    }

    pub fn greeting() -> Self {
        Self {
            role: Role::Assistant,
            text: GREETING.to_string(),
            is_greeting: true,
        }
    }

    /// An assistant turn whose text is expected to carry the marker pairs
    pub fn is_model_output(&self) -> bool {
        self.role == Role::Assistant && !self.is_greeting
    }
}

/// Ordered, append-only conversation history (Entity)
///
/// Insertion order is conversation order. Turns are never reordered or
/// removed. Alternation between user and assistant is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create a transcript holding only the greeting turn
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::greeting()],
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false: a transcript starts with its greeting
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one interactive session (Entity)
///
/// Owned by the hosting application and passed by value into each
/// request cycle, which hands it back when done.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Transcript,
    model: Model,
    approach: ReasoningApproach,
}

impl ChatSession {
    pub fn new(model: Model, approach: ReasoningApproach) -> Self {
        Self {
            transcript: Transcript::new(),
            model,
            approach,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn approach(&self) -> ReasoningApproach {
        self.approach
    }

    /// Change the approach used for the next request. Earlier turns are untouched.
    pub fn set_approach(&mut self, approach: ReasoningApproach) {
        self.approach = approach;
    }
}
