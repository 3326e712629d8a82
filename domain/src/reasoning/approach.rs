use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Thinking style the model is asked to adopt.
///
/// The label returned by [`label()`](Self::label) is substituted verbatim
/// into the system instruction ("specializing in {label} thinking").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReasoningApproach {
    #[default]
    Analytical,
    Critical,
    Strategic,
    SystemsThinking,
}

impl ReasoningApproach {
    /// All approaches, in menu order
    pub fn all() -> [ReasoningApproach; 4] {
        [
            ReasoningApproach::Analytical,
            ReasoningApproach::Critical,
            ReasoningApproach::Strategic,
            ReasoningApproach::SystemsThinking,
        ]
    }

    /// Human-readable label, as shown in menus and in the system prompt
    pub fn label(&self) -> &'static str {
        match self {
            ReasoningApproach::Analytical => "Analytical",
            ReasoningApproach::Critical => "Critical",
            ReasoningApproach::Strategic => "Strategic",
            ReasoningApproach::SystemsThinking => "Systems Thinking",
        }
    }
}

impl fmt::Display for ReasoningApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReasoningApproach {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analytical" => Ok(ReasoningApproach::Analytical),
            "critical" => Ok(ReasoningApproach::Critical),
            "strategic" => Ok(ReasoningApproach::Strategic),
            "systems thinking" | "systems-thinking" | "systems_thinking" | "systems" => {
                Ok(ReasoningApproach::SystemsThinking)
            }
            _ => Err(DomainError::UnknownApproach(s.to_string())),
        }
    }
}

impl Serialize for ReasoningApproach {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReasoningApproach {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
