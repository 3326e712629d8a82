//! Model value object representing a locally hosted LLM

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available local models (Value Object)
///
/// The model is picked once at session start and stays fixed for the
/// rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// DeepSeek-R1 distilled 7B
    #[default]
    DeepseekR1_7b,
    /// DeepSeek-R1 distilled 1.5B
    DeepseekR1_1_5b,
}

impl Model {
    /// Get the identifier the model server knows this model by
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::DeepseekR1_7b => "deepseek-r1:7b",
            Model::DeepseekR1_1_5b => "deepseek-r1:1.5b",
        }
    }

    /// All selectable models, in menu order
    pub fn all() -> [Model; 2] {
        [Model::DeepseekR1_7b, Model::DeepseekR1_1_5b]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deepseek-r1:7b" | "7b" => Ok(Model::DeepseekR1_7b),
            "deepseek-r1:1.5b" | "1.5b" => Ok(Model::DeepseekR1_1_5b),
            _ => Err(DomainError::UnknownModel(s.to_string())),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::all() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_model_short_names() {
        assert_eq!("7b".parse::<Model>().unwrap(), Model::DeepseekR1_7b);
        assert_eq!("1.5B".parse::<Model>().unwrap(), Model::DeepseekR1_1_5b);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = "llama3:8b".parse::<Model>().unwrap_err();
        assert_eq!(err, DomainError::UnknownModel("llama3:8b".to_string()));
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::DeepseekR1_7b);
    }

    #[test]
    fn test_model_serde() {
        let json = serde_json::to_string(&Model::DeepseekR1_1_5b).unwrap();
        assert_eq!(json, "\"deepseek-r1:1.5b\"");
        let model: Model = serde_json::from_str("\"deepseek-r1:7b\"").unwrap();
        assert_eq!(model, Model::DeepseekR1_7b);
        assert!(serde_json::from_str::<Model>("\"gpt-4\"").is_err());
    }
}
