//! Generation parameters for the chat model.

use serde::{Deserialize, Serialize};

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling parameters passed along with each completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GenerationParams {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_temperature() {
        assert_eq!(GenerationParams::default().temperature, 0.7);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default().with_temperature(0.2);
        assert_eq!(params.temperature, 0.2);
    }
}
