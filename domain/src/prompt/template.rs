//! System instruction for tagged reasoning responses

use crate::reasoning::ReasoningApproach;

/// Placeholder replaced by the reasoning approach label
const APPROACH_PLACEHOLDER: &str = "{reasoning_type}";

const SYSTEM_TEMPLATE: &str = r#"You are a concise reasoning assistant specializing in {reasoning_type} thinking. 
Always structure your response in TWO parts using XML tags:

<think>
Here, provide your step-by-step analysis:
- Break down the key aspects of the problem
- Consider important factors and relationships
- Identify any assumptions or constraints
Be thorough but concise in your thinking process.
</think>

<response>
Here, provide your clear, actionable conclusion:
- Present your final analysis
- Keep it under 150 words
- Use simple, direct language
- Focus on practical insights
</response>

Always enclose your thinking in <think></think> tags and your final response in <response></response> tags."#;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Raw system template with the `{reasoning_type}` placeholder intact
    pub fn system_template() -> &'static str {
        SYSTEM_TEMPLATE
    }

    /// System prompt bound to the given reasoning approach
    pub fn system(approach: ReasoningApproach) -> String {
        SYSTEM_TEMPLATE.replace(APPROACH_PLACEHOLDER, approach.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_binds_label() {
        let prompt = PromptTemplate::system(ReasoningApproach::SystemsThinking);
        assert!(prompt.starts_with(
            "You are a concise reasoning assistant specializing in Systems Thinking thinking."
        ));
        assert!(!prompt.contains(APPROACH_PLACEHOLDER));
    }

    #[test]
    fn test_system_prompt_mandates_markers() {
        let prompt = PromptTemplate::system(ReasoningApproach::Analytical);
        for marker in ["<think>", "</think>", "<response>", "</response>"] {
            assert!(prompt.contains(marker), "missing {}", marker);
        }
        assert!(prompt.contains("under 150 words"));
    }
}
