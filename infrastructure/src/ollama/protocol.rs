//! Ollama HTTP API wire types.
//!
//! Only the subset used here: `POST /api/chat` (non-streaming) and
//! `GET /api/tags`.

use reasoner_application::CompletionRequest;
use serde::{Deserialize, Serialize};

/// A chat message as Ollama expects and returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Model options passed under `options`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

impl From<&CompletionRequest> for ChatRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.to_string(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            stream: false,
            options: ChatOptions {
                temperature: request.params.temperature,
            },
        }
    }
}

/// Reply to a non-streaming `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub message: Option<ChatMessage>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// Error body Ollama sends with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reply to `GET /api/tags`
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagModel {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasoner_application::GenerationParams;
    use reasoner_domain::{Model, PromptMessage};

    #[test]
    fn test_chat_request_body() {
        let request = CompletionRequest::new(
            Model::DeepseekR1_1_5b,
            vec![
                PromptMessage::system("be terse"),
                PromptMessage::user("hi"),
                PromptMessage::assistant("<think></think><response>hello</response>"),
            ],
            GenerationParams::default(),
        );

        let body = serde_json::to_value(ChatRequest::from(&request)).unwrap();
        assert_eq!(body["model"], "deepseek-r1:1.5b");
        assert_eq!(body["stream"], false);
        assert!((body["options"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert_eq!(body["messages"][2]["role"], "assistant");
    }

    #[test]
    fn test_chat_response_parse() {
        let json = r#"{
            "model": "deepseek-r1:7b",
            "created_at": "2025-01-28T10:00:00Z",
            "message": {"role": "assistant", "content": "<think>x</think><response>y</response>"},
            "done": true,
            "done_reason": "stop",
            "eval_count": 12
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.done);
        assert_eq!(response.done_reason.as_deref(), Some("stop"));
        assert_eq!(
            response.message.unwrap().content,
            "<think>x</think><response>y</response>"
        );
    }

    #[test]
    fn test_tags_response_parse() {
        let json = r#"{"models": [{"name": "deepseek-r1:7b", "size": 1}, {"name": "deepseek-r1:1.5b"}]}"#;
        let tags: TagsResponse = serde_json::from_str(json).unwrap();
        let names: Vec<_> = tags.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["deepseek-r1:7b", "deepseek-r1:1.5b"]);
    }
}
