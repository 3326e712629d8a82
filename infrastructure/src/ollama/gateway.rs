//! Ollama LLM Gateway implementation

use crate::ollama::error::{OllamaError, Result};
use crate::ollama::protocol::{ChatRequest, ChatResponse, ErrorResponse, TagsResponse};
use async_trait::async_trait;
use reasoner_application::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, info};

/// Default address of a local Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// LLM Gateway implementation for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaGateway {
    /// Create a gateway for the given server. No timeout is applied.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a gateway with an optional per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OllamaError::InvalidBaseUrl(base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("OllamaGateway initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat request and return the assistant message content
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(
            "POST {} model={} messages={}",
            url,
            request.model,
            request.messages.len()
        );

        let response = self.client.post(&url).json(request).send().await?;
        let response = Self::check_status(response).await?;

        let body: ChatResponse = response.json().await?;
        debug!(
            "Chat response: model={:?} done={} reason={:?} eval_count={:?}",
            body.model, body.done, body.done_reason, body.eval_count
        );

        body.message
            .map(|m| m.content)
            .ok_or(OllamaError::MissingMessage)
    }

    /// List the models installed on the server
    pub async fn tags(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let body: TagsResponse = response.json().await?;
        Ok(body.models.into_iter().map(|m| m.name).collect())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error)
            .unwrap_or(text);

        Err(OllamaError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<String, GatewayError> {
        let body = ChatRequest::from(request);
        self.chat(&body).await.map_err(GatewayError::from)
    }

    async fn available_models(&self) -> std::result::Result<Vec<String>, GatewayError> {
        self.tags().await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasoner_application::GenerationParams;
    use reasoner_domain::{Model, PromptMessage};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP request with a canned reply and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];

            // Read headers, then as much body as Content-Length announces
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(
            Model::DeepseekR1_7b,
            vec![PromptMessage::system("sys"), PromptMessage::user("Hello")],
            GenerationParams::default(),
        )
    }

    #[test]
    fn test_rejects_base_url_without_scheme() {
        let err = OllamaGateway::new("localhost:11434").unwrap_err();
        assert!(matches!(err, OllamaError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gateway = OllamaGateway::new("http://localhost:11434/").unwrap();
        assert_eq!(gateway.base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_complete_returns_message_content() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"model":"deepseek-r1:7b","message":{"role":"assistant","content":"<think>a</think><response>b</response>"},"done":true}"#,
        )
        .await;

        let gateway = OllamaGateway::new(base_url).unwrap();
        let text = gateway.complete(&request()).await.unwrap();
        assert_eq!(text, "<think>a</think><response>b</response>");

        let raw_request = server.await.unwrap();
        assert!(raw_request.starts_with("POST /api/chat"));
        assert!(raw_request.contains(r#""stream":false"#));
        assert!(raw_request.contains(r#""model":"deepseek-r1:7b""#));
    }

    #[tokio::test]
    async fn test_empty_content_is_not_an_error() {
        let (base_url, _server) = serve_once(
            "200 OK",
            r#"{"message":{"role":"assistant","content":""},"done":true}"#,
        )
        .await;

        let gateway = OllamaGateway::new(base_url).unwrap();
        assert_eq!(gateway.complete(&request()).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message() {
        let (base_url, _server) = serve_once(
            "404 Not Found",
            r#"{"error":"model \"deepseek-r1:7b\" not found, try pulling it first"}"#,
        )
        .await;

        let gateway = OllamaGateway::new(base_url).unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        match err {
            GatewayError::RequestFailed(message) => {
                assert!(message.contains("404"));
                assert!(message.contains("try pulling it first"));
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_message_is_invalid_response() {
        let (base_url, _server) = serve_once("200 OK", r#"{"done":true}"#).await;

        let gateway = OllamaGateway::new(base_url).unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OllamaGateway::new(format!("http://{}", addr)).unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_available_models_lists_tags() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"models":[{"name":"deepseek-r1:7b"},{"name":"deepseek-r1:1.5b"}]}"#,
        )
        .await;

        let gateway = OllamaGateway::new(base_url).unwrap();
        let models = gateway.available_models().await.unwrap();
        assert_eq!(models, vec!["deepseek-r1:7b", "deepseek-r1:1.5b"]);
        assert!(server.await.unwrap().starts_with("GET /api/tags"));
    }
}
