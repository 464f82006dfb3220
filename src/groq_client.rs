use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Hard ceiling on a single completion request. Callers see the elapsed wait
/// as synchronous latency; there is no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GroqError {
    /// Provider reachable but returned a non-success status.
    #[error("AI service error (status {status}): {detail}")]
    Api { status: u16, detail: String },
    /// Transport-level failure: connection refused, TLS, timeout.
    #[error("AI service request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Provider reachable, 2xx, but the payload did not decode.
    #[error("AI service returned an unexpected payload: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<GroqMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stop: Vec<String>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GROQ_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model: "groq/compound".to_string(),
        }
    }

    /// Sends a role-tagged message sequence and returns the single best
    /// completion. Stop sequences keep the model from impersonating turn
    /// labels; the response is never streamed.
    pub async fn chat_completion(&self, messages: Vec<GroqMessage>) -> Result<String, GroqError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: 1024,
            temperature: 0.7,
            top_p: 0.9,
            stop: ["<|eot_id|>", "<|end_of_text|>", "Human:", "AI:"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stream: false,
        };

        tracing::debug!("Groq API request: {} messages", request.messages.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("Groq API response status: {}", status);

        if !status.is_success() {
            tracing::error!("Groq API error ({}): {}", status, body);
            return Err(GroqError::Api {
                status: status.as_u16(),
                detail: body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GroqError::InvalidResponse(format!("{}: {}", e, body)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GroqError::InvalidResponse("no choices in completion".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GroqClient {
        GroqClient::with_base_url("test-key".to_string(), server.uri())
    }

    fn user_question(content: &str) -> Vec<GroqMessage> {
        vec![GroqMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }]
    }

    #[tokio::test]
    async fn test_chat_completion_extracts_answer_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "He led a team of 4 developers." } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = test_client(&server)
            .chat_completion(user_question("What did he do at Accenture?"))
            .await
            .unwrap();
        assert_eq!(answer, "He led a team of 4 developers.");
    }

    #[tokio::test]
    async fn test_request_carries_generation_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
            })))
            .mount(&server)
            .await;

        test_client(&server)
            .chat_completion(user_question("hi"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["model"], "groq/compound");
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["stream"], false);
        assert_eq!(body["stop"].as_array().unwrap().len(), 4);
        assert!(body["stop"]
            .as_array()
            .unwrap()
            .contains(&json!("Human:")));
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_upstream_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .chat_completion(user_question("hi"))
            .await
            .unwrap_err();
        match err {
            GroqError::Api { status, detail } => {
                assert_eq!(status, 429);
                assert_eq!(detail, "rate limit exceeded");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .chat_completion(user_question("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GroqError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .chat_completion(user_question("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GroqError::InvalidResponse(_)));
    }
}
