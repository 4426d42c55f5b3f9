use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::{Completion, CompletionProvider, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://api.groq.com";

/// Groq, via its OpenAI-compatible chat completions endpoint
pub struct GroqProvider {
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (self-hosted proxies, tests)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

fn answer_text(response: ChatResponse) -> Result<String> {
    let text = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

/// OpenAI-style error bodies: `{"error": {"message": "..."}}`
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|decoded| decoded.error.message)
        .unwrap_or_else(|_| body.to_string())
}

impl CompletionProvider for GroqProvider {
    fn id(&self) -> &'static str {
        "groq"
    }

    fn default_model(&self) -> &'static str {
        "llama-3.3-70b-versatile"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        if self.api_key.is_empty() {
            return Err(Error::MissingCredentials(self.id().to_string()));
        }

        let url = format!("{}/openai/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: request.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            temperature: request.options.temperature,
            max_tokens: request.options.max_output_tokens,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(request.options.timeout())
            .build()?;

        let response = client.post(&url).bearer_auth(&self.api_key).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let decoded: ChatResponse = serde_json::from_str(&response.text()?)?;
        Ok(Completion {
            text: answer_text(decoded)?,
            model: request.model.clone(),
            provider: self.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_text_from_first_choice() {
        let decoded: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"ok\": true}"}}]}"#,
        )
        .unwrap();
        assert_eq!(answer_text(decoded).unwrap(), r#"{"ok": true}"#);
    }

    #[test]
    fn test_no_choices_is_empty_response() {
        let decoded: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(answer_text(decoded), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_error_message_decoding() {
        let body = r#"{"error": {"message": "Rate limit reached", "type": "tokens"}}"#;
        assert_eq!(error_message(body), "Rate limit reached");
    }

    #[test]
    fn test_empty_key_fails_before_any_request() {
        let provider = GroqProvider::new(String::new());
        let request =
            CompletionRequest::new("hi".to_string(), "llama-3.3-70b-versatile".to_string());
        assert!(matches!(
            provider.complete(&request),
            Err(Error::MissingCredentials(_))
        ));
    }
}
