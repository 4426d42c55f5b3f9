use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::{Completion, CompletionProvider, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini, via the `generateContent` REST endpoint
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
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
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Pull the answer text out of a decoded response body.
/// Multi-part candidates are concatenated in order.
fn answer_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

/// Service error bodies look like `{"error": {"message": "..."}}`;
/// fall back to the raw body when they do not.
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

impl CompletionProvider for GeminiProvider {
    fn id(&self) -> &'static str {
        "gemini"
    }

    fn default_model(&self) -> &'static str {
        "gemini-2.0-flash"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        if self.api_key.is_empty() {
            return Err(Error::MissingCredentials(self.id().to_string()));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.options.temperature,
                max_output_tokens: request.options.max_output_tokens,
            },
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(request.options.timeout())
            .build()?;

        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let decoded: GenerateResponse = serde_json::from_str(&response.text()?)?;
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
    fn test_answer_text_from_candidate_parts() {
        let decoded: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"a\""}, {"text": ": 1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(answer_text(decoded).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_no_candidates_is_empty_response() {
        let decoded: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(answer_text(decoded), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_missing_candidates_field_is_empty_response() {
        let decoded: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(answer_text(decoded), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_error_message_decoding() {
        let body = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        assert_eq!(error_message(body), "API key not valid");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_empty_key_fails_before_any_request() {
        let provider = GeminiProvider::new(String::new());
        let request = CompletionRequest::new("hi".to_string(), "gemini-2.0-flash".to_string());
        assert!(matches!(
            provider.complete(&request),
            Err(Error::MissingCredentials(_))
        ));
    }
}
