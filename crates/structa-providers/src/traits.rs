use std::time::Duration;

use crate::error::Result;

/// Tuning knobs forwarded with every completion call
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

impl CompletionOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// One prompt bound for one model
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub options: CompletionOptions,
}

impl CompletionRequest {
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            options: CompletionOptions::default(),
        }
    }
}

/// Raw text returned by a provider, with attribution
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
    pub provider: String,
}

/// A hosted completion service.
///
/// Responsibilities:
/// - Translate a [`CompletionRequest`] into one provider-specific HTTP call
/// - Surface the answer text verbatim, or a definitive error
///
/// Calls block the caller for at most the request timeout; there is no
/// retry, queueing or background work at this seam, and service error
/// messages pass through opaquely.
pub trait CompletionProvider: Send + Sync {
    /// Unique provider ID (e.g. "gemini", "groq")
    fn id(&self) -> &'static str;

    /// Model used when the caller does not pick one
    fn default_model(&self) -> &'static str;

    /// Send the prompt and wait for the answer text
    fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}
