use std::fmt;

use structa_core::extract;
use structa_providers::{
    build_prompt, CompletionOptions, CompletionProvider, CompletionRequest, TemplateHint,
};
use structa_types::StructuredValue;

/// A successful trip through the pipeline: the structured value plus the
/// raw text it was carved from, with attribution
#[derive(Debug)]
pub struct RequestOutcome {
    pub value: StructuredValue,
    pub raw_text: String,
    pub model: String,
    pub provider: String,
}

/// Why a request produced nothing structured
#[derive(Debug)]
pub enum RequestFailure {
    /// The provider call itself failed; the message passes through
    Provider(structa_providers::Error),

    /// The provider answered, but no JSON could be extracted.
    /// The raw text is kept so the caller can show it for debugging.
    NotJson { raw: String },
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Provider(err) => write!(f, "{}", err),
            RequestFailure::NotJson { .. } => {
                write!(f, "no valid JSON found in the model response")
            }
        }
    }
}

/// Run one request through prompt -> provider -> extraction.
///
/// One blocking provider call; no retries. Rendering is left to the
/// caller so it can pick an output format first.
pub fn execute(
    provider: &dyn CompletionProvider,
    request_text: &str,
    model: &str,
    hint: TemplateHint,
    options: CompletionOptions,
) -> Result<RequestOutcome, RequestFailure> {
    let completion_request = CompletionRequest {
        prompt: build_prompt(request_text, hint),
        model: model.to_string(),
        options,
    };

    let completion = provider
        .complete(&completion_request)
        .map_err(RequestFailure::Provider)?;

    match extract(&completion.text) {
        Ok(value) => Ok(RequestOutcome {
            value,
            raw_text: completion.text,
            model: completion.model,
            provider: completion.provider,
        }),
        Err(_) => Err(RequestFailure::NotJson {
            raw: completion.text,
        }),
    }
}
