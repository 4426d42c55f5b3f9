use std::sync::Mutex;

use structa_providers::{Completion, CompletionProvider, CompletionRequest, Error, Result};

/// Scripted response: the raw text a provider would return, or an error
/// message surfaced as an API failure
#[derive(Debug, Clone)]
pub enum Scripted {
    Text(&'static str),
    Failure(&'static str),
}

/// Completion provider that replays canned responses.
///
/// Responses are consumed in order; the last one repeats once the script
/// runs out, so single-response scripts behave like an always-on stub.
pub struct ScriptedProvider {
    script: Mutex<Vec<Scripted>>,
    calls: Mutex<usize>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(0),
        }
    }

    /// Provider that always answers with the same text
    pub fn always(text: &'static str) -> Self {
        Self::new(vec![Scripted::Text(text)])
    }

    /// Provider that always fails with the same message
    pub fn always_failing(message: &'static str) -> Self {
        Self::new(vec![Scripted::Failure(message)])
    }

    /// Number of completion calls made so far
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CompletionProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &'static str {
        "scripted-model"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        *self.calls.lock().unwrap() += 1;

        let mut script = self.script.lock().unwrap();
        let next = if script.len() > 1 {
            script.remove(0)
        } else {
            script.first().cloned().ok_or(Error::EmptyResponse)?
        };

        match next {
            Scripted::Text(text) => Ok(Completion {
                text: text.to_string(),
                model: request.model.clone(),
                provider: self.id().to_string(),
            }),
            Scripted::Failure(message) => Err(Error::Api {
                status: 500,
                message: message.to_string(),
            }),
        }
    }
}
