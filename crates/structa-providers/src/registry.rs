use crate::error::{Error, Result};
use crate::gemini::GeminiProvider;
use crate::groq::GroqProvider;
use crate::traits::CompletionProvider;

#[derive(Debug, Clone, Copy)]
pub struct ProviderMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub credential_env_var: &'static str,
}

const PROVIDERS: &[ProviderMetadata] = &[
    ProviderMetadata {
        name: "gemini",
        description: "Google Gemini",
        credential_env_var: "GEMINI_API_KEY",
    },
    ProviderMetadata {
        name: "groq",
        description: "Groq",
        credential_env_var: "GROQ_API_KEY",
    },
];

pub fn all_providers() -> &'static [ProviderMetadata] {
    PROVIDERS
}

pub fn provider_names() -> Vec<&'static str> {
    PROVIDERS.iter().map(|p| p.name).collect()
}

/// Environment variable holding the API key for a provider
pub fn credential_env_var(name: &str) -> Option<&'static str> {
    PROVIDERS
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.credential_env_var)
}

/// Create a completion client by provider name
pub fn create_provider(name: &str, api_key: String) -> Result<Box<dyn CompletionProvider>> {
    match name {
        "gemini" => Ok(Box::new(GeminiProvider::new(api_key))),
        "groq" => Ok(Box::new(GroqProvider::new(api_key))),
        other => Err(Error::UnknownProvider(other.to_string())),
    }
}
