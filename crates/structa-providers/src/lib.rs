pub mod catalog;
pub mod error;
pub mod gemini;
pub mod groq;
pub mod prompt;
pub mod registry;
pub mod traits;

pub use catalog::{known_models, ModelInfo};
pub use error::{Error, Result};
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use prompt::{build_prompt, TemplateHint};
pub use registry::{
    all_providers, create_provider, credential_env_var, provider_names, ProviderMetadata,
};
pub use traits::{Completion, CompletionOptions, CompletionProvider, CompletionRequest};
