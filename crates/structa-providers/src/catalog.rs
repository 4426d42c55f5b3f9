/// One entry in a provider's model catalog
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub recommended: bool,
}

const GEMINI_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gemini-2.0-flash",
        description: "Fast & versatile",
        recommended: true,
    },
    ModelInfo {
        id: "gemini-1.5-flash",
        description: "Fast & efficient",
        recommended: false,
    },
    ModelInfo {
        id: "gemini-1.5-pro",
        description: "Advanced reasoning",
        recommended: false,
    },
    ModelInfo {
        id: "gemini-2.5-flash-preview-03-25",
        description: "Latest Flash preview",
        recommended: false,
    },
    ModelInfo {
        id: "gemini-2.5-pro-preview-03-25",
        description: "Latest Pro preview",
        recommended: false,
    },
];

const GROQ_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "llama-3.3-70b-versatile",
        description: "Large & versatile",
        recommended: true,
    },
    ModelInfo {
        id: "llama-3.1-8b-instant",
        description: "Small & instant",
        recommended: false,
    },
    ModelInfo {
        id: "mixtral-8x7b-32768",
        description: "Long context mixture-of-experts",
        recommended: false,
    },
    ModelInfo {
        id: "gemma2-9b-it",
        description: "Compact instruction-tuned",
        recommended: false,
    },
];

/// Catalog of commonly-served models for a provider.
/// Unknown provider names yield an empty catalog; the caller is free to
/// pass any model ID through regardless of what is listed here.
pub fn known_models(provider: &str) -> &'static [ModelInfo] {
    match provider {
        "gemini" => GEMINI_MODELS,
        "groq" => GROQ_MODELS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_provider_has_one_recommended_model() {
        for provider in ["gemini", "groq"] {
            let recommended: Vec<_> = known_models(provider)
                .iter()
                .filter(|m| m.recommended)
                .collect();
            assert_eq!(recommended.len(), 1, "provider {}", provider);
        }
    }

    #[test]
    fn test_unknown_provider_is_empty() {
        assert!(known_models("mystery").is_empty());
    }
}
