use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use structa_providers::CompletionOptions;

/// Resolve the config directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STRUCTA_PATH environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.structa (fallback for systems without XDG)
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: STRUCTA_PATH environment variable
    if let Ok(env_path) = std::env::var("STRUCTA_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG config directory (recommended default)
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("structa"));
    }

    // Priority 4: Fallback to ~/.structa (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".structa"));
    }

    anyhow::bail!("could not determine config directory: no HOME or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSettings {
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_temperature() -> f32 {
    CompletionOptions::default().temperature
}

fn default_max_output_tokens() -> u32 {
    CompletionOptions::default().max_output_tokens
}

fn default_timeout_secs() -> u64 {
    CompletionOptions::default().timeout_secs
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,

    #[serde(default)]
    pub providers: HashMap<String, ProviderSettings>,

    #[serde(default)]
    pub request: RequestSettings,
}

impl Config {
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Build a config from whatever credentials the environment carries.
    /// The first provider with a key becomes the default.
    pub fn detect() -> Self {
        let mut config = Config::default();

        for meta in structa_providers::all_providers() {
            if std::env::var(meta.credential_env_var).is_ok_and(|key| !key.is_empty()) {
                config
                    .providers
                    .insert(meta.name.to_string(), ProviderSettings::default());
                if config.default_provider.is_none() {
                    config.default_provider = Some(meta.name.to_string());
                }
            }
        }

        config
    }

    /// Provider to use: explicit flag, then configured default, then gemini
    pub fn resolve_provider_name(&self, explicit: Option<&str>) -> String {
        if let Some(name) = explicit {
            return name.to_string();
        }
        self.default_provider
            .clone()
            .unwrap_or_else(|| "gemini".to_string())
    }

    /// API key for a provider: config first, then the environment
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(settings) = self.providers.get(provider)
            && let Some(key) = &settings.api_key
            && !key.is_empty()
        {
            return Some(key.clone());
        }

        let var = structa_providers::credential_env_var(provider)?;
        std::env::var(var).ok().filter(|key| !key.is_empty())
    }

    /// Model for a provider: explicit flag, then config, then the fallback
    pub fn resolve_model(&self, provider: &str, explicit: Option<&str>, fallback: &str) -> String {
        if let Some(model) = explicit {
            return model.to_string();
        }
        self.providers
            .get(provider)
            .and_then(|settings| settings.model.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn request_options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: self.request.temperature,
            max_output_tokens: self.request.max_output_tokens,
            timeout_secs: self.request.timeout_secs,
        }
    }
}
