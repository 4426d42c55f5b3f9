pub mod ask;
pub mod init;
pub mod model;
pub mod provider;
pub mod session;

use anyhow::anyhow;
use structa_providers::credential_env_var;

/// Actionable error for the common first-run failure
pub(crate) fn missing_key_error(provider: &str) -> anyhow::Error {
    let env_hint = credential_env_var(provider)
        .map(|var| format!(" or export {}", var))
        .unwrap_or_default();
    anyhow!(
        "no API key configured for provider '{}'; run 'structa provider set {} --api-key <KEY>'{}",
        provider,
        provider,
        env_hint
    )
}
