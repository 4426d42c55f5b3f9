use anyhow::Result;
use std::path::Path;

use crate::args::ProviderCommand;
use crate::config::Config;

pub fn handle(command: ProviderCommand, config_dir: &Path) -> Result<()> {
    let config_path = Config::config_path(config_dir);

    match command {
        ProviderCommand::List => list(&Config::load_from(&config_path)?),
        ProviderCommand::Detect => detect(&config_path),
        ProviderCommand::Set {
            provider,
            api_key,
            model,
            default,
        } => set(&config_path, provider.as_str(), api_key, model, default),
    }
}

fn list(config: &Config) -> Result<()> {
    let default_name = config.resolve_provider_name(None);

    for meta in structa_providers::all_providers() {
        let settings = config.providers.get(meta.name);

        let key_source = if settings.and_then(|s| s.api_key.as_ref()).is_some() {
            "config"
        } else if std::env::var(meta.credential_env_var).is_ok_and(|key| !key.is_empty()) {
            "environment"
        } else {
            "missing"
        };

        let default_marker = if meta.name == default_name {
            " (default)"
        } else {
            ""
        };

        println!("{}{} - {}", meta.name, default_marker, meta.description);
        println!("  key: {}", key_source);
        if let Some(model) = settings.and_then(|s| s.model.as_ref()) {
            println!("  model: {}", model);
        }
    }

    Ok(())
}

fn detect(config_path: &Path) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    let mut found = 0;

    for meta in structa_providers::all_providers() {
        if std::env::var(meta.credential_env_var).is_ok_and(|key| !key.is_empty()) {
            found += 1;
            config.providers.entry(meta.name.to_string()).or_default();
            if config.default_provider.is_none() {
                config.default_provider = Some(meta.name.to_string());
            }
            println!("{}: found {}", meta.name, meta.credential_env_var);
        } else {
            println!("{}: {} not set", meta.name, meta.credential_env_var);
        }
    }

    if found > 0 {
        config.save_to(config_path)?;
        println!("Updated {}", config_path.display());
    } else {
        println!("No credentials found; nothing written");
    }

    Ok(())
}

fn set(
    config_path: &Path,
    name: &str,
    api_key: Option<String>,
    model: Option<String>,
    default: bool,
) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    let settings = config.providers.entry(name.to_string()).or_default();
    if let Some(key) = api_key {
        settings.api_key = Some(key);
    }
    if let Some(model) = model {
        settings.model = Some(model);
    }
    if default {
        config.default_provider = Some(name.to_string());
    }

    config.save_to(config_path)?;
    println!("Updated provider '{}' in {}", name, config_path.display());
    Ok(())
}
