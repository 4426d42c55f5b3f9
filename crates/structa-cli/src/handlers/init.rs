use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub fn handle(config_dir: &Path, force: bool) -> Result<()> {
    let config_path = Config::config_path(config_dir);

    if config_path.exists() && !force {
        println!("Config already exists at {}", config_path.display());
        println!("Use 'structa init --force' to overwrite it");
        return Ok(());
    }

    let config = Config::detect();
    config.save_to(&config_path)?;
    println!("Wrote {}", config_path.display());

    match &config.default_provider {
        Some(name) => println!("Detected credentials; default provider is '{}'", name),
        None => {
            println!("No credentials detected in the environment.");
            println!("Export GEMINI_API_KEY or GROQ_API_KEY, or run:");
            println!("  structa provider set gemini --api-key <KEY>");
        }
    }

    println!();
    println!("Next steps:");
    println!("  structa ask \"plan a weekend hiking trip\"");
    println!("  structa session");

    Ok(())
}
