use anyhow::Result;
use std::path::Path;

use crate::args::ModelCommand;
use crate::config::Config;

pub fn handle(command: ModelCommand, config_dir: &Path) -> Result<()> {
    let ModelCommand::List { provider } = command;
    let config = Config::load_from(&Config::config_path(config_dir))?;

    let names: Vec<&str> = match provider {
        Some(name) => vec![name.as_str()],
        None => structa_providers::provider_names(),
    };

    for name in names {
        println!("{}:", name);
        let configured = config
            .providers
            .get(name)
            .and_then(|settings| settings.model.clone());

        for info in structa_providers::known_models(name) {
            let mut notes = Vec::new();
            if info.recommended {
                notes.push("recommended");
            }
            if configured.as_deref() == Some(info.id) {
                notes.push("configured");
            }

            let suffix = if notes.is_empty() {
                String::new()
            } else {
                format!(" [{}]", notes.join(", "))
            };
            println!("  {:<34} {}{}", info.id, info.description, suffix);
        }
        println!();
    }

    Ok(())
}
