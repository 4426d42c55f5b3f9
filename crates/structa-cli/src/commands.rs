use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;

use crate::args::{Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = config::resolve_config_dir(cli.config_dir.as_deref())?;
    let enable_color = !cli.no_color && std::io::stdout().is_terminal();

    let Some(command) = cli.command else {
        show_guidance(&config_dir);
        return Ok(());
    };

    match command {
        Commands::Ask {
            request,
            provider,
            model,
            template,
            raw,
            save,
        } => {
            let config = Config::load_from(&Config::config_path(&config_dir))?;
            handlers::ask::handle(
                &config,
                &request.join(" "),
                provider,
                model,
                template.hint(),
                raw,
                save,
                cli.format,
                enable_color,
            )
        }

        Commands::Session {
            provider,
            model,
            template,
        } => {
            let config = Config::load_from(&Config::config_path(&config_dir))?;
            handlers::session::handle(&config, provider, model, template.hint(), enable_color)
        }

        Commands::Provider { command } => handlers::provider::handle(command, &config_dir),

        Commands::Model { command } => handlers::model::handle(command, &config_dir),

        Commands::Init { force } => handlers::init::handle(&config_dir, force),
    }
}

fn show_guidance(config_dir: &Path) {
    let config_exists = Config::config_path(config_dir).exists();

    println!("structa - structured answers from hosted AI models\n");

    if !config_exists {
        println!("Get started:");
        println!("  structa init\n");
        println!("The init command will:");
        println!("  1. Detect API keys in your environment (Gemini, Groq)");
        println!("  2. Write the initial config");
        println!("  3. Show you where to go next\n");
    } else {
        println!("Quick commands:");
        println!("  structa ask \"plan a weekend trip\"   # One structured answer");
        println!("  structa session                     # Interactive loop with history");
        println!("  structa model list                  # Browse available models");
        println!("  structa provider list               # Check configured providers\n");
    }

    println!("For more commands:");
    println!("  structa --help");
}
