use crate::types::{OutputFormat, ProviderName, TemplateName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "structa")]
#[command(about = "Ask hosted AI models for structured answers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config directory (default: $STRUCTA_PATH or the XDG config dir)")]
    pub config_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One request, one structured answer
    Ask {
        #[arg(required = true)]
        request: Vec<String>,

        #[arg(long)]
        provider: Option<ProviderName>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long, default_value = "auto")]
        template: TemplateName,

        #[arg(long, help = "Also print the raw JSON after the widgets")]
        raw: bool,

        #[arg(long, help = "Write the response JSON to a file (or into a directory)")]
        save: Option<PathBuf>,
    },

    /// Interactive loop with in-memory history
    Session {
        #[arg(long)]
        provider: Option<ProviderName>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long, default_value = "auto")]
        template: TemplateName,
    },

    /// Manage provider credentials and defaults
    Provider {
        #[command(subcommand)]
        command: ProviderCommand,
    },

    /// Browse the model catalog
    Model {
        #[command(subcommand)]
        command: ModelCommand,
    },

    /// Detect credentials and write the initial config
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProviderCommand {
    List,

    Detect,

    Set {
        provider: ProviderName,

        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long, help = "Make this the default provider")]
        default: bool,
    },
}

#[derive(Subcommand)]
pub enum ModelCommand {
    List {
        #[arg(long)]
        provider: Option<ProviderName>,
    },
}
