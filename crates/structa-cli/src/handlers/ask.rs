use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::handlers::missing_key_error;
use crate::output;
use crate::services::request::{execute, RequestFailure};
use crate::types::{OutputFormat, ProviderName};
use structa_providers::{create_provider, TemplateHint};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    request_text: &str,
    provider_flag: Option<ProviderName>,
    model_flag: Option<String>,
    hint: TemplateHint,
    raw: bool,
    save: Option<PathBuf>,
    format: OutputFormat,
    enable_color: bool,
) -> Result<()> {
    let provider_name = config.resolve_provider_name(provider_flag.map(|p| p.as_str()));
    let api_key = config
        .resolve_api_key(&provider_name)
        .ok_or_else(|| missing_key_error(&provider_name))?;
    let provider = create_provider(&provider_name, api_key)?;
    let model =
        config.resolve_model(&provider_name, model_flag.as_deref(), provider.default_model());

    let outcome = match execute(
        provider.as_ref(),
        request_text,
        &model,
        hint,
        config.request_options(),
    ) {
        Ok(outcome) => outcome,
        Err(RequestFailure::NotJson { raw }) => {
            // Hand the user the unparseable text so they can see what came back
            println!("{}", raw);
            anyhow::bail!("no valid JSON found in the model response (raw text shown above)");
        }
        Err(RequestFailure::Provider(err)) => return Err(err.into()),
    };

    let pretty = serde_json::to_string_pretty(&outcome.value)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => writeln!(out, "{}", pretty)?,
        OutputFormat::Plain => match structa_core::render(&outcome.value) {
            Ok(directives) => {
                output::write_model_line(&mut out, &outcome.model, &outcome.provider, enable_color)?;
                output::write_directives(&mut out, &directives, enable_color)?;
                if raw {
                    output::write_raw_block(&mut out, &pretty, enable_color)?;
                }
            }
            Err(err) => {
                // Still hand over the value we found before failing
                writeln!(out, "{}", pretty)?;
                anyhow::bail!("cannot display the response as widgets: {}", err);
            }
        },
    }

    if let Some(path) = save {
        let target = save_response(&path, &pretty)?;
        writeln!(out, "Saved response to {}", target.display())?;
    }

    Ok(())
}

/// Write the response JSON; a directory target gets a timestamped name
fn save_response(path: &Path, pretty: &str) -> Result<PathBuf> {
    let target = if path.is_dir() {
        let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        path.join(format!("structa_response_{}.json", stamp))
    } else {
        path.to_path_buf()
    };

    std::fs::write(&target, pretty)
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}
