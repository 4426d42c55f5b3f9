use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::handlers::missing_key_error;
use crate::history::{InMemoryHistory, RECENT_DISPLAY_LIMIT};
use crate::output;
use crate::services::request::{execute, RequestFailure};
use crate::types::ProviderName;
use structa_providers::{create_provider, CompletionOptions, CompletionProvider, TemplateHint};
use structa_types::{HistoryEntry, HistoryStore};

pub fn handle(
    config: &Config,
    provider_flag: Option<ProviderName>,
    model_flag: Option<String>,
    hint: TemplateHint,
    enable_color: bool,
) -> Result<()> {
    let provider_name = config.resolve_provider_name(provider_flag.map(|p| p.as_str()));
    let api_key = config
        .resolve_api_key(&provider_name)
        .ok_or_else(|| missing_key_error(&provider_name))?;
    let provider = create_provider(&provider_name, api_key)?;
    let model =
        config.resolve_model(&provider_name, model_flag.as_deref(), provider.default_model());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut history = InMemoryHistory::default();

    run_loop(
        provider.as_ref(),
        &model,
        hint,
        config.request_options(),
        &mut history,
        stdin.lock(),
        stdout.lock(),
        enable_color,
    )
}

/// The interaction loop, one blocking request per line of input.
///
/// Provider failures and unparseable responses are reported and the loop
/// continues; only I/O errors end the session early.
#[allow(clippy::too_many_arguments)]
fn run_loop<R: BufRead, W: Write>(
    provider: &dyn CompletionProvider,
    model: &str,
    hint: TemplateHint,
    options: CompletionOptions,
    history: &mut InMemoryHistory,
    mut input: R,
    mut out: W,
    enable_color: bool,
) -> Result<()> {
    writeln!(out, "Session with {} ({})", provider.id(), model)?;
    writeln!(out, "Type a request, or /history, /raw, /quit")?;

    let mut last_raw: Option<String> = None;
    let mut line = String::new();

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,

            "/history" => {
                let recent = history.recent(RECENT_DISPLAY_LIMIT);
                output::write_history(&mut out, &recent, enable_color)?;
            }

            "/raw" => match &last_raw {
                Some(raw) => output::write_raw_block(&mut out, raw, enable_color)?,
                None => writeln!(out, "Nothing to show yet")?,
            },

            request_text => {
                match execute(provider, request_text, model, hint, options.clone()) {
                    Ok(outcome) => {
                        let pretty = serde_json::to_string_pretty(&outcome.value)?;
                        match structa_core::render(&outcome.value) {
                            Ok(directives) => {
                                output::write_model_line(
                                    &mut out,
                                    &outcome.model,
                                    &outcome.provider,
                                    enable_color,
                                )?;
                                output::write_directives(&mut out, &directives, enable_color)?;
                            }
                            Err(err) => {
                                writeln!(out, "{}", pretty)?;
                                writeln!(out, "Cannot display the response as widgets: {}", err)?;
                            }
                        }
                        last_raw = Some(pretty);
                        history.append(HistoryEntry::new(
                            request_text.to_string(),
                            outcome.value,
                            outcome.model,
                        ));
                    }

                    Err(RequestFailure::NotJson { raw }) => {
                        writeln!(out, "The response did not contain valid JSON. Raw text:")?;
                        writeln!(out, "{}", raw)?;
                    }

                    Err(failure) => writeln!(out, "Request failed: {}", failure)?,
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use structa_testing::{fixtures, providers::Scripted, ScriptedProvider};

    fn run(
        provider: &ScriptedProvider,
        input: &str,
        history: &mut InMemoryHistory,
    ) -> String {
        let mut out: Vec<u8> = Vec::new();
        run_loop(
            provider,
            "scripted-model",
            TemplateHint::Auto,
            CompletionOptions::default(),
            history,
            Cursor::new(input.to_string()),
            &mut out,
            false,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_request_is_rendered_and_recorded() {
        let provider = ScriptedProvider::always(fixtures::CLEAN_JSON);
        let mut history = InMemoryHistory::default();

        let output = run(&provider, "plan a newsletter\n/quit\n", &mut history);

        assert!(output.contains("Plan"));
        assert!(output.contains("Steps (3 items)"));
        assert!(output.contains("Approved: Yes"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.recent(1)[0].request, "plan a newsletter");
    }

    #[test]
    fn test_history_command_shows_recent_entries() {
        let provider = ScriptedProvider::always(fixtures::CLEAN_JSON);
        let mut history = InMemoryHistory::default();

        let output = run(&provider, "first request\n/history\n/quit\n", &mut history);

        assert!(output.contains("first request"));
        assert!(output.contains("scripted-model"));
    }

    #[test]
    fn test_provider_failure_keeps_the_loop_alive() {
        let provider = ScriptedProvider::new(vec![
            Scripted::Failure("quota exhausted"),
            Scripted::Text(fixtures::CLEAN_JSON),
        ]);
        let mut history = InMemoryHistory::default();

        let output = run(&provider, "one\ntwo\n/quit\n", &mut history);

        assert!(output.contains("Request failed"));
        assert!(output.contains("quota exhausted"));
        assert_eq!(history.len(), 1, "only the successful request is recorded");
    }

    #[test]
    fn test_unparseable_response_shows_raw_text() {
        let provider = ScriptedProvider::always(fixtures::NOT_JSON);
        let mut history = InMemoryHistory::default();

        let output = run(&provider, "anything\n/quit\n", &mut history);

        assert!(output.contains("did not contain valid JSON"));
        assert!(output.contains(fixtures::NOT_JSON));
        assert!(history.is_empty());
    }

    #[test]
    fn test_raw_before_any_request() {
        let provider = ScriptedProvider::always(fixtures::CLEAN_JSON);
        let mut history = InMemoryHistory::default();

        let output = run(&provider, "/raw\n/quit\n", &mut history);
        assert!(output.contains("Nothing to show yet"));
    }

    #[test]
    fn test_eof_ends_the_loop() {
        let provider = ScriptedProvider::always(fixtures::CLEAN_JSON);
        let mut history = InMemoryHistory::default();

        // No /quit; the loop ends when input runs out
        let output = run(&provider, "plan something\n", &mut history);
        assert!(output.contains("Plan"));
        assert_eq!(history.len(), 1);
    }
}
