use owo_colors::OwoColorize;
use std::io::{self, Write};
use structa_types::{truncate, DisplayDirective, HistoryEntry};

/// Paint directives in order. Section headers open a block; every other
/// directive is one indented line under the current header.
pub fn write_directives<W: Write>(
    out: &mut W,
    directives: &[DisplayDirective],
    enable_color: bool,
) -> io::Result<()> {
    for directive in directives {
        match directive {
            DisplayDirective::SectionHeader { label, item_count } => {
                let title = match item_count {
                    Some(count) => format!("{} ({} items)", label, count),
                    None => label.clone(),
                };
                writeln!(out)?;
                if enable_color {
                    writeln!(out, "{}", title.cyan())?;
                } else {
                    writeln!(out, "{}", title)?;
                }
            }

            DisplayDirective::MetricLine { label, value } => {
                if enable_color {
                    writeln!(out, "  {}: {}", label, value.to_string().green())?;
                } else {
                    writeln!(out, "  {}: {}", label, value)?;
                }
            }

            DisplayDirective::ListLine { label, items } => {
                writeln!(out, "  {}:", label)?;
                for item in items {
                    writeln!(out, "    • {}", item)?;
                }
            }

            // An empty label marks an unlabeled bullet
            DisplayDirective::TextLine { label, value } if label.is_empty() => {
                writeln!(out, "  • {}", value)?;
            }

            DisplayDirective::TextLine { label, value } => {
                writeln!(out, "  {}: {}", label, value)?;
            }

            DisplayDirective::EmptyLine { label } => {
                if enable_color {
                    writeln!(out, "  {}: {}", label, "Not specified".bright_black())?;
                } else {
                    writeln!(out, "  {}: Not specified", label)?;
                }
            }
        }
    }

    Ok(())
}

/// One-line attribution shown above the widgets
pub fn write_model_line<W: Write>(
    out: &mut W,
    model: &str,
    provider: &str,
    enable_color: bool,
) -> io::Result<()> {
    let line = format!("Model: {} ({})", model, provider);
    if enable_color {
        writeln!(out, "{}", line.bright_black())
    } else {
        writeln!(out, "{}", line)
    }
}

/// Raw JSON block appended after the widgets on request
pub fn write_raw_block<W: Write>(out: &mut W, json: &str, enable_color: bool) -> io::Result<()> {
    writeln!(out)?;
    if enable_color {
        writeln!(out, "{}", "Raw JSON:".bright_black())?;
    } else {
        writeln!(out, "Raw JSON:")?;
    }
    writeln!(out, "{}", json)
}

/// Recent history, most recent first
pub fn write_history<W: Write>(
    out: &mut W,
    entries: &[&HistoryEntry],
    enable_color: bool,
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No history yet")?;
        return Ok(());
    }

    for entry in entries {
        let header = format!(
            "{} [{}] {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.model,
            truncate(&entry.request, 60)
        );
        writeln!(out)?;
        if enable_color {
            writeln!(out, "{}", header.cyan())?;
        } else {
            writeln!(out, "{}", header)?;
        }

        let json = serde_json::to_string_pretty(&entry.response)
            .unwrap_or_else(|_| "<unprintable>".to_string());
        for line in json.lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use structa_types::Number;

    fn painted(directives: &[DisplayDirective]) -> String {
        let mut out = Vec::new();
        write_directives(&mut out, directives, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_counted_header_and_bullets() {
        let output = painted(&[
            DisplayDirective::SectionHeader {
                label: "Steps".to_string(),
                item_count: Some(2),
            },
            DisplayDirective::TextLine {
                label: String::new(),
                value: "dig".to_string(),
            },
            DisplayDirective::TextLine {
                label: String::new(),
                value: "plant".to_string(),
            },
        ]);

        assert_eq!(output, "\nSteps (2 items)\n  • dig\n  • plant\n");
    }

    #[test]
    fn test_metric_and_empty_lines() {
        let output = painted(&[
            DisplayDirective::MetricLine {
                label: "Duration".to_string(),
                value: Number::Integer(5),
            },
            DisplayDirective::EmptyLine {
                label: "Owner".to_string(),
            },
        ]);

        assert_eq!(output, "  Duration: 5\n  Owner: Not specified\n");
    }

    #[test]
    fn test_list_line_layout() {
        let output = painted(&[DisplayDirective::ListLine {
            label: "Channels".to_string(),
            items: vec!["email".to_string(), "social".to_string()],
        }]);

        assert_eq!(output, "  Channels:\n    • email\n    • social\n");
    }
}
