use structa_types::{humanize_key, DisplayDirective, StructuredValue};

use crate::error::{Error, Result};

/// Convert a structured value into an ordered list of display directives.
///
/// Pure function: the input is never mutated and the same value always
/// yields the same directive sequence, in mapping key order. The top
/// level must be a mapping; anything else is [`Error::InvalidShape`] and
/// no directives are produced.
///
/// Traversal expands one level of nesting. Sub-mappings become a section
/// of key/value lines, sequences become a counted section of items, and
/// anything deeper is flattened to its compact text form rather than
/// expanded further.
pub fn render(value: &StructuredValue) -> Result<Vec<DisplayDirective>> {
    let StructuredValue::Mapping(entries) = value else {
        return Err(Error::InvalidShape(value.kind().to_string()));
    };

    let mut directives = Vec::new();

    for (key, value) in entries {
        match value {
            StructuredValue::Mapping(sub) => {
                directives.push(DisplayDirective::SectionHeader {
                    label: humanize_key(key),
                    item_count: None,
                });
                for (sub_key, sub_value) in sub {
                    directives.push(item_line(sub_key, sub_value));
                }
            }

            StructuredValue::Sequence(items) => {
                directives.push(DisplayDirective::SectionHeader {
                    label: humanize_key(key),
                    item_count: Some(items.len()),
                });
                for (index, item) in items.iter().enumerate() {
                    match item {
                        StructuredValue::Mapping(sub) => {
                            directives.push(DisplayDirective::SectionHeader {
                                label: format!("Item {}", index + 1),
                                item_count: None,
                            });
                            for (sub_key, sub_value) in sub {
                                directives.push(item_line(sub_key, sub_value));
                            }
                        }
                        scalar => directives.push(DisplayDirective::TextLine {
                            label: String::new(),
                            value: scalar.to_text(),
                        }),
                    }
                }
            }

            scalar => directives.push(item_line(key, scalar)),
        }
    }

    Ok(directives)
}

/// One key/value line. Values nested deeper than this level are not
/// expanded; they fall through to their compact text form.
fn item_line(key: &str, value: &StructuredValue) -> DisplayDirective {
    let label = humanize_key(key);

    match value {
        StructuredValue::Bool(flag) => DisplayDirective::TextLine {
            label,
            value: if *flag { "Yes" } else { "No" }.to_string(),
        },

        StructuredValue::Number(number) => DisplayDirective::MetricLine {
            label,
            value: *number,
        },

        StructuredValue::Sequence(items) => DisplayDirective::ListLine {
            label,
            items: items.iter().map(StructuredValue::to_text).collect(),
        },

        StructuredValue::Absent => DisplayDirective::EmptyLine { label },
        StructuredValue::Text(text) if text.is_empty() => DisplayDirective::EmptyLine { label },

        StructuredValue::Text(text) => DisplayDirective::TextLine {
            label,
            value: text.clone(),
        },

        nested => DisplayDirective::TextLine {
            label,
            value: nested.to_text(),
        },
    }
}
