use regex::Regex;
use std::sync::LazyLock;
use structa_types::StructuredValue;

use crate::error::{Error, Result};

/// First brace-delimited span in free text. The nested alternative is
/// tried first so a `{...{...}...}` object wins over the bare `{...}`
/// match starting at the same brace; both are greedy and `(?s)` lets the
/// span run across newlines.
static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{[^{}]*\{.*\}[^{}]*\}|\{.*\}").unwrap());

/// Interpret raw model output as a structured value.
///
/// Strict parsing of the whole text is the fast path and is always
/// correct when the model obeyed its instructions. When it did not, the
/// first brace-delimited span is carved out and parsed strictly — this
/// recovers answers wrapped in prose. Only the first span is ever
/// attempted; if a response carries several independent JSON objects,
/// the later ones are ignored.
///
/// Failing both stages is a definitive [`Error::NotJson`] — there is no
/// partial or repaired result.
pub fn extract(text: &str) -> Result<StructuredValue> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        return Ok(StructuredValue::from(value));
    }

    let span = JSON_SPAN.find(text).ok_or(Error::NotJson)?;
    let value: serde_json::Value =
        serde_json::from_str(span.as_str()).map_err(|_| Error::NotJson)?;
    Ok(StructuredValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use structa_testing::fixtures;

    fn parse_strict(text: &str) -> StructuredValue {
        StructuredValue::from(serde_json::from_str::<serde_json::Value>(text).unwrap())
    }

    #[test]
    fn test_clean_json_round_trips() {
        let text = r#"{"plan": {"steps": ["a", "b"], "duration": 5}}"#;
        assert_eq!(extract(text).unwrap(), parse_strict(text));
    }

    #[test]
    fn test_prose_wrapped_json_recovered() {
        let json = r#"{"summary": "ok", "score": 3}"#;
        let wrapped = format!("Sure! {} Hope that helps.", json);
        assert_eq!(extract(&wrapped).unwrap(), parse_strict(json));
    }

    #[test]
    fn test_fenced_json_recovered() {
        let json = r#"{"idea": "garden"}"#;
        let fenced = format!("```json\n{}\n```", json);
        assert_eq!(extract(&fenced).unwrap(), parse_strict(json));
    }

    #[test]
    fn test_nested_object_with_leading_prose() {
        let text = fixtures::PROSE_WRAPPED;
        let value = extract(text).unwrap();
        assert!(value.is_mapping());
    }

    #[test]
    fn test_empty_input_is_not_json() {
        assert_eq!(extract(""), Err(Error::NotJson));
    }

    #[test]
    fn test_plain_prose_is_not_json() {
        assert_eq!(extract("not json at all"), Err(Error::NotJson));
        assert_eq!(extract(fixtures::NOT_JSON), Err(Error::NotJson));
    }

    #[test]
    fn test_braces_without_json_are_not_json() {
        assert_eq!(extract("set {x} to {y}"), Err(Error::NotJson));
    }

    #[test]
    fn test_top_level_array_parses_strictly() {
        // Strict parsing accepts any JSON value; shape policing belongs
        // to the renderer.
        let value = extract(r#"["a", "b"]"#).unwrap();
        assert!(matches!(value, StructuredValue::Sequence(_)));
    }

    #[test]
    fn test_only_first_span_is_attempted() {
        let text = r#"first: {"a": 1} second: {"b": 2}"#;
        // The greedy span runs from the first `{` to the last `}`, which
        // is not valid JSON, and no repair is attempted.
        assert_eq!(extract(text), Err(Error::NotJson));
    }

    #[test]
    fn test_extraction_preserves_structure() {
        let json = r#"{"outer": {"inner": [1, 2, 3]}}"#;
        let wrapped = format!("Response below.\n{}\nDone.", json);
        assert_eq!(extract(&wrapped).unwrap(), parse_strict(json));
    }
}
