//! Canned provider responses and value builders used across the
//! workspace tests.

use structa_types::{Number, StructuredValue};

/// A well-behaved response: pure JSON, nothing else
pub const CLEAN_JSON: &str = r#"{
  "plan": {
    "goal": "Launch the newsletter",
    "duration_weeks": 6
  },
  "steps": ["Draft outline", "Write issue one", "Set up mailing list"],
  "approved": true
}"#;

/// The common misbehavior: a JSON object wrapped in chatty prose
pub const PROSE_WRAPPED: &str = r#"Sure! Here is your JSON:
{"analysis": {"summary": "Traffic doubled", "confidence": 0.9}, "risks": ["seasonality"]}
Hope that helps."#;

/// A response fenced as a markdown code block
pub const FENCED: &str = "```json\n{\"idea\": \"community garden\", \"feasibility\": \"high\"}\n```";

/// A refusal with no structure to find
pub const NOT_JSON: &str = "I could not produce structured output for that request.";

/// Valid JSON whose top level is not an object
pub const TOP_LEVEL_ARRAY: &str = r#"["not", "a", "mapping"]"#;

/// Small plan tree used where tests need a ready-made mapping
pub fn marketing_plan() -> StructuredValue {
    StructuredValue::Mapping(vec![
        (
            "plan".to_string(),
            StructuredValue::Mapping(vec![
                (
                    "goal".to_string(),
                    StructuredValue::Text("Grow signups".to_string()),
                ),
                (
                    "duration_weeks".to_string(),
                    StructuredValue::Number(Number::Integer(4)),
                ),
            ]),
        ),
        (
            "channels".to_string(),
            StructuredValue::Sequence(vec![
                StructuredValue::Text("email".to_string()),
                StructuredValue::Text("social".to_string()),
            ]),
        ),
        ("budget_confirmed".to_string(), StructuredValue::Bool(false)),
    ])
}
