use serde::Serialize;

use crate::value::Number;

/// One unit of UI output, decoupled from any rendering technology.
///
/// Directives arrive in traversal order; a `SectionHeader` groups every
/// following line until the next header. Painters only need to honor the
/// order, whether they draw to a terminal, a file or a widget tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum DisplayDirective {
    /// Section title; `item_count` is set for sections backed by a sequence
    SectionHeader {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        item_count: Option<usize>,
    },

    /// Numeric key/value line, rendered with metric emphasis
    MetricLine { label: String, value: Number },

    /// Labeled list of short items
    ListLine { label: String, items: Vec<String> },

    /// Plain key/value line; an empty label marks an unlabeled bullet
    TextLine { label: String, value: String },

    /// A field that was present but empty ("Not specified")
    EmptyLine { label: String },
}

impl DisplayDirective {
    pub fn label(&self) -> &str {
        match self {
            DisplayDirective::SectionHeader { label, .. }
            | DisplayDirective::MetricLine { label, .. }
            | DisplayDirective::ListLine { label, .. }
            | DisplayDirective::TextLine { label, .. }
            | DisplayDirective::EmptyLine { label } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_tagged() {
        let directive = DisplayDirective::SectionHeader {
            label: "Plan".to_string(),
            item_count: Some(2),
        };
        let json = serde_json::to_value(&directive).unwrap();

        assert_eq!(json["type"], "section_header");
        assert_eq!(json["label"], "Plan");
        assert_eq!(json["item_count"], 2);
    }

    #[test]
    fn test_item_count_omitted_when_absent() {
        let directive = DisplayDirective::SectionHeader {
            label: "Plan".to_string(),
            item_count: None,
        };
        let json = serde_json::to_value(&directive).unwrap();
        assert!(json.get("item_count").is_none());
    }

    #[test]
    fn test_label_accessor() {
        let directive = DisplayDirective::EmptyLine {
            label: "Name".to_string(),
        };
        assert_eq!(directive.label(), "Name");
    }
}
