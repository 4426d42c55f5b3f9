use std::fmt;

/// Hint about the shape of answer the user is after, mirroring the
/// quick-action choices in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateHint {
    /// Let the model pick a structure that fits the request
    Auto,
    Plan,
    Analysis,
    Brainstorm,
    Schedule,
}

impl TemplateHint {
    fn instruction(&self) -> Option<&'static str> {
        match self {
            TemplateHint::Auto => None,
            TemplateHint::Plan => {
                Some("Treat this request as a plan: include timeline, steps, resources and expected_outcomes.")
            }
            TemplateHint::Analysis => {
                Some("Treat this request as an analysis: include summary, key_findings, recommendations and risks.")
            }
            TemplateHint::Brainstorm => {
                Some("Treat this request as brainstorming: include categories, descriptions, feasibility and steps.")
            }
            TemplateHint::Schedule => {
                Some("Treat this request as a schedule: include time_blocks, activities, goals and adjustments.")
            }
        }
    }
}

impl fmt::Display for TemplateHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateHint::Auto => "auto",
            TemplateHint::Plan => "plan",
            TemplateHint::Analysis => "analysis",
            TemplateHint::Brainstorm => "brainstorm",
            TemplateHint::Schedule => "schedule",
        };
        write!(f, "{}", name)
    }
}

/// Wrap a free-text request in the structuring instructions.
///
/// The instructions ask for pure JSON; the extraction heuristic exists
/// for the times the model ignores them anyway.
pub fn build_prompt(request: &str, hint: TemplateHint) -> String {
    let mut prompt = String::from(
        "Analyze this request and generate a comprehensive, structured response in valid JSON format.\n\n",
    );

    prompt.push_str("USER REQUEST: ");
    prompt.push_str(request);
    prompt.push_str("\n\n");

    prompt.push_str(
        "REQUIREMENTS:\n\
         1. Return ONLY valid JSON, no additional text\n\
         2. Structure should match the request type\n\
         3. Include all relevant details in organized format\n\
         4. Use proper JSON syntax\n\
         5. Make it comprehensive and actionable\n\n",
    );

    if let Some(instruction) = hint.instruction() {
        prompt.push_str(instruction);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(
            "STRUCTURE GUIDELINES:\n\
             - For plans: include timeline, steps, resources, expected_outcomes\n\
             - For analysis: include summary, key_findings, recommendations, risks\n\
             - For ideas: include categories, descriptions, feasibility, steps\n\
             - For schedules: include time_blocks, activities, goals, adjustments\n\n",
        );
    }

    prompt.push_str("Response must be pure JSON.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_the_request() {
        let prompt = build_prompt("Plan a garden party", TemplateHint::Auto);
        assert!(prompt.contains("USER REQUEST: Plan a garden party"));
        assert!(prompt.contains("ONLY valid JSON"));
    }

    #[test]
    fn test_auto_includes_structure_guidelines() {
        let prompt = build_prompt("anything", TemplateHint::Auto);
        assert!(prompt.contains("STRUCTURE GUIDELINES"));
    }

    #[test]
    fn test_hint_replaces_guidelines() {
        let prompt = build_prompt("anything", TemplateHint::Plan);
        assert!(prompt.contains("Treat this request as a plan"));
        assert!(!prompt.contains("STRUCTURE GUIDELINES"));
    }

    #[test]
    fn test_hint_names() {
        assert_eq!(TemplateHint::Brainstorm.to_string(), "brainstorm");
        assert_eq!(TemplateHint::Auto.to_string(), "auto");
    }
}
