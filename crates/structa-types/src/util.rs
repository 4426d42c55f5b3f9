/// Turn a snake_case JSON key into a display label.
///
/// Underscores become spaces and each word is title-cased with ASCII
/// rules (uppercase after a non-letter, lowercase otherwise), so the
/// result is deterministic and locale-independent. Non-ASCII characters
/// pass through untouched.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_was_letter = false;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_ascii_alphabetic() {
            if prev_was_letter {
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch.to_ascii_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(ch);
            prev_was_letter = false;
        }
    }

    out
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect::<String>() + "..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_snake_case() {
        assert_eq!(humanize_key("expected_outcomes"), "Expected Outcomes");
        assert_eq!(humanize_key("key_findings"), "Key Findings");
    }

    #[test]
    fn test_humanize_single_word() {
        assert_eq!(humanize_key("plan"), "Plan");
    }

    #[test]
    fn test_humanize_lowercases_interior_capitals() {
        assert_eq!(humanize_key("API_key"), "Api Key");
    }

    #[test]
    fn test_humanize_uppercase_after_digit() {
        assert_eq!(humanize_key("phase2plan"), "Phase2Plan");
    }

    #[test]
    fn test_humanize_empty() {
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }
}
