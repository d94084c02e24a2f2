/// Poll types clients may create. Currently a single chart style.
pub const ALLOWED_POLL_TYPES: &[&str] = &["bar"];

/// Returns the trimmed value when the field was provided and non-empty.
pub fn require(field: Option<&str>) -> Option<&str> {
    match field.map(str::trim) {
        Some(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

pub fn is_allowed_poll_type(poll_type: &str) -> bool {
    ALLOWED_POLL_TYPES.contains(&poll_type)
}

/// Splits a comma-separated answer string into trimmed labels.
pub fn split_answers(raw: &str) -> Vec<String> {
    raw.split(',').map(|ans| ans.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_blank() {
        assert_eq!(require(None), None);
        assert_eq!(require(Some("")), None);
        assert_eq!(require(Some("   ")), None);
        assert_eq!(require(Some("  bar ")), Some("bar"));
    }

    #[test]
    fn only_bar_polls_are_allowed() {
        assert!(is_allowed_poll_type("bar"));
        assert!(!is_allowed_poll_type("pie"));
        assert!(!is_allowed_poll_type(""));
    }

    #[test]
    fn answers_are_split_and_trimmed() {
        assert_eq!(
            split_answers("A, B ,C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn single_answer_stays_single() {
        assert_eq!(split_answers("Only option"), vec!["Only option".to_string()]);
    }
}
