//! Form field validation shared by admin modals.

/// Loose email check: one `@`, a non-empty local part, and a dotted domain
/// without empty labels or whitespace.
pub fn validate_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Trimmed value, or `None` when nothing but whitespace was entered.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jan@example.com"));
        assert!(validate_email("  jan.jansen+shop@mail.example.nl "));
        assert!(!validate_email(""));
        assert!(!validate_email("jan"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("jan@example"));
        assert!(!validate_email("jan@@example.com"));
        assert!(!validate_email("jan@example..com"));
        assert!(!validate_email("jan jansen@example.com"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Jan "), Some("Jan".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
