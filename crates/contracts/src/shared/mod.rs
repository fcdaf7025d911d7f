//! Helpers shared by several DTOs.

/// "First Last" from the trimmed name parts, falling back to `email` when
/// both are missing or blank.
pub fn person_label(first_name: Option<&str>, last_name: Option<&str>, email: &str) -> String {
    let name = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        email.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_label() {
        assert_eq!(
            person_label(Some("Anna"), Some("de Vries"), "anna@example.com"),
            "Anna de Vries"
        );
        assert_eq!(person_label(Some("Anna"), None, "anna@example.com"), "Anna");
        assert_eq!(person_label(None, Some(" Jansen "), "x@example.com"), "Jansen");
        assert_eq!(person_label(Some(" "), Some(""), "anna@example.com"), "anna@example.com");
        assert_eq!(person_label(None, None, "anna@example.com"), "anna@example.com");
    }
}
