#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_items(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Splits comma-separated editor input ("React, Rust,,Go") into trimmed,
/// non-empty entries.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_drops_blanks() {
        assert_eq!(parse_list(" React, Rust,, Go ,"), vec!["React", "Rust", "Go"]);
        assert!(parse_list("  ").is_empty());
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert_eq!(
            require_text("title", "   "),
            Err(ValidationError::MissingField("title"))
        );
        assert!(require_text("title", "A").is_ok());
    }

    #[test]
    fn test_require_items_rejects_blank_entries() {
        assert!(require_items("skills", &[" ".to_string()]).is_err());
        assert!(require_items("skills", &[]).is_err());
        assert!(require_items("skills", &["Rust".to_string()]).is_ok());
    }
}
