//! Log truncation
//!
//! Response bodies are logged at debug level; an unexpected HTML error page
//! should not flood the log file.

/// Maximum number of characters kept in a logged body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncates `s` to [`TRUNCATE_LIMIT`] characters, noting the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"cep":"01001-000"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn accented_text_cut_on_char_boundary() {
        let s = "Praça da Sé ".repeat(40);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
