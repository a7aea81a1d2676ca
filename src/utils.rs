//! Utility functions for string processing.

/// Normalize a string for search: lowercase and collapse whitespace.
///
/// Both the query and row text pass through lowercasing, so matching is
/// case-insensitive on both sides. Whitespace collapsing makes the token
/// split independent of how the query was quoted on the command line.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hello World"), "hello world");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  error \t handling \n"), "error handling");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
