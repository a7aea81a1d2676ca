//! Terminal display utilities for the kbgrep CLI.
//!
//! Search output itself is plain text produced by the pure formatter;
//! the only styling applied here is dimming the block separator when
//! stdout is an interactive terminal. Respects `NO_COLOR` and non-TTY
//! detection for pipelines, so piped output is byte-for-byte stable.

/// Separator printed between per-domain result blocks.
pub const SEPARATOR: &str = "---";

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// The block separator, dimmed on interactive terminals.
pub fn separator() -> String {
    styled(&[colors::DIM], SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_plain_when_no_color() {
        std::env::set_var("NO_COLOR", "1");
        assert_eq!(styled(&[colors::DIM], "---"), "---");
    }

    #[test]
    fn test_separator_plain_when_no_color() {
        std::env::set_var("NO_COLOR", "1");
        assert_eq!(separator(), SEPARATOR);
    }
}
