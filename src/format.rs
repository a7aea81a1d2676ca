//! Result formatter.
//!
//! Renders ranked rows as a markdown-flavored text block, kept dense for
//! token-constrained consumers: blank fields are omitted entirely rather
//! than printed as empty lines.

use crate::types::{Domain, Row};

/// Format ranked rows for one domain.
///
/// With no results, returns a single line naming the domain. Otherwise
/// produces a domain heading, then one `### Result N` block per row with
/// a `**field**: value` line for each non-blank field, blocks separated
/// by a blank line. Pure function: no I/O, deterministic for a given
/// input.
pub fn format_results(results: &[Row], domain: Domain) -> String {
    if results.is_empty() {
        return format!("No results found in {}", domain.label());
    }

    let mut output = vec![format!("## Search Results from {}\n", domain.title())];

    for (i, row) in results.iter().enumerate() {
        output.push(format!("### Result {}", i + 1));
        for (key, value) in row.fields() {
            if !value.trim().is_empty() {
                output.push(format!("**{}**: {}", key, value));
            }
        }
        output.push(String::new());
    }

    output.join("\n")
}
