//! Keyword scorer over tabular data sources.
//!
//! Scoring is deliberately simple: a row earns one point for each
//! distinct query word found anywhere in its concatenated field values.
//! Matching is substring containment on the row side ("instance" matches
//! inside "instances"), set membership on the query side (repeating a
//! word in the query never double-counts).
//!
//! Ranking is a stable descending sort on score, so rows with equal
//! scores keep their original file order. That makes output reproducible
//! across runs without an explicit tie-breaker.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::types::Row;
use crate::utils::normalize;

/// A row paired with its score, transient during ranking.
struct ScoredRow {
    score: usize,
    row: Row,
}

/// Split a query into its distinct lowercased words.
fn query_tokens(query: &str) -> HashSet<String> {
    normalize(query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Count how many distinct query tokens appear in the row's text.
fn score_row(tokens: &HashSet<String>, row: &Row) -> usize {
    let searchable = row.searchable_text();
    tokens
        .iter()
        .filter(|token| searchable.contains(token.as_str()))
        .count()
}

/// Search a CSV stream and return the top-scoring rows.
///
/// The first record is treated as a header naming the fields. Records
/// that fail to parse (bad UTF-8, wrong column count) are skipped rather
/// than aborting the scan. Every returned row has score ≥ 1; an empty
/// query or a `limit` of zero yields an empty result.
pub fn search_reader<R: io::Read>(query: &str, reader: R, limit: usize) -> Vec<Row> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut csv_reader = csv::Reader::from_reader(reader);
    let header: Vec<String> = match csv_reader.headers() {
        Ok(headers) => headers.iter().map(ToString::to_string).collect(),
        Err(_) => return Vec::new(),
    };

    let mut scored: Vec<ScoredRow> = Vec::new();
    for record in csv_reader.records() {
        // Malformed records are skipped, not fatal.
        let Ok(record) = record else { continue };
        let values: Vec<String> = record.iter().map(ToString::to_string).collect();
        let row = Row::from_header(&header, &values);
        let score = score_row(&tokens, &row);
        if score > 0 {
            scored.push(ScoredRow { score, row });
        }
    }

    // Stable sort: ties keep original file order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored.into_iter().map(|s| s.row).collect()
}

/// Search a domain's backing file and return the top-scoring rows.
///
/// Missing-file policy: a file that does not exist or cannot be opened
/// yields an empty result, silently. A domain whose data file has not
/// been installed simply contributes nothing to the search; it is not an
/// error and nothing is logged.
pub fn search_file(query: &str, path: &Path, limit: usize) -> Vec<Row> {
    match File::open(path) {
        Ok(file) => search_reader(query, file, limit),
        Err(_) => Vec::new(),
    }
}
