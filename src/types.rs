//! Core types: rows, domains, and search configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Default per-domain result cap.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One record from a tabular knowledge-base file.
///
/// A row is an ordered mapping from field name to field value, built by
/// zipping a CSV file's header with one data record. Field order follows
/// the header and is preserved for display. The field set is whatever the
/// header declares; no field is privileged by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Build a row by pairing header names with record values.
    pub fn from_header(header: &[String], values: &[String]) -> Self {
        let fields = header
            .iter()
            .zip(values.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Row { fields }
    }

    /// Iterate fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Single lowercased haystack for substring scoring: every field value
    /// in header order, joined by one space.
    pub fn searchable_text(&self) -> String {
        let joined = self
            .fields
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.to_lowercase()
    }
}

/// A searchable knowledge-base domain.
///
/// Each domain maps to exactly one backing CSV file inside the data
/// directory. The mapping is static; adding a domain means adding a
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    Patterns,
    Practices,
    Snippets,
}

impl Domain {
    /// All domains, in the order they are searched when none is selected.
    pub const ALL: [Domain; 3] = [Domain::Patterns, Domain::Practices, Domain::Snippets];

    /// Lowercase identifier, as accepted on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Patterns => "patterns",
            Domain::Practices => "practices",
            Domain::Snippets => "snippets",
        }
    }

    /// Title-cased name used in result headings.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Patterns => "Patterns",
            Domain::Practices => "Practices",
            Domain::Snippets => "Snippets",
        }
    }

    /// Backing file name, resolved against the configured data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Domain::Patterns => "patterns.csv",
            Domain::Practices => "best-practices.csv",
            Domain::Snippets => "code-snippets.csv",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Search configuration, passed explicitly into the orchestration layer.
///
/// Holding the data directory and result cap in a value (rather than
/// module-level state) keeps every search call deterministic and lets
/// tests inject their own directory.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub data_dir: PathBuf,
    pub max_results: usize,
}

impl SearchConfig {
    pub fn new(data_dir: PathBuf, max_results: usize) -> Self {
        SearchConfig {
            data_dir,
            max_results,
        }
    }

    /// Absolute path of a domain's backing file.
    pub fn path_for(&self, domain: Domain) -> PathBuf {
        self.data_dir.join(domain.file_name())
    }

    /// Default data directory: `data/` next to the executable.
    ///
    /// Falls back to a relative `data/` when the executable path cannot
    /// be determined (some containerized environments).
    pub fn default_data_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map_or_else(|| PathBuf::from("data"), |dir| dir.join("data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_row_preserves_field_order() {
        let row = Row::from_header(
            &strings(&["name", "description", "example"]),
            &strings(&["Singleton", "One instance", "see docs"]),
        );
        let keys: Vec<&str> = row.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "description", "example"]);
    }

    #[test]
    fn test_row_searchable_text_is_lowercased_and_joined() {
        let row = Row::from_header(
            &strings(&["name", "description"]),
            &strings(&["Singleton", "Ensures ONE instance"]),
        );
        assert_eq!(row.searchable_text(), "singleton ensures one instance");
    }

    #[test]
    fn test_row_get() {
        let row = Row::from_header(&strings(&["a", "b"]), &strings(&["1", "2"]));
        assert_eq!(row.get("b"), Some("2"));
        assert_eq!(row.get("c"), None);
    }

    #[test]
    fn test_domain_file_names() {
        assert_eq!(Domain::Patterns.file_name(), "patterns.csv");
        assert_eq!(Domain::Practices.file_name(), "best-practices.csv");
        assert_eq!(Domain::Snippets.file_name(), "code-snippets.csv");
    }

    #[test]
    fn test_config_path_for() {
        let config = SearchConfig::new(PathBuf::from("/opt/kb/data"), 5);
        assert_eq!(
            config.path_for(Domain::Snippets),
            PathBuf::from("/opt/kb/data/code-snippets.csv")
        );
    }
}
