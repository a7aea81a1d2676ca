//! Keyword search over CSV knowledge-base files.
//!
//! This crate backs the `kbgrep` CLI: it scans a small set of tabular
//! knowledge-base files (coding patterns, best practices, code snippets),
//! ranks rows by how many distinct query words they contain, and renders
//! the top matches as a compact text block suitable for both humans and
//! token-constrained AI consumers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│  search.rs   │────▶│  format.rs  │
//! │ (Row, Domain│     │ (search_file,│     │ (format_    │
//! │SearchConfig)│     │search_reader)│     │   results)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The scorer and formatter are pure with respect to their inputs; all
//! I/O decisions (which files, how many results, where to print) live in
//! the CLI layer.
//!
//! # Usage
//!
//! ```ignore
//! use kbgrep::{search_file, format_results, Domain};
//!
//! let rows = search_file("error handling", &path, 5);
//! println!("{}", format_results(&rows, Domain::Patterns));
//! ```

// Module declarations
mod format;
mod search;
mod types;
mod utils;

// Re-exports for public API
pub use format::format_results;
pub use search::{search_file, search_reader};
pub use types::{Domain, Row, SearchConfig, DEFAULT_MAX_RESULTS};
pub use utils::normalize;
