//! CLI definitions for the kbgrep command-line interface.
//!
//! One command: a positional query, an optional domain restriction, and
//! a per-domain result cap. Domain validation is handled by clap's
//! `ValueEnum` before any search runs.

pub mod display;

use std::path::PathBuf;

use clap::Parser;
use kbgrep::{Domain, DEFAULT_MAX_RESULTS};

#[derive(Parser)]
#[command(
    name = "kbgrep",
    about = "Keyword search over the development knowledge base",
    version
)]
pub struct Cli {
    /// Search query
    pub query: String,

    /// Specific domain to search (omitted: search all domains)
    #[arg(long, value_enum)]
    pub domain: Option<Domain>,

    /// Maximum number of results per domain
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Directory containing the knowledge-base CSV files
    /// (defaults to `data/` next to the executable)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
