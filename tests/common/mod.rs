//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write a CSV file into `dir` and return its path.
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv fixture");
    path
}

/// A temporary data directory populated with small fixtures for all
/// three domains.
pub fn fixture_data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp data dir");
    write_csv(
        dir.path(),
        "patterns.csv",
        "name,description\n\
         Singleton,Ensures one instance\n\
         Factory,Creates objects flexibly\n",
    );
    write_csv(
        dir.path(),
        "best-practices.csv",
        "title,advice,rationale\n\
         Small functions,Keep functions short,Easier to test\n\
         Error context,Attach context to errors,Faster debugging\n",
    );
    write_csv(
        dir.path(),
        "code-snippets.csv",
        "name,language,code\n\
         Retry loop,rust,loop with backoff\n",
    );
    dir
}
