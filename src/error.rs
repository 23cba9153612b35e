// src/error.rs
use thiserror::Error;

/// The error raised by the variadic `collect` entry points.
pub use collect_query::QueryError as CollectError;

/// Errors surfaced by the `collect` command line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Query failed: {0}")]
    Collect(#[from] CollectError),
}
