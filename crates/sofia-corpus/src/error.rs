//! Corpus loading errors.
//!
//! Every variant means the knowledge base is unavailable. Nothing can be
//! answered without it, so callers treat these as fatal.

use std::path::PathBuf;

/// Errors that can occur while loading the FAQ corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The corpus file does not exist.
    #[error("corpus file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The corpus file exists but could not be read.
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is malformed (bad quoting, ragged rows, invalid UTF-8).
    #[error("malformed CSV corpus: {0}")]
    Csv(#[from] csv::Error),

    /// A JSONL line is not a JSON object.
    #[error("malformed JSONL corpus at line {line}: {reason}")]
    Json { line: usize, reason: String },

    /// A required column (CSV header or JSONL key) is absent.
    #[error("corpus is missing required column '{column}'")]
    MissingColumn { column: String },
}
