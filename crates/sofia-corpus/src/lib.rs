//! # sofia-corpus
//!
//! Loads the FAQ knowledge base into an immutable [`Corpus`].
//!
//! Two source formats are understood:
//! - **CSV** with a header row. The question and answer columns are located by
//!   header name; any other columns are ignored.
//! - **JSONL** (`.jsonl`), one object per line carrying the same two keys.
//!
//! Row order defines corpus order. A header-only file yields an empty corpus,
//! which is valid: retrieval simply finds nothing. Loading has no side
//! effects, so callers load once at startup and share the result.

mod error;

pub use error::CorpusError;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde_jsonlines::JsonLinesReader;
use sofia_core::{Corpus, CorpusEntry};

/// Corpus file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Csv,
    JsonLines,
}

impl CorpusFormat {
    /// Pick the format from the file extension. Anything but `.jsonl` is CSV.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") => Self::JsonLines,
            _ => Self::Csv,
        }
    }
}

/// Loads a corpus from a file, locating the question and answer columns by name.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    path: PathBuf,
    question_column: String,
    answer_column: String,
}

impl CorpusLoader {
    /// Loader for `path` using the default `user` / `assistant` columns.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            question_column: String::from("user"),
            answer_column: String::from("assistant"),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.question_column = question.into();
        self.answer_column = answer.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a [`Corpus`].
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::NotFound`] if the file is missing, and the other
    /// [`CorpusError`] variants if it is unreadable, malformed, or lacks a
    /// required column.
    pub fn load(&self) -> Result<Corpus, CorpusError> {
        let file = File::open(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CorpusError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                CorpusError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let corpus = match CorpusFormat::from_path(&self.path) {
            CorpusFormat::Csv => self.read_csv(file)?,
            CorpusFormat::JsonLines => self.read_jsonl(BufReader::new(file))?,
        };

        tracing::info!(
            path = %self.path.display(),
            entries = corpus.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Parse CSV from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Csv`] on malformed input and
    /// [`CorpusError::MissingColumn`] if a header is absent.
    pub fn read_csv<R: Read>(&self, reader: R) -> Result<Corpus, CorpusError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let question_idx = column_index(&headers, &self.question_column)?;
        let answer_idx = column_index(&headers, &self.answer_column)?;

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            entries.push(CorpusEntry::new(
                record.get(question_idx).unwrap_or_default(),
                record.get(answer_idx).unwrap_or_default(),
            ));
        }
        Ok(Corpus::new(entries))
    }

    /// Parse JSONL from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Json`] for a line that is not a JSON object and
    /// [`CorpusError::MissingColumn`] for an object without a required key.
    pub fn read_jsonl<R: io::BufRead>(&self, reader: R) -> Result<Corpus, CorpusError> {
        let mut entries = Vec::new();
        for (i, row) in JsonLinesReader::new(reader)
            .read_all::<serde_json::Value>()
            .enumerate()
        {
            let line = i + 1;
            let row = row.map_err(|e| CorpusError::Json {
                line,
                reason: e.to_string(),
            })?;
            let serde_json::Value::Object(object) = row else {
                return Err(CorpusError::Json {
                    line,
                    reason: String::from("expected a JSON object"),
                });
            };
            entries.push(CorpusEntry::new(
                field_text(&object, &self.question_column)?,
                field_text(&object, &self.answer_column)?,
            ));
        }
        Ok(Corpus::new(entries))
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, CorpusError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| CorpusError::MissingColumn {
            column: column.to_string(),
        })
}

fn field_text(
    object: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<String, CorpusError> {
    match object.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Null) | None => Err(CorpusError::MissingColumn {
            column: key.to_string(),
        }),
        Some(other) => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn loader() -> CorpusLoader {
        CorpusLoader::new("faq.csv")
    }

    #[test]
    fn csv_preserves_row_order_and_ignores_extra_columns() {
        let data = "id,user,assistant,notes\n\
                    1,O que é a escola?,Uma escola espiritual.,x\n\
                    2,\"Onde fica, afinal?\",Em vários países.,y\n";
        let corpus = loader().read_csv(data.as_bytes()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].question, "O que é a escola?");
        assert_eq!(corpus.entries()[1].question, "Onde fica, afinal?");
        assert_eq!(corpus.entries()[1].answer, "Em vários países.");
    }

    #[test]
    fn csv_header_only_is_empty_corpus() {
        let corpus = loader().read_csv("user,assistant\n".as_bytes()).unwrap();
        assert!(corpus.is_empty());
    }

    #[rstest]
    #[case("question,assistant\nq,a\n", "user")]
    #[case("user,answer\nq,a\n", "assistant")]
    #[case("", "user")]
    fn csv_missing_column(#[case] data: &str, #[case] expected: &str) {
        let err = loader().read_csv(data.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CorpusError::MissingColumn { ref column } if column == expected),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn csv_ragged_row_is_malformed() {
        let err = loader()
            .read_csv("user,assistant\nq,a,extra\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, CorpusError::Csv(_)));
    }

    #[test]
    fn custom_columns() {
        let corpus = CorpusLoader::new("faq.csv")
            .with_columns("pergunta", "resposta")
            .read_csv("pergunta,resposta\nq,a\n".as_bytes())
            .unwrap();
        assert_eq!(corpus.entries()[0], CorpusEntry::new("q", "a"));
    }

    #[test]
    fn jsonl_rows() {
        let data = "{\"user\": \"q1\", \"assistant\": \"a1\"}\n{\"user\": \"q2\", \"assistant\": 42}\n";
        let corpus = loader().read_jsonl(data.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[1].answer, "42");
    }

    #[test]
    fn jsonl_missing_key() {
        let err = loader()
            .read_jsonl("{\"user\": \"q1\"}\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, CorpusError::MissingColumn { ref column } if column == "assistant"));
    }

    #[test]
    fn jsonl_non_object_line() {
        let err = loader().read_jsonl("[1, 2]\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CorpusError::Json { line: 1, .. }));
    }

    #[rstest]
    #[case("faq.csv", CorpusFormat::Csv)]
    #[case("faq.JSONL", CorpusFormat::JsonLines)]
    #[case("faq", CorpusFormat::Csv)]
    fn format_detection(#[case] path: &str, #[case] expected: CorpusFormat) {
        assert_eq!(CorpusFormat::from_path(Path::new(path)), expected);
    }
}
