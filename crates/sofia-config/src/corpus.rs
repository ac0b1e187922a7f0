//! Knowledge base source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("faq_novo_homem_completo_2.csv")
}

fn default_question_column() -> String {
    String::from("user")
}

fn default_answer_column() -> String {
    String::from("assistant")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// CSV file, or JSONL when the extension is `.jsonl`.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Header (CSV) or key (JSONL) holding the question text.
    #[serde(default = "default_question_column")]
    pub question_column: String,

    /// Header (CSV) or key (JSONL) holding the answer text.
    #[serde(default = "default_answer_column")]
    pub answer_column: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            question_column: default_question_column(),
            answer_column: default_answer_column(),
        }
    }
}
