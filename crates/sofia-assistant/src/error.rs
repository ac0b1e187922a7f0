use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AskError {
    /// Blank questions are refused before anything runs.
    #[error("question is empty")]
    EmptyQuestion,
}
