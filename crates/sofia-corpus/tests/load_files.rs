//! Loading corpora from real files on disk.

use std::io::Write;

use pretty_assertions::assert_eq;
use sofia_corpus::{CorpusError, CorpusLoader};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_csv_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "faq.csv",
        "user,assistant\nWhat is the school?,It is an educational organization.\n",
    );

    let corpus = CorpusLoader::new(&path).load().unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.entries()[0].question, "What is the school?");
}

#[test]
fn loads_jsonl_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "faq.jsonl",
        "{\"q\": \"one\", \"a\": \"1\"}\n{\"q\": \"two\", \"a\": \"2\"}\n",
    );

    let corpus = CorpusLoader::new(&path).with_columns("q", "a").load().unwrap();
    let questions = corpus.questions();
    assert_eq!(questions, vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = CorpusLoader::new(dir.path().join("absent.csv"))
        .load()
        .unwrap_err();
    assert!(matches!(err, CorpusError::NotFound { .. }));
}

#[test]
fn loading_twice_yields_same_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "faq.csv", "user,assistant\nq1,a1\nq2,a2\n");
    let loader = CorpusLoader::new(&path);

    let first = loader.load().unwrap();
    let second = loader.load().unwrap();
    assert_eq!(first.entries(), second.entries());
    assert_eq!(first.fingerprint(), second.fingerprint());
}
