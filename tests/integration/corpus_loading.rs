//! Loading corpora from disk.

use std::fs;
use std::io::Write;

use super::common::VERSE;
use folio::{Corpus, CorpusError, Searcher};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(VERSE.as_bytes()).unwrap();

    let corpus = Corpus::load(file.path()).unwrap();
    assert_eq!(corpus.full_text(), VERSE);
    assert_eq!(corpus.word_count(), VERSE.split_whitespace().count());
}

#[test]
fn test_loaded_corpus_is_searchable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("completeworks.txt");
    fs::write(&path, VERSE).unwrap();

    let searcher = Searcher::new(Corpus::load(&path).unwrap());
    assert_eq!(searcher.search_exact(&["slings"]).len(), 1);
    assert_eq!(searcher.search_fuzzy(&["arrow"]).len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = Corpus::load(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"to be \xff\xfe or not").unwrap();

    let err = Corpus::load(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::InvalidUtf8 { .. }));
}

#[test]
fn test_empty_file_loads() {
    let file = NamedTempFile::new().unwrap();
    let corpus = Corpus::load(file.path()).unwrap();
    assert_eq!(corpus.word_count(), 0);

    let searcher = Searcher::new(corpus);
    assert!(searcher.search_exact(&["anything"]).is_empty());
    assert!(searcher.search_fuzzy(&["anything"]).is_empty());
}

#[test]
fn test_non_ascii_corpus() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("Ça va? Très bien, merci. ÇA VA!".as_bytes()).unwrap();

    let searcher = Searcher::new(Corpus::load(file.path()).unwrap());
    assert_eq!(searcher.search_exact(&["ça va"]).len(), 2);
}
