//! Labeled triples and corpus parsing

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A labeled (subject, predicate, object) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub head: String,
    pub relation: String,
    pub tail: String,
}

impl Triple {
    pub fn new(
        head: impl Into<String>,
        relation: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            head: head.into(),
            relation: relation.into(),
            tail: tail.into(),
        }
    }
}

/// Load a whitespace-delimited triple corpus.
///
/// Each non-empty line must hold exactly three whitespace-separated fields.
/// Lines starting with `comment_prefix` are skipped, as are blank lines.
/// A line with any other field count is a malformed-triple error carrying
/// the 1-based line number.
pub fn load_corpus(path: &Path, comment_prefix: &str) -> Result<Vec<Triple>> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| Error::CorpusIo {
        path: display.clone(),
        source,
    })?;

    let mut triples = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(comment_prefix) {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(head), Some(relation), Some(tail), None) => {
                triples.push(Triple::new(head, relation, tail));
            }
            _ => {
                return Err(Error::MalformedTriple {
                    path: display,
                    line: idx + 1,
                    content: trimmed.to_string(),
                })
            }
        }
    }

    if triples.is_empty() {
        return Err(Error::EmptyCorpus { path: display });
    }

    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_corpus_basic() {
        let file = write_corpus("einstein won nobel_prize\nparis capital_of france\n");
        let triples = load_corpus(file.path(), "@Comment@").unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(
            triples[0],
            Triple::new("einstein", "won", "nobel_prize")
        );
    }

    #[test]
    fn test_load_corpus_skips_comments_and_blanks() {
        let file = write_corpus(
            "@Comment@ Subject Predicate Object\n\nparis capital_of france\n",
        );
        let triples = load_corpus(file.path(), "@Comment@").unwrap();
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn test_load_corpus_tabs_and_spaces() {
        let file = write_corpus("a\tr\tb\nc  r2   d\n");
        let triples = load_corpus(file.path(), "#").unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1], Triple::new("c", "r2", "d"));
    }

    #[test]
    fn test_load_corpus_malformed_line() {
        let file = write_corpus("a r b\nbad line with four fields\n");
        let err = load_corpus(file.path(), "#").unwrap_err();
        match err {
            Error::MalformedTriple { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedTriple, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corpus_two_fields_is_malformed() {
        let file = write_corpus("a r\n");
        assert!(matches!(
            load_corpus(file.path(), "#"),
            Err(Error::MalformedTriple { .. })
        ));
    }

    #[test]
    fn test_load_corpus_empty_is_error() {
        let file = write_corpus("# nothing but comments\n");
        assert!(matches!(
            load_corpus(file.path(), "#"),
            Err(Error::EmptyCorpus { .. })
        ));
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let err = load_corpus(Path::new("/nonexistent/kg.txt"), "#").unwrap_err();
        assert!(matches!(err, Error::CorpusIo { .. }));
    }
}
