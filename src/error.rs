//! Error types for the search pipeline
//!
//! One crate-level taxonomy: configuration problems surface before any data
//! is touched, data problems surface before the first trial, trial problems
//! carry the iteration they occurred in, and selection problems mean no
//! trial survived to be picked.

use thiserror::Error;

/// Errors produced by corpus loading, trial execution, and search driving.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid search configuration (empty axis, zero budget,
    /// out-of-range split ratio, unparseable YAML).
    #[error("invalid search config: {0}")]
    Config(String),

    /// Corpus file could not be read.
    #[error("failed to read corpus {path}: {source}")]
    CorpusIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Corpus line did not parse as a (subject, predicate, object) triple.
    #[error("malformed triple at {path}:{line}: {content:?}")]
    MalformedTriple {
        path: String,
        line: usize,
        content: String,
    },

    /// Corpus parsed but contained no usable triples.
    #[error("corpus {path} contains no triples")]
    EmptyCorpus { path: String },

    /// A single trial failed during model construction, training, or
    /// evaluation. The driver records these as disqualifications.
    #[error("trial {iteration} failed: {source}")]
    Trial {
        iteration: usize,
        #[source]
        source: Box<Error>,
    },

    /// Training diverged or produced a non-finite loss.
    #[error("training diverged: {0}")]
    Divergence(String),

    /// A partition ended up empty after encoding, leaving nothing to train
    /// on or evaluate against.
    #[error("empty partition: {0}")]
    EmptyPartition(String),

    /// Evaluation could not produce a score.
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    /// No trial completed; every iteration was disqualified.
    #[error("no trial completed: {disqualified} of {budget} trials disqualified")]
    Selection { disqualified: usize, budget: usize },
}

impl Error {
    /// Wrap an error as a trial-level failure for the given iteration.
    pub(crate) fn in_trial(self, iteration: usize) -> Self {
        Error::Trial {
            iteration,
            source: Box::new(self),
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, Error>;
