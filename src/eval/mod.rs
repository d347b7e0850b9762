//! Rank-based link-prediction evaluation
//!
//! Standard KGE evaluation protocol: for each test triple (h, r, t), score
//! every entity as a candidate tail for (h, r, ?) and as a candidate head
//! for (?, r, t), and record the rank of the true entity (raw setting,
//! pessimistic ties). The metric declares its own direction so selection
//! logic never has to guess whether a bigger number is an improvement.

mod metric;
mod ranking;

pub use metric::Metric;
pub use ranking::RankEvaluator;

use crate::data::EncodedTriple;
use crate::error::Result;
use crate::model::KgeModel;

/// A scored evaluation of one trained model.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Scalar score under the evaluator's declared metric.
    pub score: f64,
    /// Per-prediction ranks the score was computed from.
    pub ranks: Vec<usize>,
}

/// Scores a trained model on held-out triples under a declared metric.
pub trait Evaluator {
    /// The metric this evaluator reports, including its direction.
    fn metric(&self) -> Metric;

    /// Evaluate `model` on encoded test triples.
    fn evaluate(&self, test: &[EncodedTriple], model: &dyn KgeModel) -> Result<Evaluation>;
}
