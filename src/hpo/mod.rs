//! Hyperparameter search over KGE configurations
//!
//! The search engine draws candidate configurations from a discrete space,
//! runs one training-and-evaluation trial per iteration against a shared
//! train/test split, and keeps the best-scoring trained artifact.
//!
//! # Toyota Way: Genchi Genbutsu
//!
//! Every candidate is judged by actually training it; there is no proxy
//! scoring and no pruning shortcut. The iteration budget bounds the cost
//! and the records make every trial inspectable afterwards.
//!
//! # Example
//!
//! ```ignore
//! use enlazar::eval::{Metric, RankEvaluator};
//! use enlazar::hpo::{HyperOptimizer, RandomSearch, SearchConfig};
//!
//! let config = SearchConfig::from_path("search.yaml".as_ref())?;
//! let search = RandomSearch::new(Box::new(RankEvaluator::new(Metric::MeanReciprocalRank)));
//! let best = search.optimize_hyperparams(&config, "kg.txt".as_ref(), device, 42)?;
//! println!("{} = {:.4} with {:?}", best.metric, best.score, best.candidate);
//! ```

mod executor;
mod random;
mod sampler;
mod seed;
mod select;
mod space;
mod trial;

pub use executor::TrialExecutor;
pub use random::RandomSearch;
pub use sampler::CandidateSampler;
pub use seed::{derive_seed, SeedDomain};
pub use space::{DataParams, SearchConfig, SearchSpace};
pub use trial::{Candidate, DisqualifiedTrial, TrialOutcome, TrialResult, TrialSummary};

use std::path::Path;

use crate::data::VocabularyMapping;
use crate::device::ComputeDevice;
use crate::error::Result;
use crate::eval::Metric;
use crate::model::KgeModel;

/// The winning trial of one search, with everything a caller needs to use
/// or reproduce it: the trained model, the vocabulary that encoded it, the
/// score under the declared metric, and the resolved configuration.
pub struct SearchOutcome {
    pub model: Box<dyn KgeModel>,
    pub vocabulary: VocabularyMapping,
    pub score: f64,
    pub metric: Metric,
    pub candidate: Candidate,
    /// Iteration the winning trial ran in.
    pub iteration: usize,
    /// Summaries of every completed trial, in iteration order.
    pub trials: Vec<TrialSummary>,
    /// Trials excluded from selection, in iteration order.
    pub disqualified: Vec<DisqualifiedTrial>,
}

impl std::fmt::Debug for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOutcome")
            .field("score", &self.score)
            .field("metric", &self.metric)
            .field("candidate", &self.candidate)
            .field("disqualified", &self.disqualified.len())
            .finish_non_exhaustive()
    }
}

/// Contract every search strategy implements.
///
/// Callers depend on this trait alone, so strategies are interchangeable:
/// [`RandomSearch`] today, grid or Bayesian variants later, sharing the
/// candidate/trial data model. The seed fixes every stochastic choice in
/// the run (candidate sampling, negative synthesis, splitting, model init,
/// training order), making searches replayable.
pub trait HyperOptimizer {
    fn optimize_hyperparams(
        &self,
        config: &SearchConfig,
        corpus_path: &Path,
        device: ComputeDevice,
        seed: u64,
    ) -> Result<SearchOutcome>;
}
