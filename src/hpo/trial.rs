//! Candidates and trial records

use serde::{Deserialize, Serialize};

use crate::data::VocabularyMapping;
use crate::model::{KgeModel, ModelConfig, ModelFamily};

/// One fully-resolved hyperparameter assignment for a single trial.
///
/// Sampled once per iteration. The vocabulary sizes are derived fields,
/// filled in by the trial executor after encoding; together with the seed
/// and epoch count they make the candidate a complete recipe for replaying
/// the trial's model architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub model_family: ModelFamily,
    pub learning_rate: f64,
    pub margin: f32,
    pub embedding_dim: usize,
    pub num_epochs: usize,
    pub batch_size: usize,
    /// Base seed the search ran under.
    pub seed: u64,
    /// Entity vocabulary size, derived from this trial's encoding.
    #[serde(default)]
    pub num_entities: usize,
    /// Relation vocabulary size, derived from this trial's encoding.
    #[serde(default)]
    pub num_relations: usize,
}

impl Candidate {
    /// Fill in the vocabulary sizes derived from a trial's encoding.
    pub fn with_vocab_sizes(mut self, num_entities: usize, num_relations: usize) -> Self {
        self.num_entities = num_entities;
        self.num_relations = num_relations;
        self
    }

    /// Model-construction parameters for this candidate.
    pub fn model_config(&self, init_seed: u64) -> ModelConfig {
        ModelConfig {
            family: self.model_family,
            num_entities: self.num_entities,
            num_relations: self.num_relations,
            embedding_dim: self.embedding_dim,
            margin: self.margin,
            seed: init_seed,
        }
    }
}

/// One completed trial: the trained model, its score, and everything needed
/// to interpret or reproduce it.
pub struct TrialResult {
    /// Iteration this trial ran in (0-based); breaks score ties.
    pub iteration: usize,
    /// The trained model, transferred from the executor.
    pub model: Box<dyn KgeModel>,
    /// Score under the evaluator's declared metric.
    pub score: f64,
    /// The mapping that encoded this trial's training data.
    pub vocabulary: VocabularyMapping,
    /// The reproducing configuration.
    pub candidate: Candidate,
}

impl std::fmt::Debug for TrialResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrialResult")
            .field("iteration", &self.iteration)
            .field("score", &self.score)
            .field("family", &self.candidate.model_family)
            .field("num_entities", &self.vocabulary.num_entities())
            .finish_non_exhaustive()
    }
}

/// Lightweight record of one completed trial, kept for reporting after the
/// trained models of losing trials are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub iteration: usize,
    pub score: f64,
    pub candidate: Candidate,
}

impl From<&TrialResult> for TrialSummary {
    fn from(result: &TrialResult) -> Self {
        Self {
            iteration: result.iteration,
            score: result.score,
            candidate: result.candidate.clone(),
        }
    }
}

/// A trial that failed and was excluded from selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisqualifiedTrial {
    pub iteration: usize,
    pub reason: String,
}

/// Outcome of one loop iteration. Exactly one per iteration, kept in
/// iteration order.
#[derive(Debug)]
pub enum TrialOutcome {
    Completed(TrialResult),
    Disqualified(DisqualifiedTrial),
}
