//! Per-trial execution: encode, build, train, evaluate

use crate::data::{Split, VocabularyMapping};
use crate::device::ComputeDevice;
use crate::error::Result;
use crate::eval::Evaluator;
use crate::model::build_model;
use crate::train::{train, TrainParams};

use super::seed::{derive_seed, SeedDomain};
use super::trial::{Candidate, TrialResult};

/// Runs one trial from a sampled candidate and the shared split.
///
/// The vocabulary mapping is rebuilt from the training-positive partition on
/// every trial: the model's input dimensions depend on the encoding, and the
/// mapping travels with the result so the trained embedding rows stay
/// interpretable. Any failure is wrapped with the iteration it occurred in.
pub struct TrialExecutor<'a> {
    evaluator: &'a dyn Evaluator,
    device: ComputeDevice,
    base_seed: u64,
}

impl<'a> TrialExecutor<'a> {
    pub fn new(evaluator: &'a dyn Evaluator, device: ComputeDevice, base_seed: u64) -> Self {
        Self {
            evaluator,
            device,
            base_seed,
        }
    }

    /// Execute one trial; errors carry the iteration index.
    pub fn run_trial(
        &self,
        iteration: usize,
        candidate: Candidate,
        split: &Split,
    ) -> Result<TrialResult> {
        self.execute(iteration, candidate, split)
            .map_err(|e| e.in_trial(iteration))
    }

    fn execute(
        &self,
        iteration: usize,
        candidate: Candidate,
        split: &Split,
    ) -> Result<TrialResult> {
        let vocabulary = VocabularyMapping::from_triples(&split.train_pos);
        let train_pos = vocabulary.encode(&split.train_pos);
        let train_neg = vocabulary.encode(&split.train_neg);
        let test_pos = vocabulary.encode(&split.test_pos);

        let candidate =
            candidate.with_vocab_sizes(vocabulary.num_entities(), vocabulary.num_relations());

        let init_seed = derive_seed(self.base_seed, SeedDomain::ModelInit, iteration as u64);
        let mut model = build_model(&candidate.model_config(init_seed))?;

        let params = TrainParams {
            learning_rate: candidate.learning_rate,
            num_epochs: candidate.num_epochs,
            batch_size: candidate.batch_size,
            seed: derive_seed(self.base_seed, SeedDomain::Trainer, iteration as u64),
        };
        train(model.as_mut(), &params, &train_pos, &train_neg, self.device)?;

        let evaluation = self.evaluator.evaluate(&test_pos, model.as_ref())?;

        Ok(TrialResult {
            iteration,
            model,
            score: evaluation.score,
            vocabulary,
            candidate,
        })
    }
}
