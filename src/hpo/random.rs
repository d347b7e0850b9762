//! Random search driver

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::{load_corpus, synthesize_negatives, train_test_split};
use crate::device::ComputeDevice;
use crate::error::{Error, Result};
use crate::eval::Evaluator;

use super::executor::TrialExecutor;
use super::sampler::CandidateSampler;
use super::seed::{derive_seed, SeedDomain};
use super::select::select_best;
use super::space::SearchConfig;
use super::trial::{DisqualifiedTrial, TrialOutcome, TrialSummary};
use super::{HyperOptimizer, SearchOutcome};

/// Uniform random search over the configured space.
///
/// Runs the fixed-budget loop: sample a candidate, execute the trial,
/// record the outcome, and after the last iteration select the winner under
/// the evaluator's metric. The corpus, its synthesized negatives, and the
/// train/test split are computed once up front and shared read-only by every
/// trial. Negatives in particular must not be regenerated per trial or
/// scores stop being comparable across trials.
pub struct RandomSearch {
    evaluator: Box<dyn Evaluator>,
}

impl RandomSearch {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self { evaluator }
    }
}

impl HyperOptimizer for RandomSearch {
    fn optimize_hyperparams(
        &self,
        config: &SearchConfig,
        corpus_path: &Path,
        device: ComputeDevice,
        seed: u64,
    ) -> Result<SearchOutcome> {
        // Config problems surface before any data is touched.
        config.validate()?;

        let positives = load_corpus(corpus_path, &config.data_params.comment_prefix)?;

        let mut neg_rng =
            StdRng::seed_from_u64(derive_seed(seed, SeedDomain::Negatives, 0));
        let negatives = synthesize_negatives(&positives, &mut neg_rng);

        let mut split_rng = StdRng::seed_from_u64(derive_seed(seed, SeedDomain::Split, 0));
        let split = train_test_split(
            &positives,
            &negatives,
            config.data_params.ratio_test_data,
            &mut split_rng,
        )?;

        let sampler = CandidateSampler::new(&config.hyper_params, seed);
        let executor = TrialExecutor::new(self.evaluator.as_ref(), device, seed);

        let budget = config.hyper_params.max_iters;
        let mut outcomes = Vec::with_capacity(budget);
        let mut trials = Vec::with_capacity(budget);
        for iteration in 0..budget {
            let mut sample_rng = StdRng::seed_from_u64(derive_seed(
                seed,
                SeedDomain::Sampler,
                iteration as u64,
            ));
            let candidate = sampler.sample(&mut sample_rng);

            // Each trial runs in its own failure boundary: a failed trial is
            // disqualified, not fatal to the search.
            let outcome = match executor.run_trial(iteration, candidate, &split) {
                Ok(result) => {
                    trials.push(TrialSummary::from(&result));
                    TrialOutcome::Completed(result)
                }
                Err(Error::Trial { iteration, source }) => {
                    TrialOutcome::Disqualified(DisqualifiedTrial {
                        iteration,
                        reason: source.to_string(),
                    })
                }
                Err(other) => return Err(other),
            };
            outcomes.push(outcome);
        }

        debug_assert_eq!(outcomes.len(), budget);

        let metric = self.evaluator.metric();
        let (best, disqualified) = select_best(outcomes, metric)?;

        Ok(SearchOutcome {
            model: best.model,
            vocabulary: best.vocabulary,
            score: best.score,
            metric,
            candidate: best.candidate,
            iteration: best.iteration,
            trials,
            disqualified,
        })
    }
}
