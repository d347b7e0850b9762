//! Uniform candidate sampling

use rand::rngs::StdRng;
use rand::Rng;

use super::space::SearchSpace;
use super::trial::Candidate;

/// Draws one candidate per iteration, picking uniformly and independently
/// from each axis, with replacement across iterations. The budget is
/// typically smaller than the full Cartesian product, so repeats are
/// expected and no exhaustiveness is guaranteed.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSampler<'a> {
    space: &'a SearchSpace,
    /// Base seed recorded into every candidate for reproduction.
    seed: u64,
}

impl<'a> CandidateSampler<'a> {
    /// Axes must already be validated non-empty.
    pub fn new(space: &'a SearchSpace, seed: u64) -> Self {
        Self { space, seed }
    }

    /// Draw one fully-resolved candidate.
    pub fn sample(&self, rng: &mut StdRng) -> Candidate {
        let space = self.space;
        Candidate {
            model_family: *pick(&space.model_families, rng),
            learning_rate: *pick(&space.learning_rates, rng),
            margin: *pick(&space.margins, rng),
            embedding_dim: *pick(&space.embedding_dims, rng),
            num_epochs: space.num_epochs,
            batch_size: space.batch_size,
            seed: self.seed,
            num_entities: 0,
            num_relations: 0,
        }
    }
}

fn pick<'v, T>(values: &'v [T], rng: &mut StdRng) -> &'v T {
    &values[rng.random_range(0..values.len())]
}
