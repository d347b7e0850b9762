//! Margin-ranking trainer for KGE models
//!
//! Pairs each encoded positive with its index-aligned negative, shuffles the
//! pair order every epoch, and asks the model for one margin-ranking SGD
//! step per pair. The trainer owns batching and epoch order; gradients live
//! in the model.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::EncodedTriple;
use crate::device::ComputeDevice;
use crate::error::{Error, Result};
use crate::model::KgeModel;

/// Per-trial training parameters, resolved from the sampled candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainParams {
    pub learning_rate: f64,
    pub num_epochs: usize,
    pub batch_size: usize,
    /// Seed for epoch shuffling.
    pub seed: u64,
}

/// Train `model` in place on aligned positive/negative pairs.
///
/// Returns the mean pair loss per epoch. A non-finite epoch loss aborts
/// with a divergence error rather than training on garbage.
pub fn train(
    model: &mut dyn KgeModel,
    params: &TrainParams,
    positives: &[EncodedTriple],
    negatives: &[EncodedTriple],
    _device: ComputeDevice,
) -> Result<Vec<f32>> {
    if positives.is_empty() {
        return Err(Error::EmptyPartition(
            "no training triples after encoding".to_string(),
        ));
    }
    if negatives.is_empty() {
        return Err(Error::EmptyPartition(
            "no training negatives after encoding".to_string(),
        ));
    }

    let lr = params.learning_rate as f32;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut order: Vec<usize> = (0..positives.len()).collect();
    let mut loss_history = Vec::with_capacity(params.num_epochs);

    for epoch in 0..params.num_epochs {
        order.shuffle(&mut rng);

        let mut epoch_loss = 0.0f32;
        for batch in order.chunks(params.batch_size.max(1)) {
            for &i in batch {
                // Negatives are index-aligned with positives; a shorter
                // negative list (unseen corruptions dropped) wraps around.
                let neg = negatives[i % negatives.len()];
                epoch_loss += model.margin_step(positives[i], neg, lr);
            }
        }

        let mean_loss = epoch_loss / positives.len() as f32;
        if !mean_loss.is_finite() {
            return Err(Error::Divergence(format!(
                "non-finite loss at epoch {epoch}"
            )));
        }
        loss_history.push(mean_loss);
    }

    Ok(loss_history)
}
