//! Train/test partitioning of positives and negatives

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::triples::Triple;
use crate::error::{Error, Result};

/// A train/test partition of a corpus and its synthesized negatives.
#[derive(Debug, Clone)]
pub struct Split {
    pub train_pos: Vec<Triple>,
    pub test_pos: Vec<Triple>,
    pub train_neg: Vec<Triple>,
    pub test_neg: Vec<Triple>,
}

impl Split {
    /// Total number of positive triples across both partitions.
    pub fn num_positives(&self) -> usize {
        self.train_pos.len() + self.test_pos.len()
    }
}

/// Partition positives and negatives into train and test sets.
///
/// Positives and negatives must be index-aligned (one negative synthesized
/// per positive); a single shuffled index permutation is applied to both so
/// a positive and its corruption always land in the same partition.
/// `test_ratio` must lie strictly inside (0, 1) and must leave at least one
/// triple on each side.
pub fn train_test_split(
    positives: &[Triple],
    negatives: &[Triple],
    test_ratio: f64,
    rng: &mut StdRng,
) -> Result<Split> {
    if positives.len() != negatives.len() {
        return Err(Error::Config(format!(
            "positives ({}) and negatives ({}) must be index-aligned",
            positives.len(),
            negatives.len()
        )));
    }
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(Error::Config(format!(
            "ratio_test_data must be in (0, 1), got {test_ratio}"
        )));
    }

    let n = positives.len();
    let n_test = ((n as f64) * test_ratio).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::Config(format!(
            "ratio_test_data {test_ratio} leaves an empty partition for {n} triples"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let gather = |source: &[Triple], idx: &[usize]| -> Vec<Triple> {
        idx.iter().map(|&i| source[i].clone()).collect()
    };

    Ok(Split {
        train_pos: gather(positives, train_idx),
        test_pos: gather(positives, test_idx),
        train_neg: gather(negatives, train_idx),
        test_neg: gather(negatives, test_idx),
    })
}
