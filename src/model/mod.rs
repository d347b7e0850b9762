//! Knowledge-graph embedding models
//!
//! Each model family encodes a geometric hypothesis about how relations
//! transform entities:
//!
//! | Family | Hypothesis | Score |
//! |--------|------------|-------|
//! | TransE | Relations are translations | -‖h + r - t‖₂ |
//! | DistMult | Relations are scalings | Σᵢ hᵢ·rᵢ·tᵢ |
//!
//! Higher scores always mean more plausible triples. Models are constructed
//! through [`build_model`] from a [`ModelConfig`] assembled per trial; every
//! trial gets a fresh, independently initialized instance, seeded so the
//! same config always yields the same starting weights.

mod distmult;
mod transe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use distmult::DistMult;
pub use transe::TransE;

use crate::data::EncodedTriple;
use crate::error::{Error, Result};

/// Supported model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    TransE,
    DistMult,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransE => write!(f, "trans_e"),
            Self::DistMult => write!(f, "dist_mult"),
        }
    }
}

impl FromStr for ModelFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "transe" => Ok(Self::TransE),
            "distmult" => Ok(Self::DistMult),
            _ => Err(format!("unknown model family: {s}. Use: trans_e, dist_mult")),
        }
    }
}

/// Construction parameters for one model instance.
///
/// Vocabulary sizes come from the trial's encoding; everything else comes
/// from the sampled candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub family: ModelFamily,
    pub num_entities: usize,
    pub num_relations: usize,
    pub embedding_dim: usize,
    pub margin: f32,
    /// Seed for weight initialization.
    pub seed: u64,
}

/// A trainable, scorable KGE model.
///
/// `margin_step` performs one pairwise margin-ranking update from a
/// (positive, negative) pair and returns the pair's hinge loss; the trainer
/// owns batching and epoch order, the model owns its gradients.
pub trait KgeModel {
    fn family(&self) -> ModelFamily;
    fn num_entities(&self) -> usize;
    fn num_relations(&self) -> usize;
    fn embedding_dim(&self) -> usize;

    /// Score a triple; higher is more plausible.
    fn score(&self, triple: EncodedTriple) -> f32;

    /// One SGD step on a margin ranking pair. Returns the pair loss.
    fn margin_step(&mut self, pos: EncodedTriple, neg: EncodedTriple, lr: f32) -> f32;

    /// Entity embedding row, if the id is in range.
    fn entity_embedding(&self, id: usize) -> Option<Vec<f32>>;

    /// Relation embedding row, if the id is in range.
    fn relation_embedding(&self, id: usize) -> Option<Vec<f32>>;
}

/// Construct a fresh model instance for the given config.
pub fn build_model(config: &ModelConfig) -> Result<Box<dyn KgeModel>> {
    if config.num_entities == 0 || config.num_relations == 0 {
        return Err(Error::Config(format!(
            "model needs a non-empty vocabulary, got {} entities / {} relations",
            config.num_entities, config.num_relations
        )));
    }
    if config.embedding_dim == 0 {
        return Err(Error::Config("embedding_dim must be > 0".to_string()));
    }

    Ok(match config.family {
        ModelFamily::TransE => Box::new(TransE::new(config)),
        ModelFamily::DistMult => Box::new(DistMult::new(config)),
    })
}

/// Bordes-style uniform initialization bound: 6/√dim.
pub(crate) fn init_bound(dim: usize) -> f32 {
    6.0 / (dim as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(family: ModelFamily) -> ModelConfig {
        ModelConfig {
            family,
            num_entities: 7,
            num_relations: 3,
            embedding_dim: 8,
            margin: 1.0,
            seed: 42,
        }
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("TransE".parse::<ModelFamily>().unwrap(), ModelFamily::TransE);
        assert_eq!(
            "dist_mult".parse::<ModelFamily>().unwrap(),
            ModelFamily::DistMult
        );
        assert_eq!(
            "DistMult".parse::<ModelFamily>().unwrap(),
            ModelFamily::DistMult
        );
        assert!("rotate".parse::<ModelFamily>().is_err());
    }

    #[test]
    fn test_factory_builds_requested_family() {
        for family in [ModelFamily::TransE, ModelFamily::DistMult] {
            let model = build_model(&config(family)).unwrap();
            assert_eq!(model.family(), family);
            assert_eq!(model.num_entities(), 7);
            assert_eq!(model.num_relations(), 3);
            assert_eq!(model.embedding_dim(), 8);
        }
    }

    #[test]
    fn test_factory_rejects_degenerate_configs() {
        let mut bad = config(ModelFamily::TransE);
        bad.num_entities = 0;
        assert!(matches!(build_model(&bad), Err(Error::Config(_))));

        let mut bad = config(ModelFamily::TransE);
        bad.embedding_dim = 0;
        assert!(matches!(build_model(&bad), Err(Error::Config(_))));
    }

    #[test]
    fn test_same_seed_same_weights() {
        let a = build_model(&config(ModelFamily::TransE)).unwrap();
        let b = build_model(&config(ModelFamily::TransE)).unwrap();
        for id in 0..7 {
            assert_eq!(a.entity_embedding(id), b.entity_embedding(id));
        }
    }

    #[test]
    fn test_different_seeds_different_weights() {
        let a = build_model(&config(ModelFamily::TransE)).unwrap();
        let mut other = config(ModelFamily::TransE);
        other.seed = 43;
        let b = build_model(&other).unwrap();
        assert_ne!(a.entity_embedding(0), b.entity_embedding(0));
    }

    #[test]
    fn test_embedding_bounds() {
        let model = build_model(&config(ModelFamily::DistMult)).unwrap();
        assert!(model.entity_embedding(6).is_some());
        assert!(model.entity_embedding(7).is_none());
        assert!(model.relation_embedding(2).is_some());
        assert!(model.relation_embedding(3).is_none());
    }
}
