//! DistMult: bilinear diagonal scoring (Yang et al. 2015)
//!
//! Score is the trilinear product Σᵢ hᵢ·rᵢ·tᵢ. Symmetric by construction,
//! cheap, and a strong baseline for multi-relational link prediction.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::transe::{normalize, random_matrix};
use super::{init_bound, KgeModel, ModelConfig, ModelFamily};
use crate::data::EncodedTriple;

pub struct DistMult {
    entities: Array2<f32>,
    relations: Array2<f32>,
    margin: f32,
    dim: usize,
}

impl DistMult {
    pub fn new(config: &ModelConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let bound = init_bound(config.embedding_dim);

        let mut entities = random_matrix(
            &mut rng,
            config.num_entities,
            config.embedding_dim,
            bound,
        );
        let relations = random_matrix(
            &mut rng,
            config.num_relations,
            config.embedding_dim,
            bound,
        );

        for mut row in entities.rows_mut() {
            normalize(&mut row);
        }

        Self {
            entities,
            relations,
            margin: config.margin,
            dim: config.embedding_dim,
        }
    }

    fn trilinear(&self, triple: EncodedTriple) -> f32 {
        let h = self.entities.row(triple.head);
        let r = self.relations.row(triple.relation);
        let t = self.entities.row(triple.tail);
        let mut sum = 0.0;
        for i in 0..self.dim {
            sum += h[i] * r[i] * t[i];
        }
        sum
    }

    /// Partial derivatives of the trilinear product: each is the
    /// element-wise product of the other two rows.
    fn grads(&self, triple: EncodedTriple) -> (Array1<f32>, Array1<f32>, Array1<f32>) {
        let h = self.entities.row(triple.head).to_owned();
        let r = self.relations.row(triple.relation).to_owned();
        let t = self.entities.row(triple.tail).to_owned();
        (&r * &t, &h * &t, &h * &r)
    }
}

impl KgeModel for DistMult {
    fn family(&self) -> ModelFamily {
        ModelFamily::DistMult
    }

    fn num_entities(&self) -> usize {
        self.entities.nrows()
    }

    fn num_relations(&self) -> usize {
        self.relations.nrows()
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn score(&self, triple: EncodedTriple) -> f32 {
        self.trilinear(triple)
    }

    fn margin_step(&mut self, pos: EncodedTriple, neg: EncodedTriple, lr: f32) -> f32 {
        let loss = (self.margin + self.trilinear(neg) - self.trilinear(pos)).max(0.0);
        if loss == 0.0 {
            return 0.0;
        }

        let (pos_h, pos_r, pos_t) = self.grads(pos);
        let (neg_h, neg_r, neg_t) = self.grads(neg);

        // Ascend the positive score, descend the negative one.
        add_scaled(&mut self.entities, pos.head, &pos_h, lr);
        add_scaled(&mut self.relations, pos.relation, &pos_r, lr);
        add_scaled(&mut self.entities, pos.tail, &pos_t, lr);

        add_scaled(&mut self.entities, neg.head, &neg_h, -lr);
        add_scaled(&mut self.relations, neg.relation, &neg_r, -lr);
        add_scaled(&mut self.entities, neg.tail, &neg_t, -lr);

        loss
    }

    fn entity_embedding(&self, id: usize) -> Option<Vec<f32>> {
        (id < self.entities.nrows()).then(|| self.entities.row(id).to_vec())
    }

    fn relation_embedding(&self, id: usize) -> Option<Vec<f32>> {
        (id < self.relations.nrows()).then(|| self.relations.row(id).to_vec())
    }
}

fn add_scaled(matrix: &mut Array2<f32>, row: usize, grad: &Array1<f32>, scale: f32) {
    let mut target = matrix.row_mut(row);
    for (value, g) in target.iter_mut().zip(grad.iter()) {
        *value += scale * g;
    }
}
