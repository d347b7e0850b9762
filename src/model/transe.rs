//! TransE: relations as translations (Bordes et al. 2013)
//!
//! If (h, r, t) holds, then h + r ≈ t in embedding space. The score is the
//! negated L2 distance -‖h + r - t‖₂, so a perfect translation scores 0 and
//! everything else scores below it.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{init_bound, KgeModel, ModelConfig, ModelFamily};
use crate::data::EncodedTriple;

pub struct TransE {
    entities: Array2<f32>,
    relations: Array2<f32>,
    margin: f32,
    dim: usize,
}

impl TransE {
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

        // Entity vectors live on the unit sphere (TransE constraint).
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

    fn distance(&self, triple: EncodedTriple) -> f32 {
        let h = self.entities.row(triple.head);
        let r = self.relations.row(triple.relation);
        let t = self.entities.row(triple.tail);
        let mut sum = 0.0;
        for i in 0..self.dim {
            let diff = h[i] + r[i] - t[i];
            sum += diff * diff;
        }
        sum.sqrt()
    }

    /// Gradient of ‖h + r - t‖ with respect to h (and r); negate for t.
    fn distance_grad(&self, triple: EncodedTriple) -> Array1<f32> {
        let h = self.entities.row(triple.head);
        let r = self.relations.row(triple.relation);
        let t = self.entities.row(triple.tail);
        let diff = &h + &r - &t;
        let norm = diff.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-8);
        diff.mapv(|x| x / norm)
    }
}

impl KgeModel for TransE {
    fn family(&self) -> ModelFamily {
        ModelFamily::TransE
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
        -self.distance(triple)
    }

    fn margin_step(&mut self, pos: EncodedTriple, neg: EncodedTriple, lr: f32) -> f32 {
        let loss = (self.margin + self.distance(pos) - self.distance(neg)).max(0.0);
        if loss == 0.0 {
            return 0.0;
        }

        let pos_grad = self.distance_grad(pos);
        let neg_grad = self.distance_grad(neg);

        // Descend the positive distance, ascend the negative one.
        axpy_row(&mut self.entities, pos.head, &pos_grad, -lr);
        axpy_row(&mut self.relations, pos.relation, &pos_grad, -lr);
        axpy_row(&mut self.entities, pos.tail, &pos_grad, lr);

        axpy_row(&mut self.entities, neg.head, &neg_grad, lr);
        axpy_row(&mut self.relations, neg.relation, &neg_grad, lr);
        axpy_row(&mut self.entities, neg.tail, &neg_grad, -lr);

        for id in [pos.head, pos.tail, neg.head, neg.tail] {
            let mut row = self.entities.row_mut(id);
            let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 1.0 {
                row.mapv_inplace(|x| x / norm);
            }
        }

        loss
    }

    fn entity_embedding(&self, id: usize) -> Option<Vec<f32>> {
        (id < self.entities.nrows()).then(|| self.entities.row(id).to_vec())
    }

    fn relation_embedding(&self, id: usize) -> Option<Vec<f32>> {
        (id < self.relations.nrows()).then(|| self.relations.row(id).to_vec())
    }
}

pub(crate) fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, bound: f32) -> Array2<f32> {
    let mut matrix = Array2::zeros((rows, cols));
    for value in matrix.iter_mut() {
        *value = (rng.random::<f32>() * 2.0 - 1.0) * bound;
    }
    matrix
}

pub(crate) fn normalize(row: &mut ndarray::ArrayViewMut1<f32>) {
    let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 1e-8 {
        row.mapv_inplace(|x| x / norm);
    }
}

fn axpy_row(matrix: &mut Array2<f32>, row: usize, grad: &Array1<f32>, scale: f32) {
    let mut target = matrix.row_mut(row);
    for (value, g) in target.iter_mut().zip(grad.iter()) {
        *value += scale * g;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> TransE {
        TransE::new(&ModelConfig {
            family: ModelFamily::TransE,
            num_entities: 5,
            num_relations: 2,
            embedding_dim: 16,
            margin: 1.0,
            seed: 42,
        })
    }

    #[test]
    fn test_entity_rows_are_unit_norm_after_init() {
        let model = model();
        for id in 0..5 {
            let row = model.entity_embedding(id).unwrap();
            let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_score_is_negated_distance() {
        let model = model();
        let triple = EncodedTriple {
            head: 0,
            relation: 0,
            tail: 1,
        };
        assert_relative_eq!(model.score(triple), -model.distance(triple));
        assert!(model.score(triple) <= 0.0);
    }

    #[test]
    fn test_margin_step_moves_pair_apart() {
        let mut model = model();
        let pos = EncodedTriple {
            head: 0,
            relation: 0,
            tail: 1,
        };
        let neg = EncodedTriple {
            head: 0,
            relation: 0,
            tail: 2,
        };

        let before_gap = model.score(pos) - model.score(neg);
        for _ in 0..200 {
            model.margin_step(pos, neg, 0.05);
        }
        let after_gap = model.score(pos) - model.score(neg);
        // Either the pair started saturated (already separated by the
        // margin) or training must have separated it.
        assert!(
            after_gap >= before_gap,
            "updates must not shrink the gap: {before_gap} -> {after_gap}"
        );
        assert!(
            after_gap > 0.0,
            "positive should outscore negative after updates: {after_gap}"
        );
    }

    #[test]
    fn test_margin_step_returns_finite_loss() {
        let mut model = model();
        let pos = EncodedTriple {
            head: 1,
            relation: 1,
            tail: 3,
        };
        let neg = EncodedTriple {
            head: 1,
            relation: 1,
            tail: 4,
        };
        let loss = model.margin_step(pos, neg, 0.01);
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }
}
