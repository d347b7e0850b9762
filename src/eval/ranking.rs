//! Raw ranking evaluator

use crate::data::EncodedTriple;
use crate::error::{Error, Result};
use crate::model::KgeModel;

use super::{Evaluation, Evaluator, Metric};

/// Link-prediction evaluator using raw (unfiltered) ranking.
///
/// For every test triple both predictions are scored: the true tail against
/// all entities in (h, r, ?), and the true head against all entities in
/// (?, r, t). Ties rank pessimistically: an entity scoring equal to the true
/// one does not push the rank down, only strictly better scores do.
#[derive(Debug, Clone, Copy)]
pub struct RankEvaluator {
    metric: Metric,
}

impl RankEvaluator {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    fn rank_tail(&self, triple: EncodedTriple, model: &dyn KgeModel) -> usize {
        let true_score = model.score(triple);
        let mut rank = 1;
        for candidate in 0..model.num_entities() {
            if candidate == triple.tail {
                continue;
            }
            let score = model.score(EncodedTriple {
                tail: candidate,
                ..triple
            });
            if score > true_score {
                rank += 1;
            }
        }
        rank
    }

    fn rank_head(&self, triple: EncodedTriple, model: &dyn KgeModel) -> usize {
        let true_score = model.score(triple);
        let mut rank = 1;
        for candidate in 0..model.num_entities() {
            if candidate == triple.head {
                continue;
            }
            let score = model.score(EncodedTriple {
                head: candidate,
                ..triple
            });
            if score > true_score {
                rank += 1;
            }
        }
        rank
    }
}

impl Default for RankEvaluator {
    fn default() -> Self {
        Self::new(Metric::MeanReciprocalRank)
    }
}

impl Evaluator for RankEvaluator {
    fn metric(&self) -> Metric {
        self.metric
    }

    fn evaluate(&self, test: &[EncodedTriple], model: &dyn KgeModel) -> Result<Evaluation> {
        if test.is_empty() {
            return Err(Error::EmptyPartition(
                "no test triples after encoding".to_string(),
            ));
        }

        let mut ranks = Vec::with_capacity(test.len() * 2);
        for &triple in test {
            if triple.head >= model.num_entities()
                || triple.tail >= model.num_entities()
                || triple.relation >= model.num_relations()
            {
                return Err(Error::Evaluation(format!(
                    "test triple {triple:?} is out of range for the model vocabulary"
                )));
            }
            ranks.push(self.rank_tail(triple, model));
            ranks.push(self.rank_head(triple, model));
        }

        Ok(Evaluation {
            score: self.metric.score_from_ranks(&ranks),
            ranks,
        })
    }
}
