//! Link-prediction metrics

use std::fmt;

use serde::{Deserialize, Serialize};

/// Available evaluation metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Mean rank of the true entity (lower is better).
    MeanRank,
    /// Mean reciprocal rank (higher is better).
    MeanReciprocalRank,
    /// Fraction of predictions ranked in the top ten (higher is better).
    HitsAtTen,
}

impl Metric {
    /// Whether higher values are better for this metric.
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, Metric::MeanRank)
    }

    /// Metric name as reported to callers.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::MeanRank => "mean_rank",
            Metric::MeanReciprocalRank => "mrr",
            Metric::HitsAtTen => "hits_at_10",
        }
    }

    /// Compute the metric from a list of ranks.
    ///
    /// Callers guarantee `ranks` is non-empty; an empty evaluation is
    /// rejected upstream before scoring.
    pub fn score_from_ranks(&self, ranks: &[usize]) -> f64 {
        let n = ranks.len() as f64;
        match self {
            Metric::MeanRank => ranks.iter().map(|&r| r as f64).sum::<f64>() / n,
            Metric::MeanReciprocalRank => {
                ranks.iter().map(|&r| 1.0 / r as f64).sum::<f64>() / n
            }
            Metric::HitsAtTen => ranks.iter().filter(|&&r| r <= 10).count() as f64 / n,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "mean_rank" | "mr" => Ok(Metric::MeanRank),
            "mrr" | "mean_reciprocal_rank" => Ok(Metric::MeanReciprocalRank),
            "hits_at_10" | "hits@10" | "hits10" => Ok(Metric::HitsAtTen),
            _ => Err(format!(
                "unknown metric: {s}. Use: mean_rank, mrr, hits_at_10"
            )),
        }
    }
}
