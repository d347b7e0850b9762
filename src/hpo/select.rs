//! Winner selection over recorded trials

use crate::error::{Error, Result};
use crate::eval::Metric;

use super::trial::{DisqualifiedTrial, TrialOutcome, TrialResult};

/// Pick the best completed trial under the metric's declared direction.
///
/// Outcomes are scanned in iteration order and a trial only displaces the
/// incumbent when its score is strictly better, so the earliest iteration
/// wins ties. Returns the winner together with the disqualified records;
/// fails with a selection error when no trial completed.
pub(crate) fn select_best(
    outcomes: Vec<TrialOutcome>,
    metric: Metric,
) -> Result<(TrialResult, Vec<DisqualifiedTrial>)> {
    let budget = outcomes.len();
    let mut disqualified = Vec::new();
    let mut best: Option<TrialResult> = None;

    for outcome in outcomes {
        match outcome {
            TrialOutcome::Completed(result) => {
                let improves = match &best {
                    None => true,
                    Some(incumbent) => {
                        if metric.higher_is_better() {
                            result.score > incumbent.score
                        } else {
                            result.score < incumbent.score
                        }
                    }
                };
                if improves {
                    best = Some(result);
                }
            }
            TrialOutcome::Disqualified(record) => disqualified.push(record),
        }
    }

    match best {
        Some(result) => Ok((result, disqualified)),
        None => Err(Error::Selection {
            disqualified: disqualified.len(),
            budget,
        }),
    }
}
