//! Fixed-cost aggregation over claim sets.
//!
//! Claims are re-priced against the source tables rather than summed from
//! the claim lists, so a source name recurring in a table is counted once
//! per table row. Surprise rows are priced only on the worker's own day,
//! because the same source can recur on other days.

use crate::{
    assign::ClaimSet,
    error::{SplitError, SplitResult},
    record::{Duty, SurpriseDuty},
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A claim set with its aggregated fixed workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerLoad {
    pub claims: ClaimSet,
    /// Total expected tasks from claimed recurring duties.
    pub fixed_cost: f64,
    /// Total expected tasks from claimed surprises on this worker's day.
    pub fixed_surprise_cost: f64,
    /// Total spread from the same surprises.
    pub fixed_surprise_spread: f64,
}

impl WorkerLoad {
    /// Expected tasks before any pool work is added.
    pub fn fixed_total(&self) -> f64 {
        self.fixed_cost + self.fixed_surprise_cost
    }
}

/// The gap the free split has to close: how far worker 1 sits ahead of
/// worker 0 in cost and in spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetDelta {
    pub cost: f64,
    pub spread: f64,
}

/// Aggregate fixed costs for each claim set.
pub fn assess_fixed_costs(
    claims: &[ClaimSet],
    duties: &[Duty],
    surprises: &[SurpriseDuty],
) -> Vec<WorkerLoad> {
    claims
        .iter()
        .map(|claim| {
            // Fold from +0.0: `Iterator::sum` for f64 starts at -0.0, which
            // leaks a "-0.0" into reports when a claim set is empty.
            let fixed_cost: f64 = duties
                .iter()
                .filter(|d| claim.duties.iter().any(|name| *name == d.source))
                .fold(0.0, |acc, d| acc + d.count);

            let day_surprises: Vec<&SurpriseDuty> = surprises
                .iter()
                .filter(|s| {
                    s.day == claim.assignee.day
                        && claim.surprises.iter().any(|name| *name == s.source)
                })
                .collect();
            let fixed_surprise_cost: f64 = day_surprises.iter().fold(0.0, |acc, s| acc + s.mean);
            let fixed_surprise_spread: f64 =
                day_surprises.iter().fold(0.0, |acc, s| acc + s.spread);

            WorkerLoad {
                claims: claim.clone(),
                fixed_cost,
                fixed_surprise_cost,
                fixed_surprise_spread,
            }
        })
        .collect()
}

/// Cost and spread gaps for one day's pair, oriented worker 1 minus
/// worker 0. Fails with `Shape` unless the day has exactly two workers.
pub fn fixed_deltas(day: Weekday, pair: &[WorkerLoad]) -> SplitResult<TargetDelta> {
    if pair.len() != 2 {
        return Err(SplitError::Shape {
            day,
            count: pair.len(),
        });
    }
    Ok(TargetDelta {
        cost: pair[1].fixed_total() - pair[0].fixed_total(),
        spread: pair[1].fixed_surprise_spread - pair[0].fixed_surprise_spread,
    })
}
