//! Per-day pipeline orchestration.

use crate::{
    assign::assign_fixed,
    costs::{assess_fixed_costs, fixed_deltas, TargetDelta, WorkerLoad},
    error::SplitResult,
    pool::{unassigned_pool, DutyPool},
    record::{Assignee, Duty, SurpriseDuty},
    split::{best_splits, ScoredPartition},
    types::WEEK,
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One day's full solver output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    /// The day's two workers, in roster order.
    pub workers: Vec<WorkerLoad>,
    pub target: TargetDelta,
    pub pool: DutyPool,
    /// Candidate splits, best first.
    pub ranked: Vec<ScoredPartition>,
}

/// Solve one day: pair gap, unassigned pool, ranked splits. `workers` must
/// be the day's rostered pair in roster order; any other shape fails.
pub fn plan_day(
    day: Weekday,
    workers: Vec<WorkerLoad>,
    duties: &[Duty],
    surprises: &[SurpriseDuty],
    top_n: usize,
) -> SplitResult<DayPlan> {
    let target = fixed_deltas(day, &workers)?;
    let pool = unassigned_pool(day, &workers, duties, surprises);
    let ranked = best_splits(target, &pool, top_n)?;
    log::debug!(
        "plan: day={day} pool={} candidates={}",
        pool.len(),
        ranked.len(),
    );
    Ok(DayPlan {
        day,
        workers,
        target,
        pool,
        ranked,
    })
}

/// Solve every rostered day independently, Monday first.
///
/// Assignment and costing run once over the full roster. A day that then
/// fails (wrong roster shape, bad request) is reported in its slot without
/// affecting the other days; the outer error covers input-wide
/// malformation only.
pub fn plan_week(
    roster: &[Assignee],
    duties: &[Duty],
    surprises: &[SurpriseDuty],
    top_n: usize,
) -> SplitResult<Vec<(Weekday, SplitResult<DayPlan>)>> {
    let claims = assign_fixed(roster, duties, surprises)?;
    let loads = assess_fixed_costs(&claims, duties, surprises);

    let mut outcomes = Vec::new();
    for day in WEEK {
        let workers: Vec<WorkerLoad> = loads
            .iter()
            .filter(|w| w.claims.assignee.day == day)
            .cloned()
            .collect();
        if workers.is_empty() {
            continue; // day not rostered
        }
        outcomes.push((day, plan_day(day, workers, duties, surprises, top_n)));
    }
    Ok(outcomes)
}
