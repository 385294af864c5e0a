//! The day's unassigned pool: everything nobody on the roster claims.

use crate::{
    costs::WorkerLoad,
    record::{Duty, SurpriseDuty},
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One unclaimed item: expected tasks and spread under a single name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub name: String,
    pub weight: f64,
    pub spread: f64,
}

/// A day's unassigned pool. Entries are unique by name; recurring duties
/// carry zero spread.
pub type DutyPool = Vec<PoolEntry>;

/// Collect everything on `day` that neither rostered worker claims.
///
/// Unclaimed recurring duties come first, in table order, with zero
/// spread. The day's unclaimed surprises follow, merging into a
/// same-named entry when one exists. Entries whose merged weight is zero
/// are dropped at the end.
pub fn unassigned_pool(
    day: Weekday,
    pair: &[WorkerLoad],
    duties: &[Duty],
    surprises: &[SurpriseDuty],
) -> DutyPool {
    let claimed_duties: BTreeSet<&str> = pair
        .iter()
        .flat_map(|w| w.claims.duties.iter().map(String::as_str))
        .collect();
    let claimed_surprises: BTreeSet<&str> = pair
        .iter()
        .flat_map(|w| w.claims.surprises.iter().map(String::as_str))
        .collect();

    let mut pool: DutyPool = duties
        .iter()
        .filter(|d| !claimed_duties.contains(d.source.as_str()))
        .map(|d| PoolEntry {
            name: d.source.clone(),
            weight: d.count,
            spread: 0.0,
        })
        .collect();

    for surprise in surprises {
        if surprise.day != day || claimed_surprises.contains(surprise.source.as_str()) {
            continue;
        }
        match pool.iter_mut().find(|entry| entry.name == surprise.source) {
            Some(entry) => {
                entry.weight += surprise.mean;
                entry.spread += surprise.spread;
            }
            None => pool.push(PoolEntry {
                name: surprise.source.clone(),
                weight: surprise.mean,
                spread: surprise.spread,
            }),
        }
    }

    // Exact zero only; near-zero weights are real work.
    pool.retain(|entry| entry.weight != 0.0);
    pool
}
