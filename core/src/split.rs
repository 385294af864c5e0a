//! Exhaustive two-group splitting of the unassigned pool.
//!
//! The pool is small by construction (a handful of leftover items per day),
//! so every one of the 2^n ordered partitions is enumerated and scored. No
//! pruning, no sampling. An empty pool is not special-cased: enumeration
//! yields the single empty/empty partition and scoring charges it the full
//! unclosed target gap.

use crate::{
    costs::TargetDelta,
    error::{SplitError, SplitResult},
    pool::DutyPool,
};
use serde::{Deserialize, Serialize};

/// Weight of the spread term relative to the cost term.
pub const SPREAD_WEIGHT: f64 = 0.1;

/// An ordered two-group partition of pool indices: `group0` goes to
/// worker 0, `group1` to worker 1. Together they cover every index exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub group0: Vec<usize>,
    pub group1: Vec<usize>,
}

/// A partition with its imbalance score. Lower is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPartition {
    pub partition: Partition,
    pub score: f64,
}

/// All 2^n ordered partitions of `0..n`: for each size r ascending, every
/// lexicographic r-combination as `group0`, with its ascending complement
/// as `group1`.
pub fn two_group_splits(n: usize) -> Vec<Partition> {
    let mut partitions = Vec::with_capacity(1usize << n);
    for r in 0..=n {
        for group0 in index_combinations(n, r) {
            let mut taken = vec![false; n];
            for &i in &group0 {
                taken[i] = true;
            }
            let group1: Vec<usize> = (0..n).filter(|&i| !taken[i]).collect();
            partitions.push(Partition { group0, group1 });
        }
    }
    partitions
}

/// Lexicographic `choose`-element combinations of `0..len`.
fn index_combinations(len: usize, choose: usize) -> Vec<Vec<usize>> {
    fn recurse(
        len: usize,
        choose: usize,
        start: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == choose {
            out.push(current.clone());
            return;
        }
        for i in start..len {
            current.push(i);
            recurse(len, choose, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    let mut current = Vec::with_capacity(choose);
    recurse(len, choose, 0, &mut current, &mut out);
    out
}

/// Score a partition against the target: absolute cost miss, plus
/// `SPREAD_WEIGHT` times the absolute spread miss. The target was
/// computed worker 1 minus worker 0, so the group gap runs the other way
/// and a perfect split cancels it.
pub fn score_partition(partition: &Partition, pool: &DutyPool, target: TargetDelta) -> f64 {
    let weight_of = |group: &[usize]| group.iter().map(|&i| pool[i].weight).sum::<f64>();
    let spread_of = |group: &[usize]| group.iter().map(|&i| pool[i].spread).sum::<f64>();

    let cost_gap = weight_of(&partition.group0) - weight_of(&partition.group1);
    let spread_gap = spread_of(&partition.group0) - spread_of(&partition.group1);
    (cost_gap - target.cost).abs() + SPREAD_WEIGHT * (spread_gap - target.spread).abs()
}

/// Enumerate, score, stably rank, and keep the best `top_n` partitions.
/// Equal scores keep enumeration order. Asking for zero splits is a caller
/// mistake.
pub fn best_splits(
    target: TargetDelta,
    pool: &DutyPool,
    top_n: usize,
) -> SplitResult<Vec<ScoredPartition>> {
    if top_n == 0 {
        return Err(SplitError::Config(
            "requested top 0 splits; need at least 1".to_string(),
        ));
    }

    let mut scored: Vec<ScoredPartition> = two_group_splits(pool.len())
        .into_iter()
        .map(|partition| {
            let score = score_partition(&partition, pool, target);
            ScoredPartition { partition, score }
        })
        .collect();

    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored.truncate(top_n);
    Ok(scored)
}
