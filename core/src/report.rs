//! Plain-text reports over a solved day.
//!
//! Formatters are pure and return the assembled text; callers decide where
//! it goes. Days are displayed as the day the work is performed, one
//! weekday after the generation day the pipeline keys by.

use crate::{plan::DayPlan, pool::PoolEntry, split::Partition, types::weekday_name};

/// The full overview: each worker's fixed claims and running totals, the
/// pool that still needs covering, and the best suggested split.
pub fn full_report(plan: &DayPlan) -> String {
    let performed = weekday_name(plan.day.succ()).to_uppercase();
    let mut out = String::new();

    out.push_str(&format!("========OVERVIEW FOR {performed}========\n\n"));
    for (i, worker) in plan.workers.iter().enumerate() {
        let assignee = &worker.claims.assignee;
        out.push_str(&format!(
            "Worker {i}: {:<12}[Team: {}]\n",
            assignee.name, assignee.team
        ));
        out.push_str(&format!(
            "\tFor sure covering [{:.1} tasks]: {}\n",
            worker.fixed_cost,
            name_list(&worker.claims.duties)
        ));
        out.push_str(&format!(
            "\tFor sure covering surprises [{:.1} expected tasks]: {}\n",
            worker.fixed_surprise_cost,
            name_list(&worker.claims.surprises)
        ));
        out.push_str(&format!(
            "\tTotal so far: {:.1} tasks, variation ±{:.1}\n",
            worker.fixed_total(),
            worker.fixed_surprise_spread
        ));
    }

    out.push_str("\nThese need covering:\n");
    let mut entries: Vec<&PoolEntry> = plan.pool.iter().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    for entry in entries {
        if entry.spread == 0.0 {
            out.push_str(&format!("\t{}: {:.1} tasks\n", entry.name, entry.weight));
        } else {
            out.push_str(&format!(
                "\t{}: {:.1} tasks ±{:.1}\n",
                entry.name, entry.weight, entry.spread
            ));
        }
    }

    out.push_str(&format!("\nSUGGESTED SPLIT FOR {performed}\n\n"));
    if let Some(best) = plan.ranked.first() {
        let totals = resolved_totals(plan, &best.partition);
        for (i, worker) in plan.workers.iter().enumerate() {
            let taken = group_names(plan, &best.partition, i);
            out.push_str(&format!(
                "{} takes {}\n",
                worker.claims.assignee.name,
                name_list(&taken)
            ));
            let (total, spread) = totals[i];
            out.push_str(&format!(
                "\tThis results in a total of {total:.1} tasks ±{spread:.1}\n"
            ));
        }
    }
    out
}

/// One line per worker: who takes what, and where that leaves them.
pub fn simple_report(plan: &DayPlan) -> String {
    let mut out = String::new();
    if let Some(best) = plan.ranked.first() {
        let totals = resolved_totals(plan, &best.partition);
        for (i, worker) in plan.workers.iter().enumerate() {
            let taken = group_names(plan, &best.partition, i);
            let (total, spread) = totals[i];
            out.push_str(&format!(
                "\t{} takes {} = {total:.1} tasks ±{spread:.1}\n",
                worker.claims.assignee.name,
                name_list(&taken)
            ));
        }
    }
    out.push('\n');
    out
}

/// Final (total, spread) per worker once a candidate split is applied.
pub fn resolved_totals(plan: &DayPlan, partition: &Partition) -> [(f64, f64); 2] {
    let groups = [&partition.group0, &partition.group1];
    let mut totals = [(0.0, 0.0); 2];
    for i in 0..2 {
        let pool_weight: f64 = groups[i].iter().map(|&j| plan.pool[j].weight).sum();
        let pool_spread: f64 = groups[i].iter().map(|&j| plan.pool[j].spread).sum();
        let worker = &plan.workers[i];
        totals[i] = (
            worker.fixed_total() + pool_weight,
            worker.fixed_surprise_spread + pool_spread,
        );
    }
    totals
}

fn group_names(plan: &DayPlan, partition: &Partition, worker: usize) -> Vec<String> {
    let group = if worker == 0 {
        &partition.group0
    } else {
        &partition.group1
    };
    group.iter().map(|&j| plan.pool[j].name.clone()).collect()
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "nothing".to_string()
    } else {
        names.join(", ")
    }
}
