//! plan-runner: command-line front end for the duty split planner.
//!
//! Usage:
//!   plan-runner --data rota.csv --key keymap.json
//!   plan-runner --data rota.csv --key keymap.json --top 3 --simple
//!   plan-runner --data rota.csv --key keymap.json --json

use anyhow::Result;
use dutysplit_core::{
    costs::{TargetDelta, WorkerLoad},
    ingest,
    keyfile::ColumnMap,
    plan::{self, DayPlan},
    pool::PoolEntry,
    report,
    split::ScoredPartition,
    types::weekday_name,
};
use std::env;

/// Machine-readable summary of one solved day, one JSON object per line.
#[derive(serde::Serialize)]
struct DaySummary<'a> {
    day: chrono::Weekday,
    performed: &'static str,
    workers: &'a [WorkerLoad],
    target: TargetDelta,
    pool: &'a [PoolEntry],
    splits: &'a [ScoredPartition],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data = args
        .windows(2)
        .find(|w| w[0] == "--data")
        .map(|w| w[1].as_str())
        .ok_or_else(|| anyhow::anyhow!("--data <spreadsheet.csv> is required"))?;
    let key = args
        .windows(2)
        .find(|w| w[0] == "--key")
        .map(|w| w[1].as_str())
        .ok_or_else(|| anyhow::anyhow!("--key <keyfile.json> is required"))?;
    let top = parse_arg(&args, "--top", 5usize);
    let simple = args.iter().any(|a| a == "--simple");
    let json = args.iter().any(|a| a == "--json");

    let map = ColumnMap::load(key)?;
    let tables = ingest::load_tables(data, &map)?;
    let outcomes = plan::plan_week(&tables.roster, &tables.duties, &tables.surprises, top)?;

    let mut failed = 0usize;
    for (day, outcome) in &outcomes {
        match outcome {
            Ok(day_plan) => emit(day_plan, simple, json)?,
            Err(e) => {
                failed += 1;
                log::error!("{}: {e}", weekday_name(*day));
            }
        }
    }
    if failed > 0 {
        log::warn!("{failed} of {} days could not be planned", outcomes.len());
    }
    Ok(())
}

fn emit(day_plan: &DayPlan, simple: bool, json: bool) -> Result<()> {
    if json {
        let summary = DaySummary {
            day: day_plan.day,
            performed: weekday_name(day_plan.day.succ()),
            workers: &day_plan.workers,
            target: day_plan.target,
            pool: &day_plan.pool,
            splits: &day_plan.ranked,
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else if simple {
        println!("{}:", weekday_name(day_plan.day.succ()));
        print!("{}", report::simple_report(day_plan));
    } else {
        print!("{}", report::full_report(day_plan));
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
