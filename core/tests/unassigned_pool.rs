//! The unassigned pool: ordering, merging, zero-weight elision.

use chrono::Weekday;
use dutysplit_core::assign::assign_fixed;
use dutysplit_core::costs::{assess_fixed_costs, WorkerLoad};
use dutysplit_core::pool::unassigned_pool;
use dutysplit_core::record::{Assignee, Duty, SurpriseDuty};

fn assignee(name: &str, team: &str, day: Weekday) -> Assignee {
    Assignee {
        name: name.to_string(),
        team: team.to_string(),
        day,
    }
}

fn duty(source: &str, count: f64, team: &str) -> Duty {
    Duty {
        source: source.to_string(),
        count,
        team: team.to_string(),
        profile: "p1".to_string(),
    }
}

fn surprise(source: &str, day: Weekday, team: &str, mean: f64, spread: f64) -> SurpriseDuty {
    SurpriseDuty {
        source: source.to_string(),
        day,
        team: team.to_string(),
        mean,
        spread,
    }
}

/// Rostered pair for Friday: Alice on team1, Bob on team2.
fn friday_pair(duties: &[Duty], surprises: &[SurpriseDuty]) -> Vec<WorkerLoad> {
    let roster = vec![
        assignee("Alice", "team1", Weekday::Fri),
        assignee("Bob", "team2", Weekday::Fri),
    ];
    let claims = assign_fixed(&roster, duties, surprises).unwrap();
    assess_fixed_costs(&claims, duties, surprises)
}

/// Claimed duties and claimed surprises never enter the pool.
#[test]
fn claimed_work_stays_out_of_pool() {
    let duties = vec![duty("task a", 1.0, "team1"), duty("task b", 5.0, "team2")];
    let surprises = vec![surprise("task a", Weekday::Fri, "team1", 2.0, 1.0)];
    let pair = friday_pair(&duties, &surprises);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &surprises);

    assert!(pool.is_empty(), "Everything is claimed, got {pool:?}");
}

/// Unclaimed duties come out first, in table order, with zero spread.
#[test]
fn unclaimed_duties_keep_table_order() {
    let duties = vec![
        duty("task a", 1.0, "team1"),
        duty("task d1", 4.0, "team3"),
        duty("task b", 5.0, "team2"),
        duty("task d2", 6.0, "team3"),
    ];
    let pair = friday_pair(&duties, &[]);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &[]);

    let names: Vec<&str> = pool.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["task d1", "task d2"]);
    assert!(pool.iter().all(|e| e.spread == 0.0));
}

/// An unclaimed surprise with the same name as an unclaimed duty merges
/// into it, adding weight and spread.
#[test]
fn surprise_merges_into_same_named_entry() {
    let duties = vec![
        duty("task a", 1.0, "team1"),
        duty("task b", 5.0, "team2"),
        duty("task d", 4.0, "team3"),
    ];
    let surprises = vec![surprise("task d", Weekday::Fri, "team3", 2.0, 1.6)];
    let pair = friday_pair(&duties, &surprises);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &surprises);

    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].name, "task d");
    assert_eq!(pool[0].weight, 6.0, "4 fixed + 2 expected surprise tasks");
    assert_eq!(pool[0].spread, 1.6);
}

/// An unclaimed surprise with no same-named entry is appended after the
/// duties.
#[test]
fn lone_surprise_appends_after_duties() {
    let duties = vec![
        duty("task a", 1.0, "team1"),
        duty("task b", 5.0, "team2"),
        duty("task d", 4.0, "team3"),
    ];
    let surprises = vec![surprise("task x", Weekday::Fri, "team4", 2.0, 0.8)];
    let pair = friday_pair(&duties, &surprises);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &surprises);

    let names: Vec<&str> = pool.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["task d", "task x"]);
}

/// Only the requested day's surprises are considered.
#[test]
fn other_days_surprises_ignored() {
    let duties = vec![duty("task a", 1.0, "team1"), duty("task b", 5.0, "team2")];
    let surprises = vec![surprise("task x", Weekday::Sat, "team4", 2.0, 0.8)];
    let pair = friday_pair(&duties, &surprises);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &surprises);

    assert!(
        pool.is_empty(),
        "Saturday's surprise must not pool on Friday"
    );
}

/// Entries whose merged weight is exactly zero are dropped, after merging.
/// A zero-count duty revived by a surprise stays; a zero-mean surprise
/// with nothing to merge into goes.
#[test]
fn zero_weight_entries_dropped_after_merge() {
    let duties = vec![
        duty("task a", 1.0, "team1"),
        duty("task b", 5.0, "team2"),
        duty("ghost", 0.0, "team3"),
        duty("revived", 0.0, "team3"),
    ];
    let surprises = vec![
        surprise("revived", Weekday::Fri, "team3", 0.5, 0.4),
        surprise("null", Weekday::Fri, "team4", 0.0, 0.7),
    ];
    let pair = friday_pair(&duties, &surprises);

    let pool = unassigned_pool(Weekday::Fri, &pair, &duties, &surprises);

    let names: Vec<&str> = pool.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["revived"], "ghost and null both weigh zero");
    assert_eq!(pool[0].weight, 0.5);
    assert_eq!(pool[0].spread, 0.4);
}
