//! Fixed assignment: which duties and surprises are already spoken for.
//!
//! Every duty is pinned to one team; whoever is rostered for that team
//! claims the team's duties on the day they work, plus any surprises pinned
//! to their (day, team). The duty table defines the team universe: a roster
//! entry for a team that owns no duty is malformed input. The reverse is
//! routine. A team with nobody rostered leaves its work unclaimed, and the
//! day's unassigned pool picks it up.

use crate::{
    error::{SplitError, SplitResult},
    record::{Assignee, Duty, SurpriseDuty},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One assignee together with everything they already have to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub assignee: Assignee,
    /// Sources of duties this person's team owns, in table order.
    pub duties: Vec<String>,
    /// Sources of surprises pinned to this person's (day, team), in table
    /// order. Empty when the day brings none.
    pub surprises: Vec<String>,
}

/// Build a claim set for every roster entry, in roster order.
///
/// Fails with `Lookup` if a roster entry names a team that owns no duty.
pub fn assign_fixed(
    roster: &[Assignee],
    duties: &[Duty],
    surprises: &[SurpriseDuty],
) -> SplitResult<Vec<ClaimSet>> {
    let duty_teams: BTreeSet<&str> = duties.iter().map(|d| d.team.as_str()).collect();
    for assignee in roster {
        if !duty_teams.contains(assignee.team.as_str()) {
            return Err(SplitError::lookup("team", &assignee.team, "duty table entry"));
        }
    }

    let claims: Vec<ClaimSet> = roster
        .iter()
        .map(|assignee| {
            let claimed_duties: Vec<String> = duties
                .iter()
                .filter(|d| d.team == assignee.team)
                .map(|d| d.source.clone())
                .collect();
            let claimed_surprises: Vec<String> = surprises
                .iter()
                .filter(|s| s.day == assignee.day && s.team == assignee.team)
                .map(|s| s.source.clone())
                .collect();
            ClaimSet {
                assignee: assignee.clone(),
                duties: claimed_duties,
                surprises: claimed_surprises,
            }
        })
        .collect();

    log::debug!("assign: built {} claim sets", claims.len());
    Ok(claims)
}
