//! Typed records for the three source tables.
//!
//! One spreadsheet row in, one record out. Joins (surprise source to owning
//! duty to distribution profile) happen once at ingestion; past that point
//! every record carries everything the pipeline needs and nothing is looked
//! up positionally.

use crate::types::{SourceName, Team};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One person on the duty roster for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub team: Team,
    /// Day the person's tasks are generated. Already shifted back from the
    /// recorded performed day at ingestion.
    pub day: Weekday,
}

/// A recurring duty, pinned to the single team that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duty {
    pub source: SourceName,
    /// Expected tasks per day. Non-negative.
    pub count: f64,
    pub team: Team,
    /// Label of the distribution profile governing this source's surprises.
    pub profile: String,
}

/// A surprise duty: known to occur on a given day, stochastic in volume.
/// `team`, `mean` and `spread` are derived at ingestion by joining the
/// source against the duty table and its profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurpriseDuty {
    pub source: SourceName,
    pub day: Weekday,
    pub team: Team,
    /// Profile mean, rounded to one decimal.
    pub mean: f64,
    /// Twice the profile's population standard deviation, rounded to one
    /// decimal.
    pub spread: f64,
}
