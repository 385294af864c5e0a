//! Spreadsheet ingestion.
//!
//! One CSV file carries four column groups side by side: the duty roster,
//! the recurring duty table, the surprise table, and the distribution
//! profiles. A row belongs to a group only when every cell of that group is
//! filled in; groups are otherwise independent of row position.
//!
//! Normalization performed here, and only here:
//!   - surprise sources join their owning duty for team and profile label,
//!     and the profile supplies the surprise's mean and spread
//!   - roster rows record the day the work is performed; the pipeline keys
//!     by the day it is generated, one weekday earlier
//!
//! Past this module everything is a typed record and nothing re-reads the
//! spreadsheet.

use crate::{
    error::{SplitError, SplitResult},
    keyfile::ColumnMap,
    profile::DistributionProfile,
    record::{Assignee, Duty, SurpriseDuty},
};
use chrono::Weekday;
use std::collections::HashMap;
use std::str::FromStr;

/// The three normalized source tables, ready for the pipeline.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub roster: Vec<Assignee>,
    pub duties: Vec<Duty>,
    pub surprises: Vec<SurpriseDuty>,
}

/// Load and normalize a spreadsheet from disk.
pub fn load_tables(path: &str, map: &ColumnMap) -> SplitResult<SourceTables> {
    let content = std::fs::read_to_string(path).map_err(|source| SplitError::Io {
        path: path.to_string(),
        source,
    })?;
    tables_from_csv(&content, map)
}

/// Normalize spreadsheet text. Error messages number rows from 1 counting
/// the header.
pub fn tables_from_csv(text: &str, map: &ColumnMap) -> SplitResult<SourceTables> {
    let rows = parse_csv(text);
    let (header, data) = match rows.split_first() {
        Some(split) => split,
        None => return Err(SplitError::Spreadsheet("missing header row".to_string())),
    };
    let columns = Columns::resolve(header, map)?;

    let mut roster = Vec::new();
    for (i, row) in data.iter().enumerate() {
        let name = cell(row, columns.assignee);
        let team = cell(row, columns.assignee_team);
        let day = cell(row, columns.assignee_day);
        if name.is_empty() || team.is_empty() || day.is_empty() {
            continue;
        }
        let performed = parse_weekday(day, i + 2)?;
        roster.push(Assignee {
            name: name.to_string(),
            team: team.to_string(),
            // Saturday's work is generated Friday, and so on around the week.
            day: performed.pred(),
        });
    }

    let mut duties = Vec::new();
    for (i, row) in data.iter().enumerate() {
        let source = cell(row, columns.duty_source);
        let count_text = cell(row, columns.duty_count);
        let team = cell(row, columns.duty_team);
        let profile = cell(row, columns.duty_profile);
        if source.is_empty() || count_text.is_empty() || team.is_empty() || profile.is_empty() {
            continue;
        }
        let count: f64 = count_text.trim().parse().map_err(|_| {
            SplitError::Spreadsheet(format!("row {}: '{count_text}' is not a number", i + 2))
        })?;
        if count < 0.0 {
            return Err(SplitError::Spreadsheet(format!(
                "row {}: task number {count} is negative",
                i + 2
            )));
        }
        duties.push(Duty {
            source: source.to_string(),
            count,
            team: team.to_string(),
            profile: profile.to_string(),
        });
    }

    let mut profiles: HashMap<String, DistributionProfile> = HashMap::new();
    for row in data {
        let label = cell(row, columns.profile_team);
        let literal = cell(row, columns.profile_data);
        if label.is_empty() || literal.is_empty() {
            continue;
        }
        // Last row wins on a duplicated label.
        profiles.insert(label.to_string(), DistributionProfile::parse(literal)?);
    }

    let mut surprises = Vec::new();
    for (i, row) in data.iter().enumerate() {
        let source = cell(row, columns.surprise_source);
        let day = cell(row, columns.surprise_day);
        if source.is_empty() || day.is_empty() {
            continue;
        }
        let day = parse_weekday(day, i + 2)?;
        let duty = duties
            .iter()
            .find(|d| d.source == source)
            .ok_or_else(|| SplitError::lookup("surprise", source, "duty"))?;
        let profile = profiles
            .get(&duty.profile)
            .ok_or_else(|| SplitError::lookup("profile", &duty.profile, "distribution row"))?;
        surprises.push(SurpriseDuty {
            source: source.to_string(),
            day,
            team: duty.team.clone(),
            mean: profile.rounded_mean(),
            spread: profile.spread(),
        });
    }

    log::info!(
        "ingest: {} roster entries, {} duties, {} surprises, {} profiles",
        roster.len(),
        duties.len(),
        surprises.len(),
        profiles.len(),
    );

    Ok(SourceTables {
        roster,
        duties,
        surprises,
    })
}

/// Resolved positions of the mapped columns in the header row.
struct Columns {
    assignee: usize,
    assignee_team: usize,
    assignee_day: usize,
    surprise_source: usize,
    surprise_day: usize,
    duty_source: usize,
    duty_count: usize,
    duty_team: usize,
    duty_profile: usize,
    profile_team: usize,
    profile_data: usize,
}

impl Columns {
    fn resolve(header: &[String], map: &ColumnMap) -> SplitResult<Self> {
        let index = |name: &str| -> SplitResult<usize> {
            header.iter().position(|h| h == name).ok_or_else(|| {
                SplitError::Spreadsheet(format!("column '{name}' not found in header"))
            })
        };
        Ok(Self {
            assignee: index(&map.assignee)?,
            assignee_team: index(&map.assignee_team)?,
            assignee_day: index(&map.assignee_day)?,
            surprise_source: index(&map.surprise_source)?,
            surprise_day: index(&map.surprise_day)?,
            duty_source: index(&map.duty_source)?,
            duty_count: index(&map.duty_count)?,
            duty_team: index(&map.duty_team)?,
            duty_profile: index(&map.duty_profile)?,
            profile_team: index(&map.profile_team)?,
            profile_data: index(&map.profile_data)?,
        })
    }
}

/// Rows can be ragged when trailing cells are empty.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn parse_weekday(text: &str, row: usize) -> SplitResult<Weekday> {
    Weekday::from_str(text.trim())
        .map_err(|_| SplitError::Spreadsheet(format!("row {row}: '{text}' is not a weekday")))
}

/// Minimal CSV splitting with double-quote support. Quoted fields may
/// contain commas and doubled quotes; fields never span lines. Blank lines
/// are skipped.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_csv_line)
        .collect()
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
