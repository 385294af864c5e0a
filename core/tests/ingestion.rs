//! Keyfile validation and spreadsheet normalization.

use chrono::Weekday;
use dutysplit_core::error::SplitError;
use dutysplit_core::ingest::tables_from_csv;
use dutysplit_core::keyfile::ColumnMap;

const KEYFILE: &str = r#"{
    "assignees": "Who",
    "assignee team": "Team",
    "assignee day": "Day",
    "surprise sources": "Surprise",
    "surprise day": "SurpriseDay",
    "task sources": "Source",
    "task number": "Tasks",
    "known task team": "Owner",
    "surprise profile": "Profile",
    "surprise distribution team": "DistTeam",
    "surprise distribution data": "DistData"
}"#;

const SPREADSHEET: &str = "\
Who,Team,Day,Surprise,SurpriseDay,Source,Tasks,Owner,Profile,DistTeam,DistData
Alice,team1,Saturday,task a,Friday,task a,1,team1,p1,p1,1|3|5
Bob,team2,Saturday,task d,Friday,task b,2,team1,p1,p2,\"1,2,2,3\"
,,,task c,Saturday,task c,5,team2,p2,,
,,,,,task d,4,team3,p1,,
";

fn column_map() -> ColumnMap {
    ColumnMap::from_json(KEYFILE).unwrap()
}

/// A complete keyfile maps every logical name onto the caller's header.
#[test]
fn keyfile_maps_logical_names() {
    let map = column_map();

    assert_eq!(map.assignee, "Who");
    assert_eq!(map.duty_count, "Tasks");
    assert_eq!(map.profile_data, "DistData");
}

/// A missing logical name is reported by name.
#[test]
fn keyfile_missing_name_rejected() {
    let text = KEYFILE.replace("\"task number\": \"Tasks\",", "");

    let err = ColumnMap::from_json(&text).unwrap_err();

    match err {
        SplitError::Keyfile(msg) => {
            assert!(msg.contains("task number"), "Unhelpful message: {msg}")
        }
        other => panic!("Expected Keyfile, got {other}"),
    }
}

/// Unrecognised keys fail the exact-set check.
#[test]
fn keyfile_extra_key_rejected() {
    let text = KEYFILE.replace(
        "\"assignees\": \"Who\",",
        "\"assignees\": \"Who\", \"coffee duty\": \"Coffee\",",
    );

    let err = ColumnMap::from_json(&text).unwrap_err();

    assert!(matches!(err, SplitError::Keyfile(_)), "{err}");
}

/// The keyfile must be a JSON object, and headers must be non-empty
/// strings.
#[test]
fn keyfile_shape_validated() {
    let err = ColumnMap::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, SplitError::Keyfile(_)));

    let text = KEYFILE.replace("\"Who\"", "\"\"");
    let err = ColumnMap::from_json(&text).unwrap_err();
    assert!(matches!(err, SplitError::Keyfile(_)));

    let text = KEYFILE.replace("\"Who\"", "7");
    let err = ColumnMap::from_json(&text).unwrap_err();
    assert!(matches!(err, SplitError::Keyfile(_)));
}

/// Unparseable keyfile text surfaces as a serialization error.
#[test]
fn keyfile_bad_json_is_serialization_error() {
    let err = ColumnMap::from_json("{not json").unwrap_err();

    assert!(matches!(err, SplitError::Serialization(_)), "{err}");
}

/// The four column groups are sliced independently: a row counts for a
/// group only when all of that group's cells are filled.
#[test]
fn groups_extracted_independently() {
    let tables = tables_from_csv(SPREADSHEET, &column_map()).unwrap();

    assert_eq!(tables.roster.len(), 2);
    assert_eq!(tables.duties.len(), 4);
    assert_eq!(tables.surprises.len(), 3);
}

/// Roster rows record the performed day; records carry the generation day,
/// one weekday earlier.
#[test]
fn performed_day_shifts_back_one() {
    let tables = tables_from_csv(SPREADSHEET, &column_map()).unwrap();

    for person in &tables.roster {
        assert_eq!(
            person.day,
            Weekday::Fri,
            "{} works Saturday, so their tasks generate Friday",
            person.name
        );
    }
}

/// Each surprise takes its team from the owning duty and its statistics
/// from that duty's profile.
#[test]
fn surprises_join_duty_and_profile() {
    let tables = tables_from_csv(SPREADSHEET, &column_map()).unwrap();

    let task_a = &tables.surprises[0];
    assert_eq!(task_a.source, "task a");
    assert_eq!(task_a.team, "team1");
    assert_eq!(task_a.mean, 3.0, "p1 = 1|3|5");
    assert_eq!(task_a.spread, 2.5);

    let task_c = &tables.surprises[2];
    assert_eq!(task_c.team, "team2");
    assert_eq!(task_c.day, Weekday::Sat);
    assert_eq!(task_c.mean, 2.0, "p2 = 1,2,2,3");
    assert_eq!(task_c.spread, 1.4);
}

/// Quoted cells carry the comma form of a distribution literal intact.
#[test]
fn quoted_profile_cells_parse() {
    let tables = tables_from_csv(SPREADSHEET, &column_map()).unwrap();

    let task_c = tables
        .surprises
        .iter()
        .find(|s| s.source == "task c")
        .unwrap();
    assert_eq!(task_c.mean, 2.0);
    assert_eq!(task_c.spread, 1.4);
}

/// A surprise source that joins no duty is a hard lookup failure.
#[test]
fn unknown_surprise_source_fails() {
    let text = SPREADSHEET.replace("task d,Friday", "phantom,Friday");

    let err = tables_from_csv(&text, &column_map()).unwrap_err();

    assert!(matches!(err, SplitError::Lookup { .. }), "{err}");
}

/// A duty profile label with no distribution row is a hard lookup failure.
#[test]
fn unknown_profile_label_fails() {
    let text = SPREADSHEET.replace("task a,1,team1,p1", "task a,1,team1,p9");

    let err = tables_from_csv(&text, &column_map()).unwrap_err();

    assert!(matches!(err, SplitError::Lookup { .. }), "{err}");
}

/// Unparseable day and number cells are spreadsheet errors.
#[test]
fn bad_cells_reported_as_spreadsheet_errors() {
    let bad_day = SPREADSHEET.replace("Alice,team1,Saturday", "Alice,team1,Noday");
    let err = tables_from_csv(&bad_day, &column_map()).unwrap_err();
    assert!(matches!(err, SplitError::Spreadsheet(_)), "{err}");

    let bad_count = SPREADSHEET.replace("task b,2,team1", "task b,many,team1");
    let err = tables_from_csv(&bad_count, &column_map()).unwrap_err();
    assert!(matches!(err, SplitError::Spreadsheet(_)), "{err}");
}

/// A mapped column missing from the header is reported before any rows
/// are read.
#[test]
fn missing_mapped_column_fails() {
    let text = SPREADSHEET.replace("Tasks", "Counts");

    let err = tables_from_csv(&text, &column_map()).unwrap_err();

    match err {
        SplitError::Spreadsheet(msg) => {
            assert!(msg.contains("Tasks"), "Unhelpful message: {msg}")
        }
        other => panic!("Expected Spreadsheet, got {other}"),
    }
}

/// Day names parse case-insensitively, long or short form.
#[test]
fn day_cells_parse_flexibly() {
    let text = SPREADSHEET
        .replace("Alice,team1,Saturday", "Alice,team1,saturday")
        .replace("Bob,team2,Saturday", "Bob,team2,SAT");

    let tables = tables_from_csv(&text, &column_map()).unwrap();

    assert!(tables.roster.iter().all(|p| p.day == Weekday::Fri));
}

/// An empty sheet has no header to resolve.
#[test]
fn empty_sheet_rejected() {
    let err = tables_from_csv("", &column_map()).unwrap_err();

    assert!(matches!(err, SplitError::Spreadsheet(_)));
}

/// A negative task number is rejected at the boundary.
#[test]
fn negative_task_number_rejected() {
    let text = SPREADSHEET.replace("task b,2,team1", "task b,-2,team1");

    let err = tables_from_csv(&text, &column_map()).unwrap_err();

    assert!(matches!(err, SplitError::Spreadsheet(_)), "{err}");
}
