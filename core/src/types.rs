//! Shared primitive types used across the entire planner.

use chrono::Weekday;

/// A team label. At most one team owns any given duty.
pub type Team = String;

/// The name a duty or a surprise is known by in the source tables.
pub type SourceName = String;

/// All weekdays in Monday-first order, for deterministic per-day iteration.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday. `Weekday`'s own `Display` prints the
/// three-letter form, which reports and spreadsheets do not use.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
