//! Human-readable summary derivation
//!
//! Turns a [`RecurringDate`] into the display string shown on the picker's
//! trigger button, e.g. `"Mar 15, 2024 (weekly: Mon, Wed, Fri)"`. The
//! derivation is a pure function of the selection. All names are fixed
//! en-US; the name tables are shared with the editor controls.

use chrono::{Datelike, NaiveDate};

use crate::core::types::{ParseError, Recurrence, RecurringDate};

/// Text shown while no start date is selected.
pub const PLACEHOLDER: &str = "Select recurring date";

/// Abbreviated weekday names, Sunday-first (matches the 0-6 day indices).
pub const WEEKDAY_ABBREV: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full weekday names, Sunday-first.
pub const WEEKDAY_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated month names (0-11 indices).
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names (0-11 indices), used by the yearly month dropdown.
pub const MONTH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordinal words for the week-of-month pattern (weeks 1-5).
pub const ORDINALS: [&str; 5] = ["1st", "2nd", "3rd", "4th", "5th"];

/// Formats a date as `<abbrev month> <day>, <year>` (e.g. "Mar 15, 2024").
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month0()),
        date.day(),
        date.year()
    )
}

/// Derives the summary string for a selection.
///
/// Rules:
/// 1. No start date: the placeholder text.
/// 2. Otherwise the formatted start date, and for a recurrence other than
///    `none` a parenthesised suffix: the type word plus its pattern detail
///    (weekly day names in stored order, monthly ordinal or day number,
///    yearly month and day). Daily has no detail beyond the type word.
///
/// Out-of-range indices degrade to a `?` placeholder; nothing here panics
/// or rejects.
pub fn describe(selection: &RecurringDate) -> String {
    let Some(start) = selection.start_date else {
        return PLACEHOLDER.to_string();
    };

    let mut text = format_date(start);

    if selection.recurrence == Recurrence::None {
        return text;
    }

    text.push_str(&format!(" ({}", selection.recurrence));

    match selection.recurrence {
        Recurrence::Weekly if !selection.weekly_days.is_empty() => {
            let names: Vec<&str> = selection
                .weekly_days
                .iter()
                .map(|&day| weekday_abbrev(day))
                .collect();
            text.push_str(&format!(": {}", names.join(", ")));
        }
        Recurrence::Monthly => {
            match (selection.monthly_week, selection.monthly_week_day) {
                (Some(week), Some(day)) => {
                    text.push_str(&format!(": {} {}", ordinal(week), weekday_full(day)));
                }
                _ => text.push_str(&format!(": day {}", selection.monthly_day)),
            }
        }
        Recurrence::Yearly => {
            text.push_str(&format!(
                ": {} {}",
                month_abbrev(selection.yearly_month),
                selection.yearly_day
            ));
        }
        _ => {}
    }

    text.push(')');
    text
}

/// Abbreviated weekday name for a 0-6 index.
pub fn weekday_abbrev(day: u8) -> &'static str {
    WEEKDAY_ABBREV.get(day as usize).copied().unwrap_or("?")
}

/// Full weekday name for a 0-6 index.
pub fn weekday_full(day: u8) -> &'static str {
    WEEKDAY_FULL.get(day as usize).copied().unwrap_or("?")
}

/// Abbreviated month name for a 0-11 index.
pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREV.get(month as usize).copied().unwrap_or("?")
}

/// Ordinal word for a 1-5 week number.
pub fn ordinal(week: u32) -> &'static str {
    week.checked_sub(1)
        .and_then(|index| ORDINALS.get(index as usize))
        .copied()
        .unwrap_or("?")
}

/// Parses a weekday name (full or abbreviated, any case) into its 0-6 index.
///
/// Used by the CLI's `--days` flag.
pub fn parse_weekday(name: &str) -> Result<u8, ParseError> {
    let lower = name.trim().to_lowercase();

    for (index, abbrev) in WEEKDAY_ABBREV.iter().enumerate() {
        if lower == abbrev.to_lowercase() || lower == WEEKDAY_FULL[index].to_lowercase() {
            // Table has 7 entries, so the index always fits.
            return Ok(index as u8);
        }
    }

    Err(ParseError::UnknownWeekday(name.trim().to_string()))
}
