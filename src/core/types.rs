//! src/core/types.rs
//!
//! Core type definitions for the recurrence data model
//!
//! This module defines the fundamental types used throughout the widget:
//! - `Recurrence`: The repetition pattern (none, daily, weekly, monthly, yearly)
//! - `RecurringDate`: Complete recurrence selection with termination rules
//! - `DatePatch`: Partial update merged over an existing selection
//!
//! The model performs no range validation: out-of-range values (for example
//! a day-of-month of 35) are stored and emitted as-is, and downstream
//! consumers of the selection are responsible for rejecting them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Repetition pattern for a recurring date
///
/// `None` means the selection is a plain single date. All other variants
/// carry their pattern details in separate [`RecurringDate`] fields, which
/// are retained (but ignored) while a different variant is active.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Single, non-repeating date
    #[default]
    None,
    /// Every day
    Daily,
    /// Selected weekdays each week
    Weekly,
    /// Day-of-month or ordinal week-of-month pattern
    Monthly,
    /// Fixed month and day each year
    Yearly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::None => write!(f, "none"),
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
            Recurrence::Yearly => write!(f, "yearly"),
        }
    }
}

/// Errors from parsing model fields out of user-supplied text (CLI flags).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Recurrence word is not one of none/daily/weekly/monthly/yearly.
    #[error("Unknown recurrence type: {0}")]
    UnknownRecurrence(String),
    /// Weekday name not recognised (expects Sun..Sat, full or abbreviated).
    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),
}

impl FromStr for Recurrence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(ParseError::UnknownRecurrence(other.to_string())),
        }
    }
}

/// A complete recurrence selection
///
/// This is the single entity the widget edits. It is created with a default
/// value when the editor mounts, mutated in place through [`DatePatch`]
/// merges for the life of the editing session, and handed to the external
/// consumer on every change.
///
/// # Field retention
///
/// Fields irrelevant to the current `recurrence` keep their stored value:
/// switching from monthly to yearly does not clear `monthly_day`. The one
/// exclusivity rule is the monthly mode: presence of `monthly_week` selects
/// the ordinal week-of-month pattern, absence selects the day-of-month
/// pattern.
///
/// # Example
/// ```
/// use recurring_date_picker::core::types::{Recurrence, RecurringDate};
/// use chrono::NaiveDate;
///
/// let selection = RecurringDate {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
///     recurrence: Recurrence::Weekly,
///     weekly_days: vec![1, 3, 5],
///     ..RecurringDate::default()
/// };
/// assert!(selection.never_ends);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDate {
    /// First occurrence / anchor date. `None` renders the placeholder text.
    pub start_date: Option<NaiveDate>,

    /// Last occurrence date. Only meaningful while `never_ends` is false.
    pub end_date: Option<NaiveDate>,

    /// Repetition pattern
    #[serde(rename = "recurrenceType")]
    pub recurrence: Recurrence,

    /// Weekday indices 0-6, Sunday-first. Kept sorted ascending by the
    /// toggle operation.
    pub weekly_days: Vec<u8>,

    /// Day-of-month pattern (1-31), active while `monthly_week` is absent
    pub monthly_day: u32,

    /// Ordinal week of month (1-5). Presence selects week-of-month mode.
    pub monthly_week: Option<u32>,

    /// Weekday (0-6) within the ordinal week
    pub monthly_week_day: Option<u8>,

    /// Month for the yearly pattern (0-11)
    pub yearly_month: u32,

    /// Day-of-month for the yearly pattern (1-31)
    pub yearly_day: u32,

    /// Occurrence count limit. Stored and emitted but not surfaced by the
    /// current controls.
    pub occurrences: Option<u32>,

    /// Whether termination is open-ended
    pub never_ends: bool,
}

impl Default for RecurringDate {
    /// Seed value used when the editor mounts without an initial value:
    /// today's date, no recurrence, never ends, pattern fields at their
    /// control defaults.
    fn default() -> Self {
        Self {
            start_date: Some(chrono::Local::now().date_naive()),
            end_date: None,
            recurrence: Recurrence::None,
            weekly_days: Vec::new(),
            monthly_day: 1,
            monthly_week: Some(1),
            monthly_week_day: Some(0),
            yearly_month: 0,
            yearly_day: 1,
            occurrences: Some(1),
            never_ends: true,
        }
    }
}

impl RecurringDate {
    /// Shallow-merges `patch` into this selection.
    ///
    /// Fields present in the patch overwrite the stored value; absent
    /// fields are untouched. No validation is performed: inconsistent
    /// partial states (e.g. `monthly_week` set without `monthly_week_day`)
    /// persist until a later patch fixes them. It is the editor's job to
    /// always supply consistent patches.
    pub fn apply(&mut self, patch: &DatePatch) {
        if let Some(start_date) = &patch.start_date {
            self.start_date = *start_date;
        }
        if let Some(end_date) = &patch.end_date {
            self.end_date = *end_date;
        }
        if let Some(recurrence) = patch.recurrence {
            self.recurrence = recurrence;
        }
        if let Some(weekly_days) = &patch.weekly_days {
            self.weekly_days = weekly_days.clone();
        }
        if let Some(monthly_day) = patch.monthly_day {
            self.monthly_day = monthly_day;
        }
        if let Some(monthly_week) = patch.monthly_week {
            self.monthly_week = monthly_week;
        }
        if let Some(monthly_week_day) = patch.monthly_week_day {
            self.monthly_week_day = monthly_week_day;
        }
        if let Some(yearly_month) = patch.yearly_month {
            self.yearly_month = yearly_month;
        }
        if let Some(yearly_day) = patch.yearly_day {
            self.yearly_day = yearly_day;
        }
        if let Some(occurrences) = patch.occurrences {
            self.occurrences = occurrences;
        }
        if let Some(never_ends) = patch.never_ends {
            self.never_ends = never_ends;
        }
    }

    /// Returns a copy of this selection with `patch` merged in.
    pub fn merged(&self, patch: &DatePatch) -> Self {
        let mut merged = self.clone();
        merged.apply(patch);
        merged
    }

    /// Returns the weekly day set with `day` toggled.
    ///
    /// If `day` is present it is removed; otherwise it is inserted and the
    /// set is re-sorted ascending by numeric index. Toggling the same day
    /// twice returns the set to its original content and order.
    pub fn toggled_weekly_days(&self, day: u8) -> Vec<u8> {
        let mut days = self.weekly_days.clone();
        if let Some(position) = days.iter().position(|&d| d == day) {
            days.remove(position);
        } else {
            days.push(day);
            days.sort_unstable();
        }
        days
    }
}

/// Partial update over a [`RecurringDate`]
///
/// Every field is optional; `None` means "leave the stored value alone".
/// Fields that are themselves optional in the model are doubly wrapped so
/// a patch can distinguish "untouched" (`None`) from "clear" (`Some(None)`).
///
/// # Example
/// ```
/// use recurring_date_picker::core::types::{DatePatch, RecurringDate};
///
/// // Switch to never-ending and drop any chosen end date.
/// let patch = DatePatch {
///     never_ends: Some(true),
///     end_date: Some(None),
///     ..DatePatch::default()
/// };
///
/// let mut selection = RecurringDate::default();
/// selection.apply(&patch);
/// assert!(selection.never_ends);
/// assert!(selection.end_date.is_none());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DatePatch {
    /// New anchor date (`Some(None)` clears it)
    pub start_date: Option<Option<NaiveDate>>,
    /// New end date (`Some(None)` clears it)
    pub end_date: Option<Option<NaiveDate>>,
    /// New repetition pattern
    pub recurrence: Option<Recurrence>,
    /// Replacement weekly day set
    pub weekly_days: Option<Vec<u8>>,
    /// New day-of-month pattern
    pub monthly_day: Option<u32>,
    /// New ordinal week (`Some(None)` selects day-of-month mode)
    pub monthly_week: Option<Option<u32>>,
    /// New ordinal weekday
    pub monthly_week_day: Option<Option<u8>>,
    /// New yearly month index
    pub yearly_month: Option<u32>,
    /// New yearly day
    pub yearly_day: Option<u32>,
    /// New occurrence limit
    pub occurrences: Option<Option<u32>>,
    /// New termination flag
    pub never_ends: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_display() {
        assert_eq!(format!("{}", Recurrence::None), "none");
        assert_eq!(format!("{}", Recurrence::Weekly), "weekly");
        assert_eq!(format!("{}", Recurrence::Yearly), "yearly");
    }

    #[test]
    fn test_recurrence_from_str() {
        assert_eq!("monthly".parse(), Ok(Recurrence::Monthly));
        assert_eq!("DAILY".parse(), Ok(Recurrence::Daily));

        let err = "fortnightly".parse::<Recurrence>();
        assert_eq!(
            err,
            Err(ParseError::UnknownRecurrence("fortnightly".to_string()))
        );
    }

    #[test]
    fn test_default_selection() {
        let selection = RecurringDate::default();

        assert!(selection.start_date.is_some());
        assert_eq!(selection.recurrence, Recurrence::None);
        assert!(selection.never_ends);
        assert!(selection.weekly_days.is_empty());
        assert_eq!(selection.monthly_day, 1);
    }
}
