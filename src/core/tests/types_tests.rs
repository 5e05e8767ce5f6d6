//! Tests for the recurrence model: patch merges, weekday toggling,
//! field retention across type switches, and the serialised wire shape.

use chrono::NaiveDate;

use crate::core::types::{DatePatch, Recurrence, RecurringDate};

/// Helper: a fully known selection, independent of today's date.
fn sample_selection() -> RecurringDate {
    RecurringDate {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        end_date: None,
        recurrence: Recurrence::None,
        weekly_days: vec![1, 3, 5],
        monthly_day: 12,
        monthly_week: Some(2),
        monthly_week_day: Some(4),
        yearly_month: 6,
        yearly_day: 4,
        occurrences: Some(1),
        never_ends: true,
    }
}

#[test]
fn test_apply_overwrites_only_patched_fields() {
    let original = sample_selection();
    let patch = DatePatch {
        recurrence: Some(Recurrence::Monthly),
        monthly_day: Some(20),
        ..DatePatch::default()
    };

    let merged = original.merged(&patch);

    assert_eq!(merged.recurrence, Recurrence::Monthly);
    assert_eq!(merged.monthly_day, 20);

    // Everything absent from the patch is untouched.
    assert_eq!(merged.start_date, original.start_date);
    assert_eq!(merged.end_date, original.end_date);
    assert_eq!(merged.weekly_days, original.weekly_days);
    assert_eq!(merged.monthly_week, original.monthly_week);
    assert_eq!(merged.monthly_week_day, original.monthly_week_day);
    assert_eq!(merged.yearly_month, original.yearly_month);
    assert_eq!(merged.yearly_day, original.yearly_day);
    assert_eq!(merged.occurrences, original.occurrences);
    assert_eq!(merged.never_ends, original.never_ends);
}

#[test]
fn test_empty_patch_is_identity() {
    let original = sample_selection();
    let merged = original.merged(&DatePatch::default());

    assert_eq!(merged, original);
}

#[test]
fn test_patch_can_clear_optional_fields() {
    let mut selection = sample_selection();
    selection.end_date = NaiveDate::from_ymd_opt(2025, 1, 1);

    selection.apply(&DatePatch {
        end_date: Some(None),
        monthly_week: Some(None),
        occurrences: Some(None),
        ..DatePatch::default()
    });

    assert!(selection.end_date.is_none());
    assert!(selection.monthly_week.is_none());
    assert!(selection.occurrences.is_none());
    // Clearing the ordinal week leaves the ordinal weekday alone.
    assert_eq!(selection.monthly_week_day, Some(4));
}

#[test]
fn test_toggle_weekday_removes_present_day() {
    let selection = sample_selection();

    assert_eq!(selection.toggled_weekly_days(3), vec![1, 5]);
}

#[test]
fn test_toggle_weekday_inserts_sorted() {
    let selection = sample_selection();

    assert_eq!(selection.toggled_weekly_days(0), vec![0, 1, 3, 5]);
    assert_eq!(selection.toggled_weekly_days(6), vec![1, 3, 5, 6]);
    assert_eq!(selection.toggled_weekly_days(2), vec![1, 2, 3, 5]);
}

#[test]
fn test_toggle_weekday_twice_restores_set() {
    let mut selection = sample_selection();
    let original_days = selection.weekly_days.clone();

    selection.weekly_days = selection.toggled_weekly_days(4);
    selection.weekly_days = selection.toggled_weekly_days(4);

    assert_eq!(selection.weekly_days, original_days);
}

#[test]
fn test_type_switch_retains_unrelated_fields() {
    let mut selection = sample_selection();
    selection.apply(&DatePatch {
        recurrence: Some(Recurrence::Yearly),
        ..DatePatch::default()
    });

    // Switching to yearly keeps the previously set monthly pattern.
    assert_eq!(selection.monthly_day, 12);
    assert_eq!(selection.monthly_week, Some(2));
    assert_eq!(selection.weekly_days, vec![1, 3, 5]);
}

#[test]
fn test_ends_on_without_prior_end_date_leaves_it_absent() {
    let mut selection = sample_selection();
    assert!(selection.end_date.is_none());

    // Selecting "ends on" only flips the flag; no default end date appears.
    selection.apply(&DatePatch {
        never_ends: Some(false),
        ..DatePatch::default()
    });

    assert!(!selection.never_ends);
    assert!(selection.end_date.is_none());
}

#[test]
fn test_never_ends_clears_end_date() {
    let mut selection = sample_selection();
    selection.never_ends = false;
    selection.end_date = NaiveDate::from_ymd_opt(2025, 6, 30);

    selection.apply(&DatePatch {
        never_ends: Some(true),
        end_date: Some(None),
        ..DatePatch::default()
    });

    assert!(selection.never_ends);
    assert!(selection.end_date.is_none());
}

#[test]
fn test_day_of_month_mode_clears_week_keeps_day() {
    let mut selection = sample_selection();
    selection.monthly_day = 17;

    // Day-of-month mode after week-of-month mode.
    selection.apply(&DatePatch {
        monthly_week: Some(None),
        ..DatePatch::default()
    });

    assert!(selection.monthly_week.is_none());
    assert_eq!(selection.monthly_day, 17);
}

#[test]
fn test_out_of_range_values_pass_through() {
    let mut selection = sample_selection();

    // No range validation in the merge path. Day 35 is stored as-is.
    selection.apply(&DatePatch {
        monthly_day: Some(35),
        yearly_day: Some(40),
        ..DatePatch::default()
    });

    assert_eq!(selection.monthly_day, 35);
    assert_eq!(selection.yearly_day, 40);
}

#[test]
fn test_serialised_field_names_are_camel_case() {
    let selection = sample_selection();
    let json = serde_json::to_value(&selection).unwrap();

    assert_eq!(json["startDate"], "2024-03-15");
    assert_eq!(json["recurrenceType"], "none");
    assert_eq!(json["weeklyDays"], serde_json::json!([1, 3, 5]));
    assert_eq!(json["monthlyWeekDay"], 4);
    assert_eq!(json["neverEnds"], true);
}

#[test]
fn test_selection_round_trips_through_json() {
    let selection = sample_selection();
    let json = serde_json::to_string(&selection).unwrap();
    let back: RecurringDate = serde_json::from_str(&json).unwrap();

    assert_eq!(back, selection);
}
