// Copyright 2025 recurring-date-picker contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller tests
//!
//! Tests for the state store: merge-and-replace semantics, notification
//! discipline, and the panel open flag.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;

use crate::core::types::{DatePatch, Recurrence, RecurringDate};
use crate::ui::{Controller, PickerConfig};

/// Helper: a controller whose callback counts invocations and records the
/// last emitted selection.
fn counting_controller() -> (Controller, Rc<Cell<usize>>, Rc<RefCell<Option<RecurringDate>>>) {
    let calls = Rc::new(Cell::new(0));
    let last = Rc::new(RefCell::new(None));

    let calls_in_cb = calls.clone();
    let last_in_cb = last.clone();
    let controller = Controller::with_config(PickerConfig {
        initial_value: None,
        on_change: Some(Box::new(move |selection| {
            calls_in_cb.set(calls_in_cb.get() + 1);
            *last_in_cb.borrow_mut() = Some(selection.clone());
        })),
    });

    (controller, calls, last)
}

#[test]
fn test_initial_value_is_honoured() {
    let seed = RecurringDate {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        recurrence: Recurrence::Daily,
        ..RecurringDate::default()
    };

    let controller = Controller::with_config(PickerConfig {
        initial_value: Some(seed.clone()),
        on_change: None,
    });

    assert_eq!(controller.selection(), seed);
}

#[test]
fn test_omitted_config_uses_defaults() {
    let controller = Controller::new();
    let selection = controller.selection();

    assert_eq!(selection.recurrence, Recurrence::None);
    assert!(selection.never_ends);
    assert!(!controller.is_open());
}

#[test]
fn test_update_merges_and_notifies_once() {
    let (controller, calls, last) = counting_controller();

    controller.update(&DatePatch {
        recurrence: Some(Recurrence::Weekly),
        weekly_days: Some(vec![2, 4]),
        ..DatePatch::default()
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(controller.selection().recurrence, Recurrence::Weekly);

    // The callback receives the post-merge value.
    let emitted = last.borrow().clone().unwrap();
    assert_eq!(emitted, controller.selection());
}

#[test]
fn test_noop_patch_still_notifies() {
    let (controller, calls, _) = counting_controller();
    let before = controller.selection();

    controller.update(&DatePatch::default());

    assert_eq!(controller.selection(), before);
    assert_eq!(calls.get(), 1, "Unchanged value must still fire exactly once");
}

#[test]
fn test_each_update_notifies_exactly_once() {
    let (controller, calls, _) = counting_controller();

    for _ in 0..5 {
        controller.update(&DatePatch {
            never_ends: Some(true),
            ..DatePatch::default()
        });
    }

    assert_eq!(calls.get(), 5, "Never batched or deduplicated");
}

#[test]
fn test_missing_callback_is_a_noop() {
    let controller = Controller::with_config(PickerConfig {
        initial_value: None,
        on_change: None,
    });

    // Must not panic or skip the merge.
    controller.update(&DatePatch {
        monthly_day: Some(9),
        ..DatePatch::default()
    });

    assert_eq!(controller.selection().monthly_day, 9);
}

#[test]
fn test_subscribers_run_after_external_callback() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let order_for_external = order.clone();
    let controller = Controller::with_config(PickerConfig {
        initial_value: None,
        on_change: Some(Box::new(move |_| {
            order_for_external.borrow_mut().push("external");
        })),
    });

    let order_for_view = order.clone();
    controller.connect_changed(move |_| {
        order_for_view.borrow_mut().push("view");
    });

    controller.update(&DatePatch::default());

    assert_eq!(*order.borrow(), vec!["external", "view"]);
}

#[test]
fn test_subscriber_may_read_store_during_notification() {
    let controller = Rc::new(Controller::new());
    let seen = Rc::new(RefCell::new(None));

    let controller_in_cb = controller.clone();
    let seen_in_cb = seen.clone();
    controller.connect_changed(move |_| {
        // Re-entrant read while a notification is in flight.
        *seen_in_cb.borrow_mut() = Some(controller_in_cb.selection());
    });

    controller.update(&DatePatch {
        recurrence: Some(Recurrence::Yearly),
        ..DatePatch::default()
    });

    let seen = seen.borrow().clone().unwrap();
    assert_eq!(seen.recurrence, Recurrence::Yearly);
}

#[test]
fn test_set_open_does_not_notify() {
    let (controller, calls, _) = counting_controller();

    controller.set_open(true);
    assert!(controller.is_open());

    controller.set_open(false);
    assert!(!controller.is_open());

    assert_eq!(calls.get(), 0, "Open flag is pure UI state");
}

#[test]
fn test_open_flag_does_not_touch_selection() {
    let controller = Controller::new();
    let before = controller.selection();

    controller.set_open(true);
    controller.set_open(false);

    assert_eq!(controller.selection(), before);
}
