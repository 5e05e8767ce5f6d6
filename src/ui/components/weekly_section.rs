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

//! Weekly pattern section
//!
//! Seven toggle buttons (Sun..Sat). Each click emits the toggled weekday
//! set as a patch; toggling the same day twice restores the original set.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation, ToggleButton};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::summary::WEEKDAY_ABBREV;
use crate::core::types::DatePatch;
use crate::ui::Controller;

/// Weekday toggle row shown while the recurrence type is weekly
pub struct WeeklySection {
    /// Root widget
    widget: GtkBox,
    /// One toggle per weekday, Sunday-first
    buttons: Vec<ToggleButton>,
    /// Shared state store
    controller: Rc<Controller>,
    /// Suppresses toggle handlers while refresh() writes widget state
    syncing: Cell<bool>,
}

impl WeeklySection {
    /// Creates the section and wires its toggle handlers.
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .build();

        let heading = Label::builder()
            .label("Days of Week")
            .halign(Align::Start)
            .build();
        heading.add_css_class("field-header");
        widget.append(&heading);

        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(4)
            .build();

        let mut buttons = Vec::with_capacity(WEEKDAY_ABBREV.len());
        for name in WEEKDAY_ABBREV {
            let button = ToggleButton::builder().label(name).build();
            row.append(&button);
            buttons.push(button);
        }
        widget.append(&row);

        let section = Rc::new(Self {
            widget,
            buttons,
            controller,
            syncing: Cell::new(false),
        });

        for (day, button) in section.buttons.iter().enumerate() {
            let weak = Rc::downgrade(&section);
            button.connect_toggled(move |_| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() {
                    return;
                }
                // Recompute from stored state; the guard above keeps the
                // stored set in step with the pre-click button state.
                let days = section
                    .controller
                    .selection()
                    .toggled_weekly_days(day as u8);
                section.controller.update(&DatePatch {
                    weekly_days: Some(days),
                    ..DatePatch::default()
                });
            });
        }

        section
    }

    /// Returns the root widget for adding to the panel.
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Re-reads the store and updates the toggle states.
    pub fn refresh(&self) {
        let selection = self.controller.selection();

        self.syncing.set(true);
        for (day, button) in self.buttons.iter().enumerate() {
            button.set_active(selection.weekly_days.contains(&(day as u8)));
        }
        self.syncing.set(false);
    }
}
