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

//! Termination section
//!
//! Radio pair for "never ends" vs "ends on". Choosing never-ends clears
//! any chosen end date; choosing ends-on only flips the flag and keeps a
//! previously chosen end date (or leaves it absent until the user picks
//! one).

use chrono::NaiveDate;
use gtk4::{prelude::*, Box as GtkBox, CheckButton, Entry, Orientation};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::types::DatePatch;
use crate::ui::Controller;

/// Termination controls shown for any recurrence type other than none
pub struct EndSection {
    widget: GtkBox,
    never_radio: CheckButton,
    ends_radio: CheckButton,
    end_entry: Entry,
    controller: Rc<Controller>,
    syncing: Cell<bool>,
}

impl EndSection {
    /// Creates the section and wires its handlers.
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .build();

        let never_radio = CheckButton::builder().label("Never ends").build();
        let ends_radio = CheckButton::builder().label("Ends on").build();
        ends_radio.set_group(Some(&never_radio));
        widget.append(&never_radio);
        widget.append(&ends_radio);

        let end_entry = Entry::builder().placeholder_text("YYYY-MM-DD").build();
        widget.append(&end_entry);

        let section = Rc::new(Self {
            widget,
            never_radio,
            ends_radio,
            end_entry,
            controller,
            syncing: Cell::new(false),
        });

        {
            let weak = Rc::downgrade(&section);
            section.never_radio.connect_toggled(move |radio| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() || !radio.is_active() {
                    return;
                }
                section.controller.update(&DatePatch {
                    never_ends: Some(true),
                    end_date: Some(None),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section.ends_radio.connect_toggled(move |radio| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() || !radio.is_active() {
                    return;
                }
                // Flag only; a previously chosen end date is retained.
                section.controller.update(&DatePatch {
                    never_ends: Some(false),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section.end_entry.connect_changed(move |entry| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() {
                    return;
                }
                // Incomplete dates are ignored until they parse.
                let text = entry.text();
                if let Ok(date) = NaiveDate::parse_from_str(text.as_str(), "%Y-%m-%d") {
                    section.controller.update(&DatePatch {
                        end_date: Some(Some(date)),
                        ..DatePatch::default()
                    });
                }
            });
        }

        section
    }

    /// Returns the root widget for adding to the panel.
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Re-reads the store and updates radios and the end-date entry.
    pub fn refresh(&self) {
        let selection = self.controller.selection();

        self.syncing.set(true);

        self.never_radio.set_active(selection.never_ends);
        self.ends_radio.set_active(!selection.never_ends);
        self.end_entry.set_visible(!selection.never_ends);

        // Leave the entry alone while its text already names the stored
        // date, so refreshes don't fight the user's cursor.
        let shown = NaiveDate::parse_from_str(self.end_entry.text().as_str(), "%Y-%m-%d").ok();
        if shown != selection.end_date {
            match selection.end_date {
                Some(date) => self.end_entry.set_text(&date.format("%Y-%m-%d").to_string()),
                None => self.end_entry.set_text(""),
            }
        }

        self.syncing.set(false);
    }
}
