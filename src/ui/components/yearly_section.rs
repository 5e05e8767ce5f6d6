//! Yearly pattern section: a month dropdown and a 1-31 day spinner.

use gtk4::{prelude::*, Align, DropDown, Grid, Label, SpinButton};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::summary::MONTH_FULL;
use crate::core::types::DatePatch;
use crate::ui::Controller;

/// Yearly pattern controls shown while the recurrence type is yearly
pub struct YearlySection {
    widget: Grid,
    month_dropdown: DropDown,
    day_spin: SpinButton,
    controller: Rc<Controller>,
    syncing: Cell<bool>,
}

impl YearlySection {
    /// Creates the section and wires its handlers.
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let widget = Grid::builder().row_spacing(4).column_spacing(12).build();

        let month_label = Label::builder().label("Month").halign(Align::Start).build();
        let day_label = Label::builder().label("Day").halign(Align::Start).build();
        let month_dropdown = DropDown::from_strings(&MONTH_FULL);
        let day_spin = SpinButton::with_range(1.0, 31.0, 1.0);

        widget.attach(&month_label, 0, 0, 1, 1);
        widget.attach(&day_label, 1, 0, 1, 1);
        widget.attach(&month_dropdown, 0, 1, 1, 1);
        widget.attach(&day_spin, 1, 1, 1, 1);

        let section = Rc::new(Self {
            widget,
            month_dropdown,
            day_spin,
            controller,
            syncing: Cell::new(false),
        });

        {
            let weak = Rc::downgrade(&section);
            section.month_dropdown.connect_selected_notify(move |dropdown| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() {
                    return;
                }
                section.controller.update(&DatePatch {
                    yearly_month: Some(dropdown.selected()),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section.day_spin.connect_value_changed(move |spin| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() {
                    return;
                }
                section.controller.update(&DatePatch {
                    yearly_day: Some(spin.value() as u32),
                    ..DatePatch::default()
                });
            });
        }

        section
    }

    /// Returns the root widget for adding to the panel.
    pub fn widget(&self) -> &Grid {
        &self.widget
    }

    /// Re-reads the store and updates the month and day controls.
    pub fn refresh(&self) {
        let selection = self.controller.selection();

        self.syncing.set(true);
        self.month_dropdown
            .set_selected(selection.yearly_month.min(MONTH_FULL.len() as u32 - 1));
        self.day_spin.set_value(f64::from(selection.yearly_day));
        self.syncing.set(false);
    }
}
