//! Monthly pattern section
//!
//! A radio pair switches between the two monthly modes: a fixed day of the
//! month, or an ordinal week plus weekday ("2nd Sunday"). Presence of the
//! stored ordinal week decides which mode is active; switching to day mode
//! clears it, switching to week mode fills in defaults only for fields not
//! already present.

use gtk4::{prelude::*, Align, Box as GtkBox, CheckButton, DropDown, Grid, Label, Orientation, SpinButton};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::summary::{ORDINALS, WEEKDAY_ABBREV};
use crate::core::types::DatePatch;
use crate::ui::Controller;

/// Monthly pattern controls shown while the recurrence type is monthly
pub struct MonthlySection {
    widget: GtkBox,
    day_mode_radio: CheckButton,
    week_mode_radio: CheckButton,
    /// Day-of-month controls, visible in day mode
    day_box: GtkBox,
    day_spin: SpinButton,
    /// Ordinal controls, visible in week mode
    week_grid: Grid,
    week_dropdown: DropDown,
    weekday_dropdown: DropDown,
    controller: Rc<Controller>,
    syncing: Cell<bool>,
}

impl MonthlySection {
    /// Creates the section and wires its handlers.
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .build();

        let heading = Label::builder()
            .label("Monthly Pattern")
            .halign(Align::Start)
            .build();
        heading.add_css_class("field-header");
        widget.append(&heading);

        let day_mode_radio = CheckButton::builder().label("Day of month").build();
        let week_mode_radio = CheckButton::builder().label("Week of month").build();
        week_mode_radio.set_group(Some(&day_mode_radio));
        widget.append(&day_mode_radio);
        widget.append(&week_mode_radio);

        // Day mode: a single 1-31 spinner.
        let day_box = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(4)
            .build();
        let day_label = Label::builder()
            .label("Day of Month")
            .halign(Align::Start)
            .build();
        let day_spin = SpinButton::with_range(1.0, 31.0, 1.0);
        day_box.append(&day_label);
        day_box.append(&day_spin);
        widget.append(&day_box);

        // Week mode: ordinal + weekday dropdowns side by side.
        let week_grid = Grid::builder().row_spacing(4).column_spacing(12).build();
        let week_label = Label::builder().label("Week").halign(Align::Start).build();
        let weekday_label = Label::builder().label("Day").halign(Align::Start).build();
        let week_dropdown = DropDown::from_strings(&ORDINALS);
        let weekday_dropdown = DropDown::from_strings(&WEEKDAY_ABBREV);
        week_grid.attach(&week_label, 0, 0, 1, 1);
        week_grid.attach(&weekday_label, 1, 0, 1, 1);
        week_grid.attach(&week_dropdown, 0, 1, 1, 1);
        week_grid.attach(&weekday_dropdown, 1, 1, 1, 1);
        widget.append(&week_grid);

        let section = Rc::new(Self {
            widget,
            day_mode_radio,
            week_mode_radio,
            day_box,
            day_spin,
            week_grid,
            week_dropdown,
            weekday_dropdown,
            controller,
            syncing: Cell::new(false),
        });

        {
            let weak = Rc::downgrade(&section);
            section.day_mode_radio.connect_toggled(move |radio| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() || !radio.is_active() {
                    return;
                }
                // Day mode: drop the ordinal week, keep everything else.
                section.controller.update(&DatePatch {
                    monthly_week: Some(None),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section.week_mode_radio.connect_toggled(move |radio| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() || !radio.is_active() {
                    return;
                }
                // Week mode: default to the 1st week, and to Sunday only
                // when no ordinal weekday was chosen before.
                let selection = section.controller.selection();
                section.controller.update(&DatePatch {
                    monthly_week: Some(Some(1)),
                    monthly_week_day: match selection.monthly_week_day {
                        Some(_) => None,
                        None => Some(Some(0)),
                    },
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
                    monthly_day: Some(spin.value() as u32),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section.week_dropdown.connect_selected_notify(move |dropdown| {
                let Some(section) = weak.upgrade() else { return };
                if section.syncing.get() {
                    return;
                }
                section.controller.update(&DatePatch {
                    monthly_week: Some(Some(dropdown.selected() + 1)),
                    ..DatePatch::default()
                });
            });
        }

        {
            let weak = Rc::downgrade(&section);
            section
                .weekday_dropdown
                .connect_selected_notify(move |dropdown| {
                    let Some(section) = weak.upgrade() else { return };
                    if section.syncing.get() {
                        return;
                    }
                    section.controller.update(&DatePatch {
                        monthly_week_day: Some(Some(dropdown.selected() as u8)),
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

    /// Re-reads the store and updates mode radios, control values, and
    /// which mode's controls are visible.
    pub fn refresh(&self) {
        let selection = self.controller.selection();
        let week_mode = selection.monthly_week.is_some();

        self.syncing.set(true);

        self.day_mode_radio.set_active(!week_mode);
        self.week_mode_radio.set_active(week_mode);
        self.day_box.set_visible(!week_mode);
        self.week_grid.set_visible(week_mode);

        self.day_spin.set_value(f64::from(selection.monthly_day));

        // Dropdown rows are 0-based; clamp stray stored values into range.
        let week_index = selection
            .monthly_week
            .unwrap_or(1)
            .saturating_sub(1)
            .min(ORDINALS.len() as u32 - 1);
        self.week_dropdown.set_selected(week_index);

        let weekday_index = u32::from(selection.monthly_week_day.unwrap_or(0))
            .min(WEEKDAY_ABBREV.len() as u32 - 1);
        self.weekday_dropdown.set_selected(weekday_index);

        self.syncing.set(false);
    }
}
