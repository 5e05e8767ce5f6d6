//! The picker widget: trigger button plus dropdown editor panel.
//!
//! The trigger shows the derived summary for the current selection and
//! opens the editor panel. The panel hosts the start-date entry, the
//! recurrence dropdown, the type-specific sections, the termination
//! controls, and a Done button. The panel never auto-closes on outside
//! clicks; only the trigger and Done drive the open flag.

use chrono::NaiveDate;
use gtk4::{
    prelude::*, Align, Box as GtkBox, Button, DropDown, Entry, Label, Orientation, Popover,
    Separator,
};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::summary::describe;
use crate::core::types::{DatePatch, Recurrence};
use crate::ui::components::{EndSection, MonthlySection, WeeklySection, YearlySection};
use crate::ui::Controller;

/// Dropdown rows for the recurrence type, in model order.
const RECURRENCE_OPTIONS: [&str; 5] = ["No Recurrence", "Daily", "Weekly", "Monthly", "Yearly"];

fn recurrence_at(index: u32) -> Recurrence {
    match index {
        1 => Recurrence::Daily,
        2 => Recurrence::Weekly,
        3 => Recurrence::Monthly,
        4 => Recurrence::Yearly,
        _ => Recurrence::None,
    }
}

fn recurrence_index(recurrence: Recurrence) -> u32 {
    match recurrence {
        Recurrence::None => 0,
        Recurrence::Daily => 1,
        Recurrence::Weekly => 2,
        Recurrence::Monthly => 3,
        Recurrence::Yearly => 4,
    }
}

/// Recurring date picker widget
///
/// Owns the trigger button, the popover panel, and the per-type sections.
/// All of them read and write the shared [`Controller`]; the picker
/// subscribes to the store and re-renders every view after each change.
pub struct RecurrencePicker {
    /// Root widget containing the trigger button
    widget: GtkBox,
    summary_label: Label,
    popover: Popover,
    start_entry: Entry,
    recurrence_dropdown: DropDown,
    weekly: Rc<WeeklySection>,
    monthly: Rc<MonthlySection>,
    yearly: Rc<YearlySection>,
    end: Rc<EndSection>,
    controller: Rc<Controller>,
    /// Suppresses input handlers while refresh() writes widget state
    syncing: Cell<bool>,
}

impl RecurrencePicker {
    /// Creates the picker around an existing store.
    ///
    /// The store must be handed over here; components never look one up
    /// from ambient state. The host keeps its own `Rc<Controller>` to read
    /// the selection or register for changes.
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        // Trigger: summary text plus a dropdown arrow.
        let summary_label = Label::builder()
            .label(describe(&controller.selection()))
            .halign(Align::Start)
            .hexpand(true)
            .ellipsize(gtk4::pango::EllipsizeMode::End)
            .build();

        let trigger_content = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(8)
            .build();
        trigger_content.append(&summary_label);
        trigger_content.append(&Label::new(Some("▾")));

        let trigger = Button::builder().child(&trigger_content).hexpand(true).build();

        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .build();
        widget.append(&trigger);

        // Panel contents.
        let panel = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let start_label = Label::builder()
            .label("Start Date")
            .halign(Align::Start)
            .build();
        start_label.add_css_class("field-header");
        let start_entry = Entry::builder().placeholder_text("YYYY-MM-DD").build();
        panel.append(&start_label);
        panel.append(&start_entry);

        let recurrence_label = Label::builder()
            .label("Recurrence")
            .halign(Align::Start)
            .build();
        recurrence_label.add_css_class("field-header");
        let recurrence_dropdown = DropDown::from_strings(&RECURRENCE_OPTIONS);
        panel.append(&recurrence_label);
        panel.append(&recurrence_dropdown);

        let weekly = WeeklySection::new(controller.clone());
        let monthly = MonthlySection::new(controller.clone());
        let yearly = YearlySection::new(controller.clone());
        let end = EndSection::new(controller.clone());
        panel.append(weekly.widget());
        panel.append(monthly.widget());
        panel.append(yearly.widget());
        panel.append(end.widget());

        panel.append(&Separator::new(Orientation::Horizontal));

        let done_button = Button::builder().label("Done").halign(Align::End).build();
        done_button.add_css_class("suggested-action");
        panel.append(&done_button);

        // No autohide: the panel stays open on outside clicks and only
        // the trigger and Done close it.
        let popover = Popover::builder().autohide(false).build();
        popover.set_parent(&trigger);
        popover.set_child(Some(&panel));

        let picker = Rc::new(Self {
            widget,
            summary_label,
            popover,
            start_entry,
            recurrence_dropdown,
            weekly,
            monthly,
            yearly,
            end,
            controller,
            syncing: Cell::new(false),
        });

        {
            let weak = Rc::downgrade(&picker);
            trigger.connect_clicked(move |_| {
                let Some(picker) = weak.upgrade() else { return };
                if picker.controller.is_open() {
                    picker.controller.set_open(false);
                    picker.popover.popdown();
                } else {
                    picker.controller.set_open(true);
                    picker.refresh();
                    picker.popover.popup();
                }
            });
        }

        {
            let weak = Rc::downgrade(&picker);
            done_button.connect_clicked(move |_| {
                let Some(picker) = weak.upgrade() else { return };
                picker.controller.set_open(false);
                picker.popover.popdown();
            });
        }

        {
            let weak = Rc::downgrade(&picker);
            picker.start_entry.connect_changed(move |entry| {
                let Some(picker) = weak.upgrade() else { return };
                if picker.syncing.get() {
                    return;
                }
                // Incomplete dates are ignored until they parse.
                let text = entry.text();
                if let Ok(date) = NaiveDate::parse_from_str(text.as_str(), "%Y-%m-%d") {
                    picker.controller.update(&DatePatch {
                        start_date: Some(Some(date)),
                        ..DatePatch::default()
                    });
                }
            });
        }

        {
            let weak = Rc::downgrade(&picker);
            picker
                .recurrence_dropdown
                .connect_selected_notify(move |dropdown| {
                    let Some(picker) = weak.upgrade() else { return };
                    if picker.syncing.get() {
                        return;
                    }
                    picker.controller.update(&DatePatch {
                        recurrence: Some(recurrence_at(dropdown.selected())),
                        ..DatePatch::default()
                    });
                });
        }

        // Re-render all views after every store change, whatever its
        // source (panel controls or the host application).
        {
            let weak = Rc::downgrade(&picker);
            picker.controller.connect_changed(move |_| {
                if let Some(picker) = weak.upgrade() {
                    picker.refresh();
                }
            });
        }

        picker.refresh();
        picker
    }

    /// Returns the root widget for adding to the host window.
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Re-reads the store and updates every view: summary text, panel
    /// controls, and which sections are visible for the current type.
    pub fn refresh(&self) {
        let selection = self.controller.selection();

        self.syncing.set(true);

        self.summary_label.set_text(&describe(&selection));

        // Leave the entry alone while its text already names the stored
        // date, so refreshes don't fight the user's cursor.
        let shown = NaiveDate::parse_from_str(self.start_entry.text().as_str(), "%Y-%m-%d").ok();
        if shown != selection.start_date {
            match selection.start_date {
                Some(date) => self
                    .start_entry
                    .set_text(&date.format("%Y-%m-%d").to_string()),
                None => self.start_entry.set_text(""),
            }
        }

        self.recurrence_dropdown
            .set_selected(recurrence_index(selection.recurrence));

        self.weekly
            .widget()
            .set_visible(selection.recurrence == Recurrence::Weekly);
        self.monthly
            .widget()
            .set_visible(selection.recurrence == Recurrence::Monthly);
        self.yearly
            .widget()
            .set_visible(selection.recurrence == Recurrence::Yearly);
        self.end
            .widget()
            .set_visible(selection.recurrence != Recurrence::None);

        self.weekly.refresh();
        self.monthly.refresh();
        self.yearly.refresh();
        self.end.refresh();

        self.syncing.set(false);
    }
}
