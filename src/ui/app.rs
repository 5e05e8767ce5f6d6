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

//! GTK4 Application wrapper
//!
//! Sets up the GTK4 application lifecycle and a demo window hosting the
//! picker, standing in for the page that would embed the widget.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (with the host's on_change callback)
//!   ├─ Builds demo window
//!   └─ Embeds RecurrencePicker wired to the Controller
//! ```

use gtk4::{prelude::*, Align, Application, ApplicationWindow, Label, Orientation};
use std::rc::Rc;

use crate::core::describe;
use crate::core::types::RecurringDate;
use crate::ui::components::RecurrencePicker;
use crate::ui::{Controller, PickerConfig};

/// GTK4 demo application hosting the recurring date picker
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Optional seed selection for the editing session
    initial_value: Option<RecurringDate>,
}

impl App {
    /// Creates a new App, optionally seeded with an initial selection.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recurring_date_picker::ui::App;
    ///
    /// let app = App::new(None);
    /// app.run(); // Blocks until window closes
    /// ```
    pub fn new(initial_value: Option<RecurringDate>) -> Self {
        let app = Application::builder()
            .application_id("io.github.recurring-date-picker")
            .build();

        Self { app, initial_value }
    }

    /// Runs the GTK4 application.
    ///
    /// Starts the GTK4 main loop; blocks until the window closes.
    pub fn run(self) {
        let initial_value = self.initial_value.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, initial_value.clone());
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[]);
    }

    /// Builds the demo window: the picker plus a label mirroring the
    /// emitted selection, standing in for an external consumer.
    fn build_ui(app: &Application, initial_value: Option<RecurringDate>) {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Recurring Date Picker")
            .default_width(420)
            .default_height(520)
            .build();

        let main_vbox = gtk4::Box::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(16)
            .margin_end(16)
            .margin_top(16)
            .margin_bottom(16)
            .build();

        let emitted_label = Label::builder()
            .label("No changes yet")
            .halign(Align::Start)
            .wrap(true)
            .build();

        // The host's change callback: every mutation lands here once.
        let emitted_for_change = emitted_label.clone();
        let controller = Rc::new(Controller::with_config(PickerConfig {
            initial_value,
            on_change: Some(Box::new(move |selection| {
                let summary = describe(selection);
                eprintln!("🔁 Selection changed: {}", summary);
                emitted_for_change.set_text(&format!("Last change: {}", summary));
            })),
        }));

        let picker = RecurrencePicker::new(controller.clone());
        main_vbox.append(picker.widget());
        main_vbox.append(&emitted_label);

        window.set_child(Some(&main_vbox));

        // Print the final selection when the demo session ends.
        window.connect_close_request(move |_| {
            eprintln!("👋 Final selection: {}", describe(&controller.selection()));
            glib::Propagation::Proceed
        });

        // Signal handlers hold weak picker references; tie the strong one
        // to the window so they stay live until it closes.
        window.connect_destroy(move |_| {
            let _ = &picker;
        });

        window.present();
    }
}
