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

//! Recurring Date Picker
//!
//! A GTK4 form widget for selecting a date with an optional recurrence
//! rule (daily, weekly, monthly, yearly) and termination conditions
//! (never-ends vs. a chosen end date).
//!
//! # Features
//!
//! - **Recurrence model:** One selection struct, mutated through partial
//!   patches with shallow-merge semantics
//! - **Summary strings:** "Mar 15, 2024 (weekly: Mon, Wed, Fri)" derived
//!   from the current selection
//! - **Change notification:** A host-supplied callback fires synchronously
//!   after every mutation
//! - **GTK4 interface:** Trigger button with a dropdown editor panel,
//!   controls conditioned on the chosen recurrence type
//!
//! The widget holds its state in memory only: it computes no occurrence
//! dates, persists nothing, and leaves range validation to consumers of
//! the emitted selection.
//!
//! # Architecture
//!
//! - **`core`:** The data model (selection, patches, summary derivation)
//! - **`ui`:** GTK4 components around a shared state store (MVC pattern)
//!
//! # Examples
//!
//! ## Deriving a summary
//!
//! ```
//! use recurring_date_picker::core::{describe, Recurrence, RecurringDate};
//! use chrono::NaiveDate;
//!
//! let selection = RecurringDate {
//!     start_date: NaiveDate::from_ymd_opt(2024, 6, 10),
//!     recurrence: Recurrence::Yearly,
//!     yearly_month: 11,
//!     yearly_day: 25,
//!     ..RecurringDate::default()
//! };
//! assert_eq!(describe(&selection), "Jun 10, 2024 (yearly: Dec 25)");
//! ```
//!
//! ## Editing through the store
//!
//! ```
//! use recurring_date_picker::core::{DatePatch, Recurrence};
//! use recurring_date_picker::ui::{Controller, PickerConfig};
//!
//! let controller = Controller::with_config(PickerConfig {
//!     initial_value: None,
//!     on_change: Some(Box::new(|selection| {
//!         // Host page reacts to every change here.
//!         let _ = selection;
//!     })),
//! });
//!
//! controller.update(&DatePatch {
//!     recurrence: Some(Recurrence::Daily),
//!     ..DatePatch::default()
//! });
//! assert_eq!(controller.selection().recurrence, Recurrence::Daily);
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use recurring_date_picker::ui::App;
//!
//! let app = App::new(None);
//! app.run(); // Blocks until window closes
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{describe, DatePatch, Recurrence, RecurringDate};
