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

//! GTK4 user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: the recurrence selection and its merge rules (in `core`)
//! - **View**: GTK4 components (in `components/` submodule)
//! - **Controller**: the state store mediating all mutation (`controller.rs`)
//!
//! # Wiring contract
//!
//! Every component takes its `Rc<Controller>` at construction; there is no
//! ambient lookup. The original "must be used within a provider" runtime
//! check is therefore a constructor precondition here: a component cannot
//! exist without an active store, and misuse fails to compile rather than
//! at runtime.
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── app.rs          // GTK4 Application demo window
//! ├── controller.rs   // State store (selection + open flag + callbacks)
//! └── components/     // Picker widget and its panel sections
//! ```

pub mod app;
pub mod components;
pub mod controller;

pub use {
    app::App,
    components::RecurrencePicker,
    controller::{Controller, PickerConfig},
};

#[cfg(test)]
mod tests;
