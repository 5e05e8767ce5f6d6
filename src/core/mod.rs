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

//! src/core/mod.rs
//!
//! Core data-model module
//!
//! This module contains the recurrence model and its derivation rules:
//! - Type definitions for recurrence selections and partial patches
//! - Shallow-merge semantics for applying patches
//! - Summary-string derivation for the trigger button and CLI
//!
//! All model logic is isolated from UI concerns to enable unit testing
//! without requiring a display server.

pub mod summary;
pub mod types;

pub use summary::{describe, format_date, PLACEHOLDER};
pub use types::*;

#[cfg(test)]
mod tests;
