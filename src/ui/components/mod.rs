//! UI Components
//!
//! GTK4 widgets making up the recurring date picker.
//!
//! # Components
//!
//! - `picker.rs` - Trigger button + dropdown editor panel (root widget)
//! - `weekly_section.rs` - Weekday toggle row
//! - `monthly_section.rs` - Day-of-month / week-of-month mode switch
//! - `yearly_section.rs` - Month and day controls
//! - `end_section.rs` - Never-ends / ends-on termination controls

mod end_section;
mod monthly_section;
mod picker;
mod weekly_section;
mod yearly_section;

pub use end_section::EndSection;
pub use monthly_section::MonthlySection;
pub use picker::RecurrencePicker;
pub use weekly_section::WeeklySection;
pub use yearly_section::YearlySection;
