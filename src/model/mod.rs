// File: ./src/model/mod.rs
pub mod day;
pub mod display;
pub mod entry;
pub mod selection;
pub mod time_range;

pub use day::Day;
pub use display::{DisplayFlags, DisplayRow};
pub use entry::{PendingSelection, SelectedDate};
pub use selection::{AddOutcome, SelectionList};
pub use time_range::TimeRange;
