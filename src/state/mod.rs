// State management module.
// Holds the loading signal, panel flags, and list/filter state types.

pub mod date_range;
pub mod loader;
pub mod pagination;
pub mod panels;

pub use date_range::{DatePickerState, DateRange, PredefinedRange};
pub use loader::Loader;
pub use pagination::Pagination;
pub use panels::PanelState;
