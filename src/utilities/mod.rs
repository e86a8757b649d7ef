//! Utilities module
//!
//! Stateless helpers shared by the form, the view and the demo data.

pub mod event;
pub mod random;

pub use event::{
    duration_to_string, format_date, generate_random_time_range, is_future, is_past,
    is_present, replace_by_id, sort_by_day, sort_by_duration, sort_by_price, sort_events,
    DateFormat, SortType, TimeRange,
};
pub use random::{random_array_element, random_integer};
