//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod username;
pub mod exercise;
pub mod calendar_date;
pub mod log_filter;

pub use validation::ValidationError;
pub use username::Username;
pub use exercise::{Description, Minutes};
pub use calendar_date::CalendarDate;
pub use log_filter::{DateComparison, LogFilter};
