//! Maps weather-crate errors to skycast_core::AppError for consistent banner messages.
//!
//! Both sides live in other crates, so the conversion is an extension trait
//! rather than `From`.

mod weather;

use skycast_core::AppError;

pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
