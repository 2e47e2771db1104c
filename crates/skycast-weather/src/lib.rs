//! Weather data for SkyCast
//!
//! Wire types for the dashboard API, the HTTP client, and the reduction of
//! 3-hour forecast samples into daily summaries.

pub mod client;
pub mod daily;
pub mod icons;
pub mod location;
pub mod types;

pub use client::WeatherClient;
pub use daily::{reduce_to_daily_summaries, DailySummary, MAX_FORECAST_DAYS};
pub use icons::{icon_url, IconSize};
pub use location::LocationSource;
pub use types::*;
