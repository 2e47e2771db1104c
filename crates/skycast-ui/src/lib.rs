pub mod app;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;

pub use app::DashboardApp;
pub use error_mapping::IntoAppError;
pub use models::dashboard_model::DashboardModel;
pub use services::{WeatherServiceMessage, EMPTY_CITY_MESSAGE};
