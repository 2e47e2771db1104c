//! Centralized error types for SkyCast.
//!
//! Every failure of a dashboard action ends up as an [`AppError`], whose
//! [`AppError::user_message`] is the text shown in the error banner.

use thiserror::Error;

/// Banner text for failures with no more specific message
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected user input; no request was made
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Returns the message to display in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Network(e) => e.user_message().to_string(),
            AppError::Weather(e) => e.user_message(),
            AppError::Location(e) => e.user_message().to_string(),
            AppError::Config(e) => e.user_message().to_string(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors reported by the dashboard API or found in its data.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API answered `success: false`; holds its error text
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Invalid forecast data: {0}")]
    InvalidForecast(String),
}

impl WeatherError {
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::ApiError(msg) if !msg.is_empty() => msg.clone(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Geolocation errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    Denied,

    #[error("Location not supported")]
    Unsupported,

    #[error("Invalid location: {0}")]
    Invalid(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Denied | LocationError::Invalid(_) => {
                "Unable to get your location. Please search manually."
            }
            LocationError::Unsupported => "Geolocation is not supported on this system",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
