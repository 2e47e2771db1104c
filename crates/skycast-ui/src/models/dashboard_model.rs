//! Screen state of the dashboard.
//!
//! Sections keep their data when hidden; only the visibility flags change,
//! so a later banner never throws away what was last fetched.

use skycast_weather::{CurrentWeather, DailySummary};

use crate::services::WeatherServiceMessage;

#[derive(Debug, Default)]
pub struct DashboardModel {
    loading: bool,
    error_message: Option<String>,
    error_visible: bool,
    current: Option<CurrentWeather>,
    current_visible: bool,
    forecast: Vec<DailySummary>,
    forecast_visible: bool,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text, if the error banner is showing
    pub fn error_message(&self) -> Option<&str> {
        if self.error_visible {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    /// Current conditions, if that section is showing
    pub fn current(&self) -> Option<&CurrentWeather> {
        if self.current_visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Daily forecast cards, if that section is showing
    pub fn forecast(&self) -> Option<&[DailySummary]> {
        if self.forecast_visible {
            Some(&self.forecast)
        } else {
            None
        }
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
        self.hide_error();
        self.current_visible = false;
        self.forecast_visible = false;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.error_visible = true;
        self.current_visible = false;
        self.forecast_visible = false;
    }

    pub fn hide_error(&mut self) {
        self.error_visible = false;
    }

    pub fn display_current_weather(&mut self, data: CurrentWeather) {
        self.current = Some(data);
        self.current_visible = true;
        self.hide_error();
    }

    /// Replace the forecast cards. Callers pass already reduced days.
    pub fn display_forecast(&mut self, days: Vec<DailySummary>) {
        self.forecast = days;
        self.forecast_visible = true;
    }

    /// Update state from a service message.
    pub fn apply(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::Loading => self.show_loading(),
            WeatherServiceMessage::CurrentLoaded(data) => {
                self.hide_loading();
                self.display_current_weather(data);
            }
            WeatherServiceMessage::ForecastLoaded(days) => {
                self.hide_loading();
                self.display_forecast(days);
            }
            WeatherServiceMessage::Failed(e) => {
                tracing::warn!("Dashboard action failed: {}", e);
                self.hide_loading();
                self.show_error(&e.user_message());
            }
        }
    }
}
