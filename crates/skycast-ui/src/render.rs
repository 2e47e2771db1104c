//! Plain-text rendering of the dashboard.

use std::fmt::Write;

use chrono::NaiveDate;
use skycast_weather::{icon_url, CurrentWeather, DailySummary, IconSize};

use crate::models::dashboard_model::DashboardModel;

const LOADING_TEXT: &str = "Loading weather data...";

/// Round to the nearest integer with halves going up (-2.5 becomes -2).
pub fn round_half_up(value: f64) -> i64 {
    let rounded = value.round();
    // f64::round sends negative halves away from zero
    if value < 0.0 && rounded - value == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "Monday, January 1, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Mon, Jan 1"
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

pub fn render_current(current: &CurrentWeather) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}, {}", current.city, current.country);
    let _ = writeln!(out, "  {}", icon_url(&current.icon, IconSize::Large));
    let _ = writeln!(
        out,
        "  {}°C  {}",
        round_half_up(current.temperature),
        capitalize_first(&current.description)
    );
    let _ = writeln!(out, "  Feels like {}°C", round_half_up(current.feels_like));
    let _ = writeln!(
        out,
        "  Humidity {}%   Pressure {} hPa   Wind {} m/s",
        current.humidity, current.pressure, current.wind_speed
    );
    out
}

pub fn render_forecast_card(day: &DailySummary) -> String {
    let sample = &day.sample;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<12}{:>5}  {}",
        format_card_date(day.date),
        format!("{}°C", round_half_up(sample.temperature)),
        sample.description
    );
    let _ = writeln!(out, "    {}", icon_url(&sample.icon, IconSize::Standard));
    let _ = writeln!(
        out,
        "    Humidity {}%  Wind {}m/s",
        sample.humidity, sample.wind_speed
    );
    out
}

/// Render the whole screen; `today` feeds the date header.
pub fn render_dashboard(model: &DashboardModel, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_long_date(today));
    let _ = writeln!(out);

    if model.is_loading() {
        let _ = writeln!(out, "{}", LOADING_TEXT);
    }

    if let Some(message) = model.error_message() {
        let _ = writeln!(out, "Error: {}", message);
    }

    if let Some(current) = model.current() {
        out.push_str(&render_current(current));
    }

    if let Some(days) = model.forecast() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}-Day Forecast", days.len());
        for day in days {
            out.push_str(&render_forecast_card(day));
        }
    }

    out
}
