//! Dashboard API client.
//!
//! Every endpoint answers with a `{ success, data, error }` envelope, including
//! on 4xx/5xx, so bodies are decoded before the status is considered.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::types::{ApiResponse, CurrentWeather, ForecastPayload, Location, WeatherError};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: String,
}

impl WeatherClient {
    /// Create a client for the API at `base_url`.
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current conditions for a city.
    #[instrument(skip(self), level = "info")]
    pub async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/api/weather/current/{}",
            self.base_url,
            urlencoding::encode(city)
        );
        self.get_json(&url).await
    }

    /// 3-hour forecast samples for a city.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast_by_city(&self, city: &str) -> Result<ForecastPayload, WeatherError> {
        let url = format!(
            "{}/api/weather/forecast/{}",
            self.base_url,
            urlencoding::encode(city)
        );
        self.get_json(&url).await
    }

    /// Current conditions at a position.
    #[instrument(skip(self), level = "info")]
    pub async fn current_by_coordinates(
        &self,
        location: &Location,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/api/weather/coordinates?lat={}&lon={}",
            self.base_url, location.latitude, location.longitude
        );
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("API returned status {}", status);
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Undecodable API response (status {}): {}", status, e);
            WeatherError::from(e)
        })?;

        envelope.into_result()
    }
}
