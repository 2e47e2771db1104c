use chrono::NaiveDate;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use skycast_core::config::LocationConfig;
use skycast_core::{AppError, Config, ConfigError};
use skycast_weather::{LocationSource, WeatherClient};

use crate::error_mapping::IntoAppError;
use crate::models::dashboard_model::DashboardModel;
use crate::render::render_dashboard;
use crate::services::{request_city_weather, request_location_weather, WeatherServiceMessage};

/// Dashboard state and the services behind it
pub struct DashboardApp {
    config: Config,
    client: WeatherClient,
    location: LocationSource,
    model: DashboardModel,
}

/// Turn the location settings into a lookup source.
pub fn location_source(settings: &LocationConfig) -> Result<LocationSource, AppError> {
    if !settings.enabled {
        return Ok(LocationSource::Denied);
    }
    match settings.coordinates() {
        Some((lat, lon)) => LocationSource::fixed(lat, lon)
            .map_err(|e| AppError::Config(ConfigError::Invalid(e.to_string()))),
        None => Ok(LocationSource::Unsupported),
    }
}

impl DashboardApp {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = WeatherClient::new(&config.api.base_url, config.api.timeout())
            .map_err(IntoAppError::into_app_error)?;
        let location = location_source(&config.location)?;

        tracing::info!("Dashboard using API at {}", client.base_url());

        Ok(Self {
            config,
            client,
            location,
            model: DashboardModel::new(),
        })
    }

    /// Run a city search and update the screen state.
    pub async fn search(&mut self, input: &str) {
        let (tx, rx) = unbounded_channel();
        request_city_weather(&tx, &self.client, input).await;
        drop(tx);
        self.drain(rx);
    }

    /// Run the "use my location" action and update the screen state.
    pub async fn locate(&mut self) {
        let (tx, rx) = unbounded_channel();
        request_location_weather(&tx, &self.client, &self.location).await;
        drop(tx);
        self.drain(rx);
    }

    fn drain(&mut self, mut rx: UnboundedReceiver<WeatherServiceMessage>) {
        while let Ok(message) = rx.try_recv() {
            tracing::debug!("Applying {:?}", message);
            self.model.apply(message);
        }
    }

    pub fn render(&self, today: NaiveDate) -> String {
        render_dashboard(&self.model, today)
    }

    pub fn model(&self) -> &DashboardModel {
        &self.model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
