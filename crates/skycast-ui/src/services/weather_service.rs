//! Dashboard actions: city search and "use my location".
//!
//! Each action reports progress as messages on a channel; the model applies
//! them in order. Requests within an action run one after another.

use tokio::sync::mpsc::UnboundedSender;

use skycast_core::AppError;
use skycast_weather::location::get_current_location;
use skycast_weather::{
    reduce_to_daily_summaries, CurrentWeather, DailySummary, LocationSource, WeatherClient,
};

use crate::error_mapping::IntoAppError;

/// Banner text for an empty search
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Messages sent from actions to the dashboard model
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// An action started talking to the API
    Loading,
    CurrentLoaded(CurrentWeather),
    ForecastLoaded(Vec<DailySummary>),
    /// The action stopped; nothing more follows
    Failed(AppError),
}

/// Search by city name: current conditions, then the forecast.
///
/// Blank input is rejected before any request is made.
pub async fn request_city_weather(
    tx: &UnboundedSender<WeatherServiceMessage>,
    client: &WeatherClient,
    input: &str,
) {
    let city = input.trim();
    if city.is_empty() {
        let _ = tx.send(WeatherServiceMessage::Failed(AppError::Validation(
            EMPTY_CITY_MESSAGE.to_string(),
        )));
        return;
    }

    let _ = tx.send(WeatherServiceMessage::Loading);

    let result = async {
        let current = client
            .current_by_city(city)
            .await
            .map_err(IntoAppError::into_app_error)?;
        let forecast = client
            .forecast_by_city(city)
            .await
            .map_err(IntoAppError::into_app_error)?;
        let days = reduce_to_daily_summaries(&forecast.forecasts)
            .map_err(IntoAppError::into_app_error)?;
        Ok::<_, AppError>((current, days))
    }
    .await;

    match result {
        Ok((current, days)) => {
            tracing::info!("Loaded {} with {} forecast days", current.city, days.len());
            let _ = tx.send(WeatherServiceMessage::CurrentLoaded(current));
            let _ = tx.send(WeatherServiceMessage::ForecastLoaded(days));
        }
        Err(e) => {
            let _ = tx.send(WeatherServiceMessage::Failed(e));
        }
    }
}

/// Look up the current position, show its conditions, then try the forecast
/// for the city the API resolved.
///
/// A forecast failure here is only logged; the current conditions stay up.
pub async fn request_location_weather(
    tx: &UnboundedSender<WeatherServiceMessage>,
    client: &WeatherClient,
    source: &LocationSource,
) {
    let _ = tx.send(WeatherServiceMessage::Loading);

    let location = match get_current_location(source).await {
        Ok(loc) => {
            tracing::info!("Got location: {}, {}", loc.latitude, loc.longitude);
            loc
        }
        Err(e) => {
            let _ = tx.send(WeatherServiceMessage::Failed(e.into_app_error()));
            return;
        }
    };

    let current = match client.current_by_coordinates(&location).await {
        Ok(current) => current,
        Err(e) => {
            let _ = tx.send(WeatherServiceMessage::Failed(e.into_app_error()));
            return;
        }
    };

    let city = current.city.clone();
    let _ = tx.send(WeatherServiceMessage::CurrentLoaded(current));

    let forecast = match client.forecast_by_city(&city).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to fetch forecast for {}: {}", city, e);
            return;
        }
    };

    match reduce_to_daily_summaries(&forecast.forecasts) {
        Ok(days) => {
            let _ = tx.send(WeatherServiceMessage::ForecastLoaded(days));
        }
        Err(e) => tracing::error!("Failed to read forecast for {}: {}", city, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn blank_search_sends_validation_only() {
        let (tx, mut rx) = unbounded_channel();
        // Nothing listens on this port; a request would fail with a network error
        let client = WeatherClient::new("http://127.0.0.1:9", None).unwrap();

        request_city_weather(&tx, &client, "   ").await;
        drop(tx);

        match rx.recv().await {
            Some(WeatherServiceMessage::Failed(AppError::Validation(msg))) => {
                assert_eq!(msg, EMPTY_CITY_MESSAGE)
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn denied_location_fails_before_request() {
        let (tx, mut rx) = unbounded_channel();
        let client = WeatherClient::new("http://127.0.0.1:9", None).unwrap();

        request_location_weather(&tx, &client, &LocationSource::Denied).await;
        drop(tx);

        assert!(matches!(rx.recv().await, Some(WeatherServiceMessage::Loading)));
        match rx.recv().await {
            Some(WeatherServiceMessage::Failed(e)) => assert_eq!(
                e.user_message(),
                "Unable to get your location. Please search manually."
            ),
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(rx.recv().await.is_none());
    }
}
