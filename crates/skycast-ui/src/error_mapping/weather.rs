use super::IntoAppError;
use skycast_core::error::ReqwestErrorExt;
use skycast_core::{AppError, LocationError, NetworkError, WeatherError};
use skycast_weather::{
    LocationError as GeoError, TimestampError, WeatherError as ClientError,
};

impl IntoAppError for ClientError {
    fn into_app_error(self) -> AppError {
        match self {
            ClientError::Network(e) => AppError::Network(e.into_network_error()),
            ClientError::Location(e) => e.into_app_error(),
            ClientError::Api(msg) => AppError::Weather(WeatherError::ApiError(msg)),
            ClientError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
            ClientError::Timestamp(e) => e.into_app_error(),
        }
    }
}

impl IntoAppError for GeoError {
    fn into_app_error(self) -> AppError {
        match self {
            GeoError::PermissionDenied => AppError::Location(LocationError::Denied),
            GeoError::ServiceUnavailable => AppError::Location(LocationError::Unsupported),
            GeoError::Other(msg) => AppError::Location(LocationError::Invalid(msg)),
        }
    }
}

impl IntoAppError for TimestampError {
    fn into_app_error(self) -> AppError {
        AppError::Weather(WeatherError::InvalidForecast(self.to_string()))
    }
}
