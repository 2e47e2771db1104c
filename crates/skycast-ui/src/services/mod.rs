pub mod weather_service;

pub use weather_service::{
    request_city_weather, request_location_weather, WeatherServiceMessage, EMPTY_CITY_MESSAGE,
};
