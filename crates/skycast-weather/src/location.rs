//! Location lookup for the "use my location" action.
//!
//! There is no platform geolocation service behind this; the source is
//! decided up front (usually from configuration) and resolved on demand.

use crate::types::{Location, LocationError};

/// Where the current location comes from
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationSource {
    /// A known position
    Fixed(Location),
    /// Location access has been turned off by the user
    Denied,
    /// No position is available on this system
    #[default]
    Unsupported,
}

impl LocationSource {
    /// Fixed source from raw coordinates, validating their ranges.
    pub fn fixed(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        Location::new(latitude, longitude).map(Self::Fixed)
    }
}

pub async fn get_current_location(source: &LocationSource) -> Result<Location, LocationError> {
    match source {
        LocationSource::Fixed(location) => {
            tracing::debug!(
                "Using fixed location {}, {}",
                location.latitude,
                location.longitude
            );
            Ok(location.clone())
        }
        LocationSource::Denied => Err(LocationError::PermissionDenied),
        LocationSource::Unsupported => Err(LocationError::ServiceUnavailable),
    }
}
