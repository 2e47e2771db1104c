//! Day reduction: collapse 3-hour forecast samples into one entry per day.
//!
//! Each calendar day is represented by the sample whose hour is closest to
//! noon. Days keep the order in which they first appear in the input and the
//! result holds at most [`MAX_FORECAST_DAYS`] entries.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{ForecastSample, TimestampError};

/// Maximum number of days kept after reduction
pub const MAX_FORECAST_DAYS: usize = 5;

/// Hour of day preferred as a day's representative reading
pub const REPRESENTATIVE_HOUR: u32 = 12;

/// One forecast sample chosen to represent a calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Hour of day parsed from the sample timestamp
    pub hour: u32,
    pub sample: ForecastSample,
}

/// Split a "YYYY-MM-DD HH:MM:SS" timestamp into its date and hour.
///
/// A `T` separator is accepted in place of the space.
pub fn split_timestamp(timestamp: &str) -> Result<(NaiveDate, u32), TimestampError> {
    let (date_part, time_part) = timestamp
        .trim()
        .split_once(|c: char| c == ' ' || c == 'T')
        .ok_or_else(|| TimestampError::MissingTime(timestamp.to_string()))?;

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| TimestampError::InvalidDate(timestamp.to_string()))?;

    let hour_part = time_part
        .split_once(':')
        .map_or(time_part, |(h, _)| h)
        .trim();
    if hour_part.is_empty() || !hour_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::InvalidHour(timestamp.to_string()));
    }
    let hour: u32 = hour_part
        .parse()
        .map_err(|_| TimestampError::InvalidHour(timestamp.to_string()))?;
    if hour > 23 {
        return Err(TimestampError::InvalidHour(timestamp.to_string()));
    }

    Ok((date, hour))
}

fn noon_distance(hour: u32) -> u32 {
    hour.abs_diff(REPRESENTATIVE_HOUR)
}

/// Reduce forecast samples to at most five daily summaries.
///
/// The input is not re-sorted. A later sample replaces a day's pick only when
/// it is strictly closer to noon, so ties go to the first one seen. Fails on
/// the first malformed timestamp.
pub fn reduce_to_daily_summaries(
    samples: &[ForecastSample],
) -> Result<Vec<DailySummary>, TimestampError> {
    let mut days: Vec<DailySummary> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let (date, hour) = split_timestamp(&sample.timestamp)?;
        match positions.entry(date) {
            Entry::Occupied(slot) => {
                let best = &mut days[*slot.get()];
                if noon_distance(hour) < noon_distance(best.hour) {
                    best.hour = hour;
                    best.sample = sample.clone();
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(days.len());
                days.push(DailySummary {
                    date,
                    hour,
                    sample: sample.clone(),
                });
            }
        }
    }

    days.truncate(MAX_FORECAST_DAYS);
    tracing::debug!("Reduced {} samples to {} days", samples.len(), days.len());
    Ok(days)
}
