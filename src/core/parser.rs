use crate::domain::model::Measurements;
use crate::utils::error::{BmiError, Result};
use crate::utils::validation::validate_range;
use std::ops::RangeInclusive;

/// Accepted height in centimeters.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=200.0;
/// Accepted weight in kilograms.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 40.0..=200.0;

/// Parses both input fields. Any failure collapses into [`BmiError::InvalidInput`].
pub fn parse_measurements(height: &str, weight: &str) -> Result<Measurements> {
    let height_value = parse_field("height", height, &HEIGHT_RANGE)?;
    let weight_value = parse_field("weight", weight, &WEIGHT_RANGE)?;

    Ok(Measurements {
        height: height_value,
        weight: weight_value,
        raw_height: height.to_string(),
        raw_weight: weight.to_string(),
    })
}

pub fn parse_field(name: &str, raw: &str, range: &RangeInclusive<f64>) -> Result<f64> {
    // Only U+0020 is dropped; tabs, newlines and other spacing stay and fail to parse.
    let compact: String = raw.chars().filter(|c| *c != ' ').collect();

    let value: f64 = compact.parse().map_err(|e| {
        tracing::debug!("Rejected {} {:?}: {}", name, raw, e);
        BmiError::InvalidInput
    })?;

    validate_range(name, value, *range.start(), *range.end()).map_err(|e| {
        tracing::debug!("Rejected {} {:?}: {}", name, raw, e);
        BmiError::InvalidInput
    })?;

    Ok(value)
}
