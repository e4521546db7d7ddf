//! Measurement units.
//!
//! Everything inside the engine is stored in meters. `Unit` only decides how
//! lengths are typed in and shown, and which grid increment snapping uses.

use crate::constants::{IMPERIAL_GRID_INCREMENT_FT, METRIC_GRID_INCREMENT};
use crate::error::{PlacementError, Result};
use std::fmt;
use std::str::FromStr;

pub const METERS_PER_FOOT: f32 = 0.3048;
pub const INCHES_PER_METER: f32 = 39.3701;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    /// Convert a value typed in this unit into meters.
    pub fn to_meters(self, value: f32) -> f32 {
        match self {
            Unit::Metric => value,
            Unit::Imperial => feet_to_meters(value),
        }
    }

    /// Convert meters into this unit's native value.
    pub fn from_meters(self, meters: f32) -> f32 {
        match self {
            Unit::Metric => meters,
            Unit::Imperial => meters / METERS_PER_FOOT,
        }
    }

    /// Grid step used by snapping, in meters.
    pub fn grid_increment(self) -> f32 {
        match self {
            Unit::Metric => METRIC_GRID_INCREMENT,
            Unit::Imperial => feet_to_meters(IMPERIAL_GRID_INCREMENT_FT),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Metric => "meters",
            Unit::Imperial => "feet",
        }
    }

    /// Parse a user-entered length in this unit and return meters.
    pub fn parse_length(self, input: &str) -> Result<f32> {
        let trimmed = input.trim();
        let value: f32 = trimmed
            .parse()
            .map_err(|_| PlacementError::InvalidLength(trimmed.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(PlacementError::InvalidLength(trimmed.to_string()));
        }
        Ok(self.to_meters(value))
    }

    /// Human readable length, e.g. `2.5m` or `8' 2"`.
    pub fn format_length(self, meters: f32) -> String {
        match self {
            Unit::Metric => format!("{:.1}m", meters),
            Unit::Imperial => {
                let fi = FeetInches::from_meters(meters);
                format!("{}{}' {}\"", if fi.negative { "-" } else { "" }, fi.feet, fi.inches)
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meters" | "metric" => Ok(Unit::Metric),
            "ft" | "feet" | "imperial" => Ok(Unit::Imperial),
            other => Err(PlacementError::InvalidLength(format!("unknown unit {other}"))),
        }
    }
}

#[inline]
pub fn feet_to_meters(feet: f32) -> f32 {
    feet * METERS_PER_FOOT
}

/// A length split into whole feet and rounded inches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeetInches {
    pub negative: bool,
    pub feet: u32,
    pub inches: u32,
}

impl FeetInches {
    pub fn from_meters(meters: f32) -> Self {
        let total_inches = meters.abs() * INCHES_PER_METER;
        let mut feet = (total_inches / 12.0).floor() as u32;
        let mut inches = (total_inches % 12.0).round() as u32;
        // 11.6" rounds up to a full foot
        if inches == 12 {
            feet += 1;
            inches = 0;
        }
        Self {
            negative: meters < 0.0 && (feet > 0 || inches > 0),
            feet,
            inches,
        }
    }
}
