//! Wealth-to-distance conversion math.
//!
//! The page's central metaphor: one dollar is one foot of road. Conversions
//! are pure and deterministic; validation happens here so the formatters in
//! [`crate::domain::format`] can stay total over clean inputs.

use crate::domain::error::InvalidInput;

/// Feet in one mile.
pub const FEET_PER_MILE: f64 = 5280.0;

/// Default travel speed used by the page's calculator, in miles per hour.
pub const DEFAULT_SPEED_MPH: f64 = 45.0;

/// Average Earth-Moon distance in miles, used for the quiz framing.
pub const MOON_DISTANCE_MILES: f64 = 238_855.0;

/// Convert a dollar amount to miles (1 dollar = 1 foot).
///
/// # Errors
/// Returns [`InvalidInput::Amount`] if the amount is negative, NaN, or
/// infinite.
///
/// # Example
/// ```
/// use wealth_mileage::domain::convert::to_distance_miles;
///
/// let miles = to_distance_miles(1_000_000_000.0).unwrap();
/// assert!((miles - 189_393.939).abs() < 0.001);
/// ```
pub fn to_distance_miles(amount: f64) -> Result<f64, InvalidInput> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InvalidInput::Amount);
    }
    Ok(amount / FEET_PER_MILE)
}

/// Convert a distance in miles to travel time in hours at the given speed.
///
/// # Errors
/// Returns [`InvalidInput::Distance`] for a negative or non-finite distance,
/// and [`InvalidInput::Speed`] for a non-positive or non-finite speed.
pub fn to_duration_hours(miles: f64, speed_mph: f64) -> Result<f64, InvalidInput> {
    if !miles.is_finite() || miles < 0.0 {
        return Err(InvalidInput::Distance);
    }
    if !speed_mph.is_finite() || speed_mph <= 0.0 {
        return Err(InvalidInput::Speed);
    }
    Ok(miles / speed_mph)
}

/// Fraction of the Earth-Moon distance covered by the given mileage.
///
/// Not clamped: amounts beyond the Moon report a fraction above 1.0.
pub fn fraction_of_moon_distance(miles: f64) -> f64 {
    miles / MOON_DISTANCE_MILES
}
