//! Tiered human-readable formatters for money, distance, and travel time.
//!
//! Each formatter picks the first matching tier, matching the page copy
//! exactly ("1 days", "3 weeks", "$50k"). The formatters are total over
//! finite non-negative inputs; validation is the caller's job (see
//! [`crate::domain::convert`]).

use crate::domain::convert::FEET_PER_MILE;

const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
const HOURS_PER_WEEK: f64 = 168.0;
const HOURS_PER_YEAR: f64 = 8760.0;

/// Format a duration in hours as minutes, hours, days, weeks, or years.
///
/// Sub-hour durations render as whole minutes, but only when the rounded
/// minute count stays below 60. A duration like 0.996 hours rounds to 60
/// minutes and falls through to the hours tier instead of reading
/// "60 minutes".
///
/// # Example
/// ```
/// use wealth_mileage::domain::format::format_duration;
///
/// assert_eq!(format_duration(0.5), "30 minutes");
/// assert_eq!(format_duration(25.0), "1 days");
/// assert_eq!(format_duration(8760.0), "1 years");
/// ```
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        let minutes = (hours * MINUTES_PER_HOUR).round();
        if minutes < MINUTES_PER_HOUR {
            return format!("{} minutes", minutes as u64);
        }
        // 60 rounded minutes reads as an hour, not "60 minutes".
    }
    if hours < HOURS_PER_DAY {
        return format!("{:.1} hours", hours);
    }
    if hours < HOURS_PER_WEEK {
        return format!("{} days", (hours / HOURS_PER_DAY).round() as u64);
    }
    if hours < HOURS_PER_YEAR {
        return format!("{} weeks", (hours / HOURS_PER_WEEK).round() as u64);
    }
    format!("{} years", (hours / HOURS_PER_YEAR).round() as u64)
}

/// Format a distance in miles as feet, fractional miles, or grouped miles.
///
/// # Example
/// ```
/// use wealth_mileage::domain::format::format_distance;
///
/// assert_eq!(format_distance(0.5), "2640 feet");
/// assert_eq!(format_distance(500.0), "500.0 miles");
/// assert_eq!(format_distance(5000.0), "5,000 miles");
/// ```
pub fn format_distance(miles: f64) -> String {
    if miles < 1.0 {
        return format!("{} feet", (miles * FEET_PER_MILE).round() as u64);
    }
    if miles < 1000.0 {
        return format!("{:.1} miles", miles);
    }
    format!("{} miles", group_thousands(miles.round() as u64))
}

/// Format a dollar amount as billions, millions, "$Nk", or a plain figure.
///
/// # Example
/// ```
/// use wealth_mileage::domain::format::format_money;
///
/// assert_eq!(format_money(1_000_000_000.0), "$1.0 billion");
/// assert_eq!(format_money(50_000.0), "$50k");
/// assert_eq!(format_money(999.0), "$999");
/// ```
pub fn format_money(amount: f64) -> String {
    if amount >= 1e9 {
        return format!("${:.1} billion", amount / 1e9);
    }
    if amount >= 1e6 {
        return format!("${:.1} million", amount / 1e6);
    }
    if amount >= 1e3 {
        return format!("${}k", (amount / 1e3).round() as u64);
    }
    format!("${}", format_plain(amount))
}

/// Render a sub-thousand amount, keeping up to three fractional digits with
/// trailing zeros trimmed.
fn format_plain(amount: f64) -> String {
    if amount.fract() == 0.0 {
        return format!("{}", amount as u64);
    }
    let mut s = format!("{:.3}", amount);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Group an integer with comma thousands separators.
fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut chunks = Vec::new();
    while value >= 1000 {
        chunks.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    chunks.push(value.to_string());
    chunks.reverse();
    chunks.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minutes() {
        assert_eq!(format_duration(0.5), "30 minutes");
        assert_eq!(format_duration(0.0), "0 minutes");
        assert_eq!(format_duration(0.016_666), "1 minutes");
    }

    #[test]
    fn test_duration_sixty_minute_fallthrough() {
        // 0.996h rounds to 60 minutes; must fall through to the hours tier.
        assert_eq!(format_duration(0.996), "1.0 hours");
        assert_eq!(format_duration(0.991_666_7), "1.0 hours");
        // 59.4 minutes still rounds down to 59.
        assert_eq!(format_duration(0.99), "59 minutes");
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(format_duration(1.0), "1.0 hours");
        assert_eq!(format_duration(2.25), "2.3 hours");
        assert_eq!(format_duration(23.9), "23.9 hours");
    }

    #[test]
    fn test_duration_days_weeks_years() {
        assert_eq!(format_duration(25.0), "1 days");
        assert_eq!(format_duration(48.0), "2 days");
        assert_eq!(format_duration(167.9), "7 days");
        assert_eq!(format_duration(168.0), "1 weeks");
        assert_eq!(format_duration(400.0), "2 weeks");
        assert_eq!(format_duration(8760.0), "1 years");
        assert_eq!(format_duration(26_280.0), "3 years");
    }

    #[test]
    fn test_distance_feet() {
        assert_eq!(format_distance(0.5), "2640 feet");
        assert_eq!(format_distance(0.0), "0 feet");
    }

    #[test]
    fn test_distance_miles() {
        assert_eq!(format_distance(1.0), "1.0 miles");
        assert_eq!(format_distance(500.0), "500.0 miles");
        assert_eq!(format_distance(999.95), "999.9 miles");
    }

    #[test]
    fn test_distance_grouped_miles() {
        assert_eq!(format_distance(5000.0), "5,000 miles");
        assert_eq!(format_distance(189_393.9), "189,394 miles");
        assert_eq!(format_distance(1_234_567.4), "1,234,567 miles");
    }

    #[test]
    fn test_money_tiers() {
        assert_eq!(format_money(1_000_000_000.0), "$1.0 billion");
        assert_eq!(format_money(2_500_000_000.0), "$2.5 billion");
        assert_eq!(format_money(1_000_000.0), "$1.0 million");
        assert_eq!(format_money(50_000.0), "$50k");
        assert_eq!(format_money(1_500.0), "$2k");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_money_fractional_plain() {
        assert_eq!(format_money(999.5), "$999.5");
        assert_eq!(format_money(12.25), "$12.25");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }
}
