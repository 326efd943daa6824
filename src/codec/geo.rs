use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Parsed;
use crate::types::Axis;

static COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([NESW])([0-9]+) ([0-9.]+)").expect("coordinate pattern compiles")
});

/// Parses `N042 30.500` style text into signed decimal degrees, rounded to
/// four decimal places. South and west are negative.
///
/// Empty or unparsable text gives 0, which is also how "absent" is written.
pub fn parse_coordinate(text: &str) -> Parsed<f64> {
    if text.is_empty() {
        return Parsed::ok(0.0);
    }
    let Some(groups) = COORDINATE.captures(text) else {
        debug!(value = text, "unparsable coordinate");
        return Parsed::fallback(0.0);
    };
    let (Ok(degrees), Ok(minutes)) = (groups[2].parse::<f64>(), groups[3].parse::<f64>()) else {
        debug!(value = text, "coordinate with unparsable degrees or minutes");
        return Parsed::fallback(0.0);
    };

    let mut value = degrees + minutes / 60.0;
    if matches!(&groups[1], "S" | "W") {
        value = -value;
    }
    Parsed::ok((value * 10_000.0).round() / 10_000.0)
}

/// Formats signed decimal degrees as `<cardinal><DDD> <MM.mmm>`.
///
/// Returns `None` for 0.
pub fn format_coordinate(value: f64, axis: Axis) -> Option<String> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    let cardinal = match (axis, value >= 0.0) {
        (Axis::Latitude, true) => 'N',
        (Axis::Latitude, false) => 'S',
        (Axis::Longitude, true) => 'E',
        (Axis::Longitude, false) => 'W',
    };
    let abs = value.abs();
    let mut degrees = abs.floor();
    let mut minutes = ((abs - degrees) * 60.0 * 1000.0).round() / 1000.0;
    // rounding can carry into the next degree
    if minutes >= 60.0 {
        degrees += 1.0;
        minutes -= 60.0;
    }
    Some(format!("{cardinal}{:03} {minutes:06.3}", degrees as u32))
}
