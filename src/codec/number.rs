use std::str::FromStr;

use super::Parsed;

/// The only affirmative token.
pub const YES: &str = "Y";
const NO: &str = "N";

/// `Y` is true, everything else is false.
pub fn parse_bool(text: &str) -> Parsed<bool> {
    match text {
        YES => Parsed::ok(true),
        "" | NO => Parsed::ok(false),
        _ => Parsed::fallback(false),
    }
}

/// Writes `Y` for true and nothing for false.
pub fn format_bool(value: bool) -> Option<&'static str> {
    value.then_some(YES)
}

/// Parses a base-10 integer; failures and out-of-range values give 0.
///
/// A leading `+` is rejected.
pub fn parse_int<T: FromStr + Default>(text: &str) -> Parsed<T> {
    if text.is_empty() {
        return Parsed::ok(T::default());
    }
    if text.starts_with('+') {
        return Parsed::fallback(T::default());
    }
    match text.parse() {
        Ok(v) => Parsed::ok(v),
        Err(_) => Parsed::fallback(T::default()),
    }
}

/// Writes a non-zero integer.
pub fn format_int<T: Default + PartialEq + ToString>(value: T) -> Option<String> {
    (value != T::default()).then(|| value.to_string())
}

/// Parses a decimal number; failures give 0.
pub fn parse_float(text: &str) -> Parsed<f64> {
    if text.is_empty() {
        return Parsed::ok(0.0);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Parsed::ok(v),
        _ => Parsed::fallback(0.0),
    }
}

/// Writes a non-zero, finite number with `digits` significant digits.
pub fn format_float(value: f64, digits: u32) -> Option<String> {
    (value != 0.0 && value.is_finite()).then(|| format_significant(value, digits))
}

/// Rounds `value` to `digits` significant digits in positional notation,
/// trimming trailing fractional zeros.
///
/// ```
/// use qsobridge::codec::number::format_significant;
///
/// assert_eq!(format_significant(14.074, 6), "14.074");
/// assert_eq!(format_significant(100.0, 2), "100");
/// assert_eq!(format_significant(1234.5, 2), "1200");
/// ```
pub fn format_significant(value: f64, digits: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1) as i32;
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits - 1 - magnitude;
    let text = if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let scale = 10f64.powi(-decimals);
        format!("{:.0}", (value / scale).round() * scale)
    };
    trim_fraction(text)
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let keep = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(keep);
    }
    text
}
