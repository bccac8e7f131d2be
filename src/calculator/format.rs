//! Conversion between numbers and the display string.
//!
//! The display always holds text produced here or typed digit by digit, so
//! parsing is lenient in the way a browser's `parseFloat` is: it reads the
//! longest numeric prefix and falls back to NaN.

/// Upper bound for the number of decimal places kept after a computation.
pub const MAX_PRECISION: u32 = 15;

/// Round a value to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Format a number for the display.
///
/// Uses the shortest representation that round-trips. Magnitudes of at
/// least 1e21 or below 1e-6 switch to exponent notation with an explicit
/// sign on the exponent (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Parse display text back into a number.
pub fn parse_display(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let end = numeric_prefix_len(trimmed);
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Check whether the display shows one of the IEEE special values.
pub fn is_special(text: &str) -> bool {
    matches!(text, "Infinity" | "-Infinity" | "NaN")
}

/// Length in bytes of the longest prefix that reads as a decimal literal.
///
/// Returns 0 when there is no mantissa digit at all.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - (i + 1);
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when it has at least one digit
    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
