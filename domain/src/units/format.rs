//! Number formatting for conversion results.

/// Default number of significant digits shown in results.
pub const DEFAULT_PRECISION: usize = 6;

/// Format `value` with at most `digits` significant digits.
///
/// Uses fixed notation for moderate magnitudes and scientific notation for
/// very large or very small ones (like C's `%g`). Trailing zeros are trimmed,
/// so `5.0` prints as `5` and `16.40419947` as `16.4042`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.clamp(1, 17);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_zeros(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
