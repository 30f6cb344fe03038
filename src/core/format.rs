//! Fixed-significance number formatting for the value column.

use std::fmt::Write;

/// Format `v` with `digits` significant digits in "general" notation.
///
/// * Decimal exponent in `[-4, digits - 1)` gives fixed notation with trailing
///   zeros trimmed, always keeping one fractional digit: `5.0`, `183.32`.
/// * Anything else gives scientific notation: `1.2346e+04`, `1e-05`.
#[must_use]
pub fn format_significant(v: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let mut s = String::new();

    // Let the scientific formatter do the rounding so the exponent reflects it.
    let _ = write!(&mut s, "{v:.prec$e}", prec = digits - 1);
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    let exp: i64 = exp.parse().unwrap_or(0);
    let limit = i64::try_from(digits).unwrap_or(i64::MAX);

    if exp < -4 || exp >= limit - 1 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exp).unwrap_or(0);
    let mut fixed = String::new();
    let _ = write!(&mut fixed, "{v:.decimals$}");
    let trimmed = trim_fraction(&fixed);
    if trimmed.contains('.') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}.0")
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
