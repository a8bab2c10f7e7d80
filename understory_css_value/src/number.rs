// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting.

use std::fmt::Write as _;

/// Significant digits kept when printing non-integral numbers.
pub const SIGNIFICANT_DIGITS: i32 = 6;

/// Appends `value` in its shortest CSS form.
///
/// Integral values print without a fraction; other values keep at most
/// [`SIGNIFICANT_DIGITS`] significant digits with trailing zeros removed.
///
/// ```rust
/// use understory_css_value::write_number;
///
/// let mut out = String::new();
/// write_number(&mut out, 100.0 / 3.0);
/// assert_eq!(out, "33.3333");
/// ```
pub fn write_number(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("NaN");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value > 0.0 { "infinity" } else { "-infinity" });
        return;
    }
    if value == 0.0 {
        out.push('0');
        return;
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let _ = write!(out, "{value:.0}");
        return;
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite non-zero f64 is within ±330"
    )]
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = usize::try_from((SIGNIFICANT_DIGITS - 1 - magnitude).clamp(0, 17)).unwrap_or(0);
    let start = out.len();
    let _ = write!(out, "{value:.decimals$}");
    if out[start..].contains('.') {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }
    if &out[start..] == "-0" {
        out.truncate(start);
        out.push('0');
    }
}

/// Returns `value` in its shortest CSS form.
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}
