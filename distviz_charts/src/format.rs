// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting helpers.
//!
//! Axis labels want short strings: `1.5K` rather than `1500`, `1m5s` rather
//! than `65`. These are free functions so they can be passed straight to
//! [`crate::LogTicks::with_formatter`].

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a number compactly for an axis label.
///
/// Thousands/millions/billions get `K`/`M`/`B` suffixes with at most one
/// (truncated) decimal digit; values at 1e12 and beyond, or below 0.01,
/// fall back to scientific notation. Integral values print without a
/// decimal point.
pub fn format_magnitude(n: f64) -> String {
    let mut out = String::new();
    let mut n = n;
    if n < 0.0 {
        out.push('-');
        n = -n;
    }

    if n >= 1e12 {
        out.push_str(&alloc::format!("{n:.1e}"));
    } else if n >= 1e9 {
        out.push_str(&suffixed(n, 1e9, 'B'));
    } else if n >= 1e6 {
        out.push_str(&suffixed(n, 1e6, 'M'));
    } else if n >= 1e3 {
        out.push_str(&suffixed(n, 1e3, 'K'));
    } else if n == 0.0 {
        return String::from("0");
    } else if n < 0.01 {
        out.push_str(&alloc::format!("{n:.2e}"));
    } else if n.floor() == n {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and below 1e3 at this point"
        )]
        out.push_str(&alloc::format!("{}", n as i64));
    } else {
        out.push_str(&alloc::format!("{n:.2}"));
    }

    out
}

/// [`format_magnitude`] with a trailing percent sign.
pub fn format_percent(n: f64) -> String {
    let mut out = format_magnitude(n);
    out.push('%');
    out
}

fn suffixed(n: f64, unit: f64, suffix: char) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "quotients are bounded by the caller's magnitude checks"
    )]
    let whole = (n / unit) as i64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a single truncated decimal digit"
    )]
    let tenth = (n % unit / (unit / 10.0)) as i64;
    if tenth == 0 {
        alloc::format!("{whole}{suffix}")
    } else {
        alloc::format!("{whole}.{tenth}{suffix}")
    }
}

/// Formats a duration in seconds as a compact label (`1y35d`, `1d1h`,
/// `1h2m`, `1m5s`, `42s`).
///
/// Only the two coarsest applicable units are shown: years suppress hours
/// and finer, days suppress minutes and finer, hours suppress seconds.
/// Zero (and negative input, which is clamped) formats as an empty string.
pub fn format_duration_seconds(seconds: f64) -> String {
    let total = {
        let rounded = seconds.round().clamp(0.0, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            rounded as i64
        }
    };

    let mut days = total / 86_400;
    let hours = (total / 3_600) % 24;
    let minutes = (total / 60) % 60;
    let secs = total % 60;
    let years = if days > 365 { days / 365 } else { 0 };
    days -= years * 365;

    let mut out = String::new();
    if years > 0 {
        out.push_str(&alloc::format!("{years}y"));
    }
    if days > 0 {
        out.push_str(&alloc::format!("{days}d"));
    }
    if years == 0 && hours > 0 {
        out.push_str(&alloc::format!("{hours}h"));
    }
    if years == 0 && days == 0 && minutes > 0 {
        out.push_str(&alloc::format!("{minutes}m"));
    }
    if years == 0 && days == 0 && hours == 0 && secs > 0 {
        out.push_str(&alloc::format!("{secs}s"));
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn magnitudes_get_metric_suffixes() {
        assert_eq!(format_magnitude(1500.0), "1.5K");
        assert_eq!(format_magnitude(1000.0), "1K");
        assert_eq!(format_magnitude(999_999.0), "999.9K");
        assert_eq!(format_magnitude(2_000_000.0), "2M");
        assert_eq!(format_magnitude(1_230_000_000.0), "1.2B");
    }

    #[test]
    fn small_values_print_plainly_or_scientifically() {
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(2.0), "2");
        assert_eq!(format_magnitude(3.14159), "3.14");
        assert_eq!(format_magnitude(0.005), "5.00e-3");
    }

    #[test]
    fn sign_is_preserved() {
        assert_eq!(format_magnitude(-1500.0), "-1.5K");
        assert_eq!(format_magnitude(-2.0), "-2");
    }

    #[test]
    fn huge_values_fall_back_to_scientific() {
        assert_eq!(format_magnitude(2.0e12), "2.0e12");
    }

    #[test]
    fn percent_appends_the_sign() {
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(12.5), "12.50%");
    }

    #[test]
    fn durations_use_the_two_coarsest_units() {
        assert_eq!(format_duration_seconds(5.0), "5s");
        assert_eq!(format_duration_seconds(65.0), "1m5s");
        assert_eq!(format_duration_seconds(100.0), "1m40s");
        assert_eq!(format_duration_seconds(3600.0), "1h");
        assert_eq!(format_duration_seconds(3723.0), "1h2m");
        assert_eq!(format_duration_seconds(90_061.0), "1d1h");
        assert_eq!(format_duration_seconds(400.0 * 86_400.0), "1y35d");
    }

    #[test]
    fn zero_duration_is_empty() {
        assert_eq!(format_duration_seconds(0.0), "");
        assert_eq!(format_duration_seconds(-5.0), "");
    }
}
