// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cumulative distribution construction.
//!
//! [`cdf`] buckets a sample set into equal-width intervals and reports, at
//! each bucket's upper edge, the percentage of samples at or below it. The
//! output is ordered by threshold, which step-plotting consumers rely on.
//! [`staircase`] turns those pairs into the flat-then-rising point sequence
//! a straight polyline needs to render a true step function, and
//! [`cdf_log_buckets`] is a geometric-bucket variant for heavily skewed
//! positive data.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Default number of CDF/histogram buckets.
pub const DEFAULT_STEPS: usize = 15;

/// Builds a CDF over the observed range of `samples`.
///
/// See [`cdf_with_range`] for the semantics; the range is taken from the
/// sample minimum and maximum. Returns an empty vector for empty input.
pub fn cdf(samples: &[f64], steps: usize) -> Vec<(f64, f64)> {
    cdf_impl(samples, None, steps)
}

/// Builds a CDF of `samples` over an explicit `(min, max)` range.
///
/// The range is divided into `steps` equal-width buckets; at each bucket's
/// upper edge the output holds `(edge, percent of samples ≤ edge)`. The
/// sequence starts at `(min, 0)` and ends at `(max, 100)` when all samples
/// fall inside the range. Samples outside the range still count toward the
/// total, so a clipping range yields edges that never reach 100.
///
/// A zero-width range collapses to a single `(0, 100)` point when `max` is
/// zero; otherwise the bucket width is re-derived from `max / steps` so a
/// full staircase is still produced.
pub fn cdf_with_range(samples: &[f64], range: (f64, f64), steps: usize) -> Vec<(f64, f64)> {
    cdf_impl(samples, Some(range), steps)
}

fn cdf_impl(samples: &[f64], range: Option<(f64, f64)>, steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    if samples.is_empty() {
        return Vec::new();
    }

    let (mut min, max) = match range {
        Some(r) => r,
        None => sample_range(samples),
    };

    let mut width = (max - min) / steps as f64;
    if width == 0.0 {
        if max == 0.0 {
            return alloc::vec![(0.0, 100.0)];
        }
        // Single distinct value: synthesize a range ending at it.
        width = max / steps as f64;
        min = max - width * steps as f64;
    }

    let total = samples.len() as f64;
    let percent_below = |edge: f64| {
        samples.iter().filter(|x| **x <= edge).count() as f64 / total * 100.0
    };

    let mut out = Vec::with_capacity(steps + 1);
    out.push((min, 0.0));
    for i in 1..=steps {
        // The last edge is pinned to `max` so float accumulation can't stop
        // the staircase short of 100.
        let edge = if i == steps {
            max
        } else {
            min + width * i as f64
        };
        out.push((edge, percent_below(edge)));
    }
    out
}

/// Expands CDF points into a flat-then-rising staircase.
///
/// Each interior rise is doubled into a point at the previous level and a
/// point at the new level, so plotting the output as a straight polyline
/// draws a proper step function instead of interpolated ramps. The sequence
/// is anchored at `(0, 0)` and closed at `(x_last, 100)`.
pub fn staircase(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return out;
    };

    if first != (0.0, 0.0) {
        out.push((0.0, 0.0));
    }
    if first.0 != 0.0 {
        out.push((first.0, 0.0));
    }
    out.push(first);
    for w in points.windows(2) {
        let (prev, cur) = (w[0], w[1]);
        if cur.1 != prev.1 {
            out.push((cur.0, prev.1));
            out.push(cur);
        }
    }
    out.push(last);
    out.push((last.0, 100.0));
    out
}

/// Builds a CDF over geometrically spaced bucket edges.
///
/// Edges sit at `min · (max/min)^(i/steps)`, which spreads buckets evenly in
/// log space. That suits heavily skewed positive data where equal-width
/// buckets would crowd everything into the first few edges. Edges that
/// collapse onto the previous one are dropped. Requires strictly positive
/// samples; returns an empty vector otherwise.
pub fn cdf_log_buckets(samples: &[f64], steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    if samples.is_empty() || samples.iter().any(|x| *x <= 0.0) {
        return Vec::new();
    }

    let (min, max) = sample_range(samples);
    let ratio = max / min;
    let total = samples.len() as f64;

    let mut out: Vec<(f64, f64)> = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let edge = if i == steps {
            max
        } else {
            min * ratio.powf(i as f64 / steps as f64)
        };
        if out.last().is_some_and(|(prev, _)| *prev == edge) {
            continue;
        }
        let percent = samples.iter().filter(|x| **x <= edge).count() as f64 / total * 100.0;
        out.push((edge, percent));
    }
    out
}

fn sample_range(samples: &[f64]) -> (f64, f64) {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cdf_over_one_to_ten_reaches_100_at_max() {
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let points = cdf(&samples, 5);

        assert_eq!(points.first(), Some(&(1.0, 0.0)));
        assert_eq!(points.len(), 6);
        // Bucket width (10-1)/5 = 1.8.
        assert!((points[1].0 - 2.8).abs() < 1e-9);
        assert_eq!(points.last(), Some(&(10.0, 100.0)));
    }

    #[test]
    fn cdf_is_monotonically_non_decreasing() {
        let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
        let points = cdf(&samples, DEFAULT_STEPS);
        for w in points.windows(2) {
            assert!(w[0].0 < w[1].0, "thresholds must increase: {w:?}");
            assert!(w[0].1 <= w[1].1, "cumulative must not decrease: {w:?}");
        }
        assert!(points.iter().all(|(_, p)| (0.0..=100.0).contains(p)));
        assert_eq!(points.last().unwrap().1, 100.0);
    }

    #[test]
    fn cdf_of_empty_input_is_empty() {
        assert!(cdf(&[], 5).is_empty());
    }

    #[test]
    fn cdf_of_all_zeros_collapses_to_single_point() {
        assert_eq!(cdf(&[0.0, 0.0, 0.0], 5), std::vec![(0.0, 100.0)]);
    }

    #[test]
    fn cdf_of_single_distinct_value_synthesizes_a_range() {
        let points = cdf(&[5.0, 5.0], 5);
        assert_eq!(points.first(), Some(&(0.0, 0.0)));
        assert_eq!(points.last(), Some(&(5.0, 100.0)));
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn cdf_with_clipping_range_stays_below_100() {
        let samples = [1.0, 2.0, 3.0, 4.0, 100.0];
        let points = cdf_with_range(&samples, (1.0, 4.0), 3);
        assert_eq!(points.last().unwrap().1, 80.0);
    }

    #[test]
    fn staircase_doubles_interior_rises() {
        let points = [(1.0, 0.0), (2.0, 50.0), (3.0, 50.0), (4.0, 100.0)];
        let stairs = staircase(&points);

        assert_eq!(stairs.first(), Some(&(0.0, 0.0)));
        // The rise at x=2 becomes a flat point at the old level first.
        assert!(stairs.contains(&(2.0, 0.0)));
        assert!(stairs.contains(&(2.0, 50.0)));
        // No rise was emitted for the flat segment at x=3.
        assert!(!stairs.contains(&(3.0, 100.0)));
        assert_eq!(stairs.last(), Some(&(4.0, 100.0)));
    }

    #[test]
    fn staircase_of_empty_input_is_empty() {
        assert!(staircase(&[]).is_empty());
    }

    #[test]
    fn staircase_never_moves_backwards() {
        let samples: Vec<f64> = (1..=20).map(f64::from).collect();
        let stairs = staircase(&cdf(&samples, 6));
        for w in stairs.windows(2) {
            assert!(w[1].0 >= w[0].0, "x must not decrease: {w:?}");
            assert!(w[1].1 >= w[0].1, "y must not decrease: {w:?}");
        }
    }

    #[test]
    fn log_buckets_cover_positive_skewed_data() {
        let samples = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 1024.0];
        let points = cdf_log_buckets(&samples, 10);

        assert_eq!(points.first().map(|(e, _)| *e), Some(1.0));
        assert_eq!(points.last(), Some(&(1024.0, 100.0)));
        for w in points.windows(2) {
            assert!(w[0].0 < w[1].0, "edges must increase: {w:?}");
            assert!(w[0].1 <= w[1].1, "cumulative must not decrease: {w:?}");
        }
    }

    #[test]
    fn log_buckets_reject_non_positive_samples() {
        assert!(cdf_log_buckets(&[0.0, 1.0], 5).is_empty());
        assert!(cdf_log_buckets(&[-1.0, 1.0], 5).is_empty());
        assert!(cdf_log_buckets(&[], 5).is_empty());
    }
}
