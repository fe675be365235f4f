// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentile-box summaries of sample sets.
//!
//! A [`BoxSummary`] is the value a box-and-whisker chart draws: box
//! boundaries at quartile-style positions, an optional median line, optional
//! whiskers at the extremes, plus mean and variance. Small sample sets get
//! degenerate shapes (a collapsed box, no whiskers) rather than errors, so
//! chart-building callers never have to special-case them.

extern crate alloc;

use alloc::vec::Vec;

/// A quartile-style box summary of a sample set, plus mean and variance.
///
/// Computed once by [`percentile_box`]; treat it as immutable afterwards.
/// To re-express a summary in another scale (e.g. log coordinates), use
/// [`BoxSummary::map`], which rescales every field together; mutating
/// individual fields would leave the summary mixing scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSummary {
    /// Lower box boundary (first-quartile position for n ≥ 5).
    pub box_min: f64,
    /// Upper box boundary (third-quartile position for n ≥ 5).
    pub box_max: f64,
    /// Median line. Present only when at least 3 samples were summarized.
    pub median: Option<f64>,
    /// Lower whisker (sample minimum). Absent below 4 samples.
    pub whisker_min: Option<f64>,
    /// Upper whisker (sample maximum). Absent below 4 samples.
    pub whisker_max: Option<f64>,
    /// Arithmetic mean of the samples (0 for an empty set).
    pub mean: f64,
    /// Population variance of the samples (0 for an empty set).
    pub variance: f64,
}

impl BoxSummary {
    /// Returns the lowest drawn position: the whisker if present, else the
    /// box boundary.
    pub fn min(&self) -> f64 {
        self.whisker_min.unwrap_or(self.box_min)
    }

    /// Returns the highest drawn position: the whisker if present, else the
    /// box boundary.
    pub fn max(&self) -> f64 {
        self.whisker_max.unwrap_or(self.box_max)
    }

    /// Returns a new summary with `f` applied to every field.
    ///
    /// This is how a summary is moved into another display scale (say,
    /// `log10` for a log axis). After a nonlinear `f` the mean and variance
    /// are display coordinates, not statistics of the transformed samples.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            box_min: f(self.box_min),
            box_max: f(self.box_max),
            median: self.median.map(&f),
            whisker_min: self.whisker_min.map(&f),
            whisker_max: self.whisker_max.map(&f),
            mean: f(self.mean),
            variance: f(self.variance),
        }
    }
}

/// Summarizes a sample set into a [`BoxSummary`].
///
/// Sample counts 0–4 produce degenerate box shapes:
/// - 0 → a zero box with no median or whiskers
/// - 1 → the box collapses onto the single value
/// - 2 → the box spans both values
/// - 3 → the box spans min/max with the middle value as median
/// - 4 → whiskers at the extremes, box over the middle two, no median
///
/// For n ≥ 5 the box runs from `sorted[offset]` to
/// `sorted[median_idx + offset]` where `median_idx = n / 2` and
/// `offset = (n - median_idx) / 2`, with whiskers at the extremes.
pub fn percentile_box(samples: &[f64]) -> BoxSummary {
    let mut sorted: Vec<f64> = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let mean = if n == 0 {
        0.0
    } else {
        sorted.iter().sum::<f64>() / n as f64
    };
    let variance = if n == 0 {
        0.0
    } else {
        sorted.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64
    };

    let summary = |box_min, box_max, median, whisker_min, whisker_max| BoxSummary {
        box_min,
        box_max,
        median,
        whisker_min,
        whisker_max,
        mean,
        variance,
    };

    match n {
        0 => summary(0.0, 0.0, None, None, None),
        1 => summary(sorted[0], sorted[0], None, None, None),
        2 => summary(sorted[0], sorted[1], None, None, None),
        3 => summary(sorted[0], sorted[2], Some(sorted[1]), None, None),
        4 => summary(
            sorted[1],
            sorted[2],
            None,
            Some(sorted[0]),
            Some(sorted[3]),
        ),
        _ => {
            let median_idx = n / 2;
            let offset = (n - median_idx) / 2;
            summary(
                sorted[offset],
                sorted[median_idx + offset],
                Some(sorted[median_idx]),
                Some(sorted[0]),
                Some(sorted[n - 1]),
            )
        }
    }
}

/// Finds the `(break_start, break_end)` gap an axis can skip over.
///
/// Outliers are detected with IQR fences at `Q1 - 1.5·IQR` and
/// `Q3 + 1.5·IQR`, using the box boundaries from [`percentile_box`] as
/// Q1/Q3. High outliers break from the largest in-fence value to the
/// maximum; low non-negative outliers break from the minimum to the
/// smallest in-fence value. Without outliers the break collapses to a
/// zero-size gap at the maximum. Returns `None` for an empty input.
pub fn axis_break(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let summary = percentile_box(values);
    let q1 = summary.box_min;
    let q3 = summary.box_max;
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > upper_fence {
        let break_start = values
            .iter()
            .copied()
            .filter(|v| *v <= upper_fence)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((break_start, max))
    } else if min < lower_fence && min >= 0.0 {
        let break_end = values
            .iter()
            .copied()
            .filter(|v| *v >= lower_fence)
            .fold(f64::INFINITY, f64::min);
        Some((min, break_end))
    } else {
        Some((max, max))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn nine_samples_pick_index_based_quartiles() {
        let s = percentile_box(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(s.box_min, 3.0);
        assert_eq!(s.median, Some(5.0));
        assert_eq!(s.box_max, 7.0);
        assert_eq!(s.whisker_min, Some(1.0));
        assert_eq!(s.whisker_max, Some(9.0));
        assert_eq!(s.mean, 5.0);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let s = percentile_box(&[9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0]);
        assert_eq!(s.box_min, 3.0);
        assert_eq!(s.median, Some(5.0));
        assert_eq!(s.box_max, 7.0);
    }

    #[test]
    fn degenerate_sample_counts() {
        let empty = percentile_box(&[]);
        assert_eq!(empty.box_min, 0.0);
        assert_eq!(empty.box_max, 0.0);
        assert_eq!(empty.median, None);
        assert_eq!(empty.mean, 0.0);
        assert_eq!(empty.variance, 0.0);

        let one = percentile_box(&[4.0]);
        assert_eq!((one.box_min, one.box_max), (4.0, 4.0));
        assert_eq!(one.whisker_min, None);

        let two = percentile_box(&[7.0, 3.0]);
        assert_eq!((two.box_min, two.box_max), (3.0, 7.0));
        assert_eq!(two.median, None);

        let three = percentile_box(&[3.0, 1.0, 2.0]);
        assert_eq!((three.box_min, three.box_max), (1.0, 3.0));
        assert_eq!(three.median, Some(2.0));

        let four = percentile_box(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!((four.box_min, four.box_max), (2.0, 3.0));
        assert_eq!(four.whisker_min, Some(1.0));
        assert_eq!(four.whisker_max, Some(4.0));
        assert_eq!(four.median, None);
    }

    #[test]
    fn boundaries_are_ordered() {
        let s = percentile_box(&[12.0, 0.5, 3.0, 9.0, 100.0, 2.0, 7.0, 1.0]);
        assert!(s.min() <= s.box_min);
        assert!(s.box_min <= s.median.unwrap());
        assert!(s.median.unwrap() <= s.box_max);
        assert!(s.box_max <= s.max());
    }

    #[test]
    fn mean_and_population_variance() {
        let s = percentile_box(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.variance, 4.0);
    }

    #[test]
    fn min_max_fall_back_to_box_boundaries() {
        let s = percentile_box(&[3.0, 1.0, 2.0]);
        assert_eq!(s.min(), 1.0);
        assert_eq!(s.max(), 3.0);
    }

    #[test]
    fn map_rescales_every_field_at_once() {
        let s = percentile_box(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let doubled = s.map(|v| v * 2.0);
        assert_eq!(doubled.box_min, 6.0);
        assert_eq!(doubled.median, Some(10.0));
        assert_eq!(doubled.box_max, 14.0);
        assert_eq!(doubled.whisker_min, Some(2.0));
        assert_eq!(doubled.whisker_max, Some(18.0));
        assert_eq!(doubled.mean, 10.0);
        // The source summary is untouched.
        assert_eq!(s.median, Some(5.0));
    }

    #[test]
    fn axis_break_detects_high_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 100.0];
        let (start, end) = axis_break(&values).unwrap();
        assert_eq!(end, 100.0);
        assert!(start < 100.0);
        assert!(values.contains(&start));
    }

    #[test]
    fn axis_break_without_outliers_collapses_at_max() {
        let (start, end) = axis_break(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(start, end);
        assert_eq!(end, 5.0);
    }

    #[test]
    fn axis_break_on_empty_input_is_none() {
        assert_eq!(axis_break(&[]), None);
    }
}
