// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram (empirical PDF) construction.

extern crate alloc;

use alloc::vec::Vec;

/// One histogram bin: a `(lower, upper]` sub-range and its share of the
/// sample set in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Lower bin edge. Inclusive only for the first bin.
    pub lower: f64,
    /// Upper bin edge, inclusive.
    pub upper: f64,
    /// Percentage of all samples falling in this bin.
    pub percent: f64,
}

/// Buckets `samples` into `steps` equal-width bins spanning their observed
/// range.
///
/// A sample belongs to the bin where `lower < x ≤ upper`, except that the
/// first bin also includes its lower edge so the sample minimum is counted.
/// Percentages therefore sum to 100 for non-empty input. Bin edges are
/// derived from the bin index rather than accumulated, so the last bin's
/// upper edge is exactly the sample maximum.
///
/// Empty input yields a single degenerate zero bin. All-equal input puts
/// everything in the first (zero-width) bin.
pub fn histogram(samples: &[f64], steps: usize) -> Vec<HistogramBin> {
    let steps = steps.max(1);
    if samples.is_empty() {
        return alloc::vec![HistogramBin {
            lower: 0.0,
            upper: 0.0,
            percent: 0.0,
        }];
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let total = samples.len() as f64;

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        let lower = min + span * i as f64 / steps as f64;
        let upper = if i + 1 == steps {
            max
        } else {
            min + span * (i + 1) as f64 / steps as f64
        };
        let count = samples
            .iter()
            .filter(|&&x| (x > lower || (i == 0 && x >= lower)) && x <= upper)
            .count();
        out.push(HistogramBin {
            lower,
            upper,
            percent: count as f64 / total * 100.0,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bins_are_contiguous_and_ordered() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let bins = histogram(&samples, 3);

        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0].lower, 1.0);
        assert_eq!(bins[2].upper, 10.0);
        for w in bins.windows(2) {
            assert_eq!(w[0].upper, w[1].lower);
            assert!(w[0].lower < w[0].upper);
        }
    }

    #[test]
    fn percentages_sum_to_100() {
        let samples = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0];
        let bins = histogram(&samples, 7);
        let sum: f64 = bins.iter().map(|b| b.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn first_bin_counts_the_sample_minimum() {
        let bins = histogram(&[1.0, 2.0, 3.0, 4.0], 2);
        // 1.0 sits exactly on the first bin's lower edge.
        assert_eq!(bins[0].percent, 50.0);
        assert_eq!(bins[1].percent, 50.0);
    }

    #[test]
    fn empty_input_yields_a_degenerate_zero_bin() {
        let bins = histogram(&[], 5);
        assert_eq!(
            bins,
            std::vec![HistogramBin {
                lower: 0.0,
                upper: 0.0,
                percent: 0.0,
            }]
        );
    }

    #[test]
    fn all_equal_samples_land_in_the_first_bin() {
        let bins = histogram(&[7.0, 7.0, 7.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].percent, 100.0);
        assert!(bins[1..].iter().all(|b| b.percent == 0.0));
    }

    #[test]
    fn upper_edges_are_inclusive() {
        // 5.5 is exactly the first bin's upper edge of [1, 10] split in two.
        let bins = histogram(&[1.0, 5.5, 10.0], 2);
        assert!((bins[0].percent - 200.0 / 3.0).abs() < 1e-9);
        assert!((bins[1].percent - 100.0 / 3.0).abs() < 1e-9);
    }
}
