// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick value type shared by axis tick generators.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// A labeled position marker on a chart axis.
///
/// Consumers expect a tick sequence to be sorted by position with no
/// duplicate positions; [`sort_dedup`] enforces that.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in axis coordinates (for a log axis, the log of the value).
    pub position: f64,
    /// Label text. Empty for minor ticks.
    pub label: String,
    /// Whether this is a major tick (labeled, with a major gridline).
    pub major: bool,
}

impl Tick {
    /// Creates a labeled major tick.
    pub fn major(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            major: true,
        }
    }

    /// Creates an unlabeled minor tick.
    pub fn minor(position: f64) -> Self {
        Self {
            position,
            label: String::new(),
            major: false,
        }
    }
}

/// Sorts `ticks` by position and removes duplicate positions.
///
/// When a major and a minor tick collide, the major one is kept.
pub fn sort_dedup(ticks: &mut Vec<Tick>) {
    ticks.sort_by(|a, b| {
        a.position
            .total_cmp(&b.position)
            .then(b.major.cmp(&a.major))
    });
    ticks.dedup_by(|b, a| a.position == b.position);
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn constructors_set_major_flag_and_label() {
        let major = Tick::major(2.0, "100");
        assert!(major.major);
        assert_eq!(major.label, "100");

        let minor = Tick::minor(2.3);
        assert!(!minor.major);
        assert!(minor.label.is_empty());
    }

    #[test]
    fn sort_dedup_orders_and_prefers_majors() {
        let mut ticks = std::vec![
            Tick::minor(3.0),
            Tick::minor(1.0),
            Tick::major(1.0, "10"),
            Tick::major(0.0, "1"),
        ];
        sort_dedup(&mut ticks);

        let positions: std::vec::Vec<f64> = ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, std::vec![0.0, 1.0, 3.0]);
        assert!(ticks[1].major, "major must win over the colliding minor");
        assert_eq!(ticks[1].label, "10");
    }
}
