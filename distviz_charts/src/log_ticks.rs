// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation for logarithmically scaled axes.
//!
//! A log axis plots `log_base(value)` as the displayed coordinate.
//! [`LogTicks`] produces the matching [`Tick`] sequence: one major tick per
//! power-of-base order with labels formatted from the original value, and
//! minor ticks at the sub-multiples within each decade. Zero cannot have a
//! real logarithm, so an opt-in sentinel position slightly below the lowest
//! order stands in for it (a display convention, not a logarithm).

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_magnitude;
use crate::tick::{Tick, sort_dedup};

/// Error for a log-axis domain containing non-positive endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidDomain {
    /// Requested domain minimum.
    pub min: f64,
    /// Requested domain maximum.
    pub max: f64,
}

impl core::fmt::Display for InvalidDomain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "log axis domain must be positive, got ({} - {})",
            self.min, self.max
        )
    }
}

impl core::error::Error for InvalidDomain {}

/// Tick generator for a logarithmically scaled axis.
///
/// Positions are in log coordinates (`log(value)` in the configured base);
/// labels are produced from the original values through the configured
/// formatter ([`format_magnitude`] unless overridden; plug in
/// [`crate::format_duration_seconds`] for time-valued axes).
#[derive(Clone)]
pub struct LogTicks {
    min: f64,
    max: f64,
    base: u32,
    natural: bool,
    show_zero: bool,
    formatter: Option<Arc<dyn Fn(f64) -> String>>,
}

impl core::fmt::Debug for LogTicks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LogTicks")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("base", &self.base)
            .field("natural", &self.natural)
            .field("show_zero", &self.show_zero)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl LogTicks {
    /// Creates a generator for the `[min, max]` value domain.
    ///
    /// The domain must be strictly positive; zero is representable only
    /// through the display sentinel (see [`LogTicks::log`]).
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidDomain> {
        if min <= 0.0 || max <= 0.0 {
            return Err(InvalidDomain { min, max });
        }
        Ok(Self {
            min,
            max,
            base: 10,
            natural: false,
            show_zero: false,
            formatter: None,
        })
    }

    /// Sets the log base (values below 2 are clamped to 2).
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base.max(2);
        self
    }

    /// Uses base-e positions and powers instead of the integer base.
    pub fn with_natural_log(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }

    /// Prepends a `"0"` tick at the zero sentinel position.
    pub fn with_show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    /// Sets a custom label formatter, applied to tick *values* (not
    /// positions).
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Returns the domain minimum (in value space).
    pub fn domain_min(&self) -> f64 {
        self.min
    }

    /// Returns the domain maximum (in value space).
    pub fn domain_max(&self) -> f64 {
        self.max
    }

    /// Widens the domain to also cover `[min, max]`.
    ///
    /// Used when several series share one axis and each contributes its own
    /// observed range.
    pub fn expand(&mut self, min: f64, max: f64) -> Result<(), InvalidDomain> {
        if min <= 0.0 || max <= 0.0 {
            return Err(InvalidDomain { min, max });
        }
        self.min = self.min.min(min);
        self.max = self.max.max(max);
        Ok(())
    }

    /// Maps a value into axis coordinates: `log_base(value)`.
    ///
    /// `log(0)` returns the zero sentinel, half a unit below the lowest
    /// order of magnitude. It is a plottable stand-in, never a real
    /// logarithm.
    pub fn log(&self, value: f64) -> f64 {
        if value == 0.0 {
            return self.zero_position();
        }
        if self.natural {
            return value.ln();
        }
        match self.base {
            2 => value.log2(),
            10 => value.log10(),
            base => value.log10() / f64::from(base).log10(),
        }
    }

    /// Maps an axis coordinate back into value space: `base^order`.
    pub fn pow(&self, order: f64) -> f64 {
        if self.natural {
            core::f64::consts::E.powf(order)
        } else {
            f64::from(self.base).powf(order)
        }
    }

    /// The sentinel coordinate used to draw zero on this axis.
    pub fn zero_position(&self) -> f64 {
        log_of_positive(self.min, self.base, self.natural).floor() - 0.5
    }

    /// Returns the displayed coordinate range `(low, high)`.
    ///
    /// The low end is the bottom of the lowest decade (or the zero sentinel
    /// when zero is shown); the high end is `log(max)`.
    pub fn limits(&self) -> (f64, f64) {
        let low = if self.show_zero {
            self.zero_position()
        } else {
            self.log(self.min).floor()
        };
        (low, self.log(self.max))
    }

    fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(f) => (f)(value),
            None => format_magnitude(value),
        }
    }

    /// Generates the tick sequence for the current domain.
    ///
    /// One major tick per power-of-base order, minor ticks at the decade's
    /// sub-multiples (base 2 instead gets a single mid-octave minor at
    /// `1.5·2^k`). In the top decade, minors stop at the domain maximum and
    /// the closing major sits at `log(max)` so no gridline extends past the
    /// data. The output is sorted by position with no duplicates.
    pub fn ticks(&self) -> Vec<Tick> {
        let min_order = order_index(self.log(self.min).floor());
        let max_order = order_index(self.log(self.max).ceil());
        let top = self.log(self.max);

        let mut out = Vec::new();
        if self.show_zero {
            out.push(Tick::major(self.zero_position(), "0"));
        }

        for order in min_order..max_order {
            let b = self.pow(f64::from(order));
            out.push(Tick::major(f64::from(order), self.format(b)));

            if self.base == 2 && !self.natural {
                // Mid-octave marker; a full sub-multiple sweep would only
                // ever produce this one tick anyway.
                let pos = self.log(1.5 * b);
                if pos < top - 1.0e-9 {
                    out.push(Tick::minor(pos));
                }
            } else {
                for i in 2..self.base {
                    let pos = self.log(b * f64::from(i));
                    if pos < top - 1.0e-9 {
                        out.push(Tick::minor(pos));
                    }
                }
            }
        }

        // Close the range at the data maximum rather than the ceil order.
        out.push(Tick::major(top, self.format(self.max)));

        let (low, high) = self.limits();
        out.retain(|t| t.position >= low - 1.0e-9 && t.position <= high + 1.0e-9);
        sort_dedup(&mut out);
        out
    }
}

fn log_of_positive(value: f64, base: u32, natural: bool) -> f64 {
    if natural {
        return value.ln();
    }
    match base {
        2 => value.log2(),
        10 => value.log10(),
        base => value.log10() / f64::from(base).log10(),
    }
}

fn order_index(order: f64) -> i32 {
    let clamped = order.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        clamped as i32
    }
}
