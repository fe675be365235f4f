// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample-set statistics for distribution charts.
//!
//! This crate is the data side of the DistViz workspace: small, pure
//! functions that reduce a set of numeric observations to the structures a
//! chart layer plots directly.
//! - **Box summaries** condense a sample set into quartile-style box
//!   boundaries plus mean/variance.
//! - **CDF construction** buckets samples into cumulative
//!   percentage-below-threshold pairs, with a staircase transform for
//!   step-function plotting.
//! - **Histogram construction** buckets samples into equal-width bins of
//!   percentage-of-total counts.
//!
//! Everything operates on caller-supplied in-memory slices and returns new
//! values; there is no shared state and no I/O.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod cdf;
#[cfg(not(feature = "std"))]
mod float;
mod histogram;
mod summary;

pub use cdf::{DEFAULT_STEPS, cdf, cdf_log_buckets, cdf_with_range, staircase};
pub use histogram::{HistogramBin, histogram};
pub use summary::{BoxSummary, axis_break, percentile_box};
