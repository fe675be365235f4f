// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-side utilities for distribution charts.
//!
//! This crate is the chart-facing layer of the DistViz workspace. It does
//! not render anything itself; it produces the values a plotting/canvas
//! collaborator consumes:
//! - **Ticks** for logarithmically scaled axes, including a display sentinel
//!   that lets zero appear on an otherwise-log axis.
//! - **Label formatters** for magnitudes (`1.5K`, `2M`), percentages, and
//!   compact durations (`1m5s`).
//! - **Scales and series geometry** mapping data-space points into plot
//!   coordinates and `kurbo` paths.
//! - **Palette helpers** for coloring multiple series consistently.
//!
//! Rendering, layout, legends, and file export are downstream concerns.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod format;
mod log_ticks;
mod palette;
mod scale;
mod series;
mod tick;

pub use format::{format_duration_seconds, format_magnitude, format_percent};
pub use log_ticks::{InvalidDomain, LogTicks};
pub use palette::{hash_color, series_fills};
pub use scale::ScaleLinear;
pub use series::{horizontal_span, polyline, step_path, vertical_span};
pub use tick::{Tick, sort_dedup};
