// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series geometry.
//!
//! Converts data-space point sequences into `kurbo` paths positioned inside
//! a plot rectangle. Styling (stroke, fill) is left to the consumer.

use distviz_stats::staircase;
use kurbo::BezPath;

use crate::scale::ScaleLinear;

/// Builds a step-function path from CDF points.
///
/// Expands the points through [`staircase`] first, so each rise renders as
/// a flat run followed by a vertical jump rather than an interpolated ramp.
pub fn step_path(cdf_points: &[(f64, f64)], x: &ScaleLinear, y: &ScaleLinear) -> BezPath {
    polyline(&staircase(cdf_points), x, y)
}

/// Builds a polyline through `points`, mapped by the axis scales.
///
/// Empty input produces an empty path.
pub fn polyline(points: &[(f64, f64)], x: &ScaleLinear, y: &ScaleLinear) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&(px, py)) = iter.next() {
        path.move_to((x.map(px), y.map(py)));
        for &(px, py) in iter {
            path.line_to((x.map(px), y.map(py)));
        }
    }
    path
}

/// Builds a vertical segment at data-space `x` from `y0` to `y1`.
///
/// Used for box-plot whisker stems and drop lines.
pub fn vertical_span(
    x: f64,
    y0: f64,
    y1: f64,
    xs: &ScaleLinear,
    ys: &ScaleLinear,
) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((xs.map(x), ys.map(y0)));
    path.line_to((xs.map(x), ys.map(y1)));
    path
}

/// Builds a horizontal segment at data-space `y` from `x0` to `x1`.
///
/// Used for median/mean lines and whisker caps.
pub fn horizontal_span(
    y: f64,
    x0: f64,
    x1: f64,
    xs: &ScaleLinear,
    ys: &ScaleLinear,
) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((xs.map(x0), ys.map(y)));
    path.line_to((xs.map(x1), ys.map(y)));
    path
}
