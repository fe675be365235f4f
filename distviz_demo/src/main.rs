// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distribution chart demos for the DistViz utility crates.
//!
//! Each demo builds one chart from deterministic synthetic samples and
//! renders it to a standalone SVG file through the minimal writer in
//! [`svg`]. The point is to exercise the full public surface of
//! `distviz_stats` and `distviz_charts` end to end, not to be a renderer.

mod svg;

use distviz_charts::{
    LogTicks, ScaleLinear, Tick, format_magnitude, format_percent, hash_color, horizontal_span,
    series_fills, step_path, vertical_span,
};
use distviz_stats::{DEFAULT_STEPS, cdf, histogram, percentile_box};
use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use svg::SvgDoc;

fn main() {
    let outputs = [
        ("distviz_cdf.svg", cdf_demo()),
        ("distviz_histogram.svg", histogram_demo()),
        ("distviz_boxes.svg", box_demo()),
    ];
    for (name, content) in outputs {
        std::fs::write(name, content).expect("write demo svg");
        println!("wrote {name}");
    }
}

/// Log-uniform "latency" samples in 1..10^3, deterministic per seed.
fn latency_samples(seed: u64, count: usize) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| 10.0_f64.powf(3.0 * next_unit(&mut state)))
        .collect()
}

/// Triangular-ish samples in 0..100, deterministic per seed.
fn response_samples(seed: u64, count: usize) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            let sum = next_unit(&mut state) + next_unit(&mut state) + next_unit(&mut state);
            sum / 3.0 * 100.0
        })
        .collect()
}

fn next_unit(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*state >> 11) as f64 / (1_u64 << 53) as f64
}

fn solid(brush: &Brush) -> Color {
    match brush {
        Brush::Solid(c) => *c,
        _ => css::BLACK,
    }
}

fn sample_range(samples: &[f64]) -> (f64, f64) {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn x_gridlines(doc: &mut SvgDoc, ticks: &[Tick], xs: &ScaleLinear, plot: Rect) {
    for tick in ticks {
        let x = xs.map(tick.position);
        let stroke = if tick.major {
            css::LIGHT_GRAY
        } else {
            css::GAINSBORO
        };
        doc.line(x, plot.y0, x, plot.y1, stroke, 1.0);
        if tick.major {
            doc.line(x, plot.y1, x, plot.y1 + 4.0, css::BLACK, 1.0);
            doc.text(x, plot.y1 + 16.0, "middle", 11.0, css::BLACK, &tick.label);
        }
    }
}

fn cdf_demo() -> String {
    let series = [
        ("cache hit", latency_samples(1, 400)),
        ("cache miss", latency_samples(7, 400)),
        ("cold start", latency_samples(42, 400)),
    ];

    let (min0, max0) = sample_range(&series[0].1);
    let mut axis = LogTicks::new(min0, max0).expect("samples are positive");
    for (_, samples) in &series[1..] {
        let (min, max) = sample_range(samples);
        axis.expand(min, max).expect("samples are positive");
    }

    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let plot = Rect::new(60.0, 30.0, 620.0, 360.0);
    let (lo, hi) = axis.limits();
    let xs = ScaleLinear::new((lo, hi), (plot.x0, plot.x1));
    let ys = ScaleLinear::new((0.0, 100.0), (plot.y1, plot.y0));

    let mut doc = SvgDoc::new(view.width(), view.height());
    doc.fill_rect(view, css::WHITE);
    doc.text(
        view.width() * 0.5,
        18.0,
        "middle",
        13.0,
        css::BLACK,
        "Latency CDF",
    );

    x_gridlines(&mut doc, &axis.ticks(), &xs, plot);
    for i in 0..=5 {
        let percent = 20.0 * f64::from(i);
        let y = ys.map(percent);
        doc.line(plot.x0, y, plot.x1, y, css::LIGHT_GRAY, 1.0);
        doc.text(
            plot.x0 - 6.0,
            y + 4.0,
            "end",
            11.0,
            css::BLACK,
            &format_percent(percent),
        );
    }
    doc.stroke_rect(plot, css::BLACK, 1.0);

    let fills = series_fills(series.len());
    for (i, (label, samples)) in series.iter().enumerate() {
        let logged: Vec<f64> = samples.iter().map(|v| axis.log(*v)).collect();
        let color = solid(&fills[i]);
        doc.stroke_path(&step_path(&cdf(&logged, DEFAULT_STEPS), &xs, &ys), color, 1.5);
        doc.text(
            plot.x0 + 10.0,
            plot.y0 + 16.0 + 14.0 * i as f64,
            "start",
            11.0,
            color,
            label,
        );
    }

    doc.finish()
}

fn histogram_demo() -> String {
    let samples = response_samples(3, 600);
    let bins = histogram(&samples, DEFAULT_STEPS);
    let max_percent = bins.iter().map(|b| b.percent).fold(0.0, f64::max);

    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let plot = Rect::new(60.0, 30.0, 620.0, 360.0);
    let last = bins.last().expect("histogram always yields at least one bin");
    let xs = ScaleLinear::new((bins[0].lower, last.upper), (plot.x0, plot.x1));
    let ys = ScaleLinear::new((0.0, max_percent * 1.15), (plot.y1, plot.y0));

    let mut doc = SvgDoc::new(view.width(), view.height());
    doc.fill_rect(view, css::WHITE);
    doc.text(
        view.width() * 0.5,
        18.0,
        "middle",
        13.0,
        css::BLACK,
        "Response time distribution",
    );

    for i in 0..=4 {
        let percent = (max_percent * 1.15 * f64::from(i) / 4.0).round();
        let y = ys.map(percent);
        doc.line(plot.x0, y, plot.x1, y, css::LIGHT_GRAY, 1.0);
        doc.text(
            plot.x0 - 6.0,
            y + 4.0,
            "end",
            11.0,
            css::BLACK,
            &format_percent(percent),
        );
    }

    let fill = solid(&series_fills(1)[0]);
    for b in &bins {
        let x0 = xs.map(b.lower) + 1.0;
        let x1 = xs.map(b.upper) - 1.0;
        doc.fill_rect(Rect::new(x0, ys.map(b.percent), x1, plot.y1), fill);
    }

    for b in bins.iter().step_by(3) {
        let x = xs.map(b.lower);
        doc.line(x, plot.y1, x, plot.y1 + 4.0, css::BLACK, 1.0);
        doc.text(
            x,
            plot.y1 + 16.0,
            "middle",
            11.0,
            css::BLACK,
            &format_magnitude(b.lower),
        );
    }
    doc.text(
        xs.map(last.upper),
        plot.y1 + 16.0,
        "middle",
        11.0,
        css::BLACK,
        &format_magnitude(last.upper),
    );
    doc.stroke_rect(plot, css::BLACK, 1.0);

    doc.finish()
}

fn box_demo() -> String {
    let groups = [
        ("api", latency_samples(5, 120)),
        ("db", latency_samples(11, 120)),
        ("disk", latency_samples(23, 120)),
        // A tiny group: degenerate box without whiskers.
        ("batch", vec![40.0, 95.0, 310.0]),
    ];

    let summaries: Vec<_> = groups
        .iter()
        .map(|(_, samples)| percentile_box(samples))
        .collect();
    let min_all = summaries.iter().map(|s| s.min()).fold(f64::INFINITY, f64::min);
    let max_all = summaries
        .iter()
        .map(|s| s.max())
        .fold(f64::NEG_INFINITY, f64::max);
    let axis = LogTicks::new(min_all, max_all).expect("samples are positive");

    // Move every boundary into log coordinates in one go.
    let logged: Vec<_> = summaries.iter().map(|s| s.map(|v| axis.log(v))).collect();

    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let plot = Rect::new(60.0, 30.0, 620.0, 360.0);
    let (lo, hi) = axis.limits();
    let xs = ScaleLinear::new((0.0, groups.len() as f64 + 1.0), (plot.x0, plot.x1));
    let ys = ScaleLinear::new((lo, hi), (plot.y1, plot.y0));

    let mut doc = SvgDoc::new(view.width(), view.height());
    doc.fill_rect(view, css::WHITE);
    doc.text(
        view.width() * 0.5,
        18.0,
        "middle",
        13.0,
        css::BLACK,
        "Latency by subsystem",
    );

    for tick in axis.ticks() {
        let y = ys.map(tick.position);
        let stroke = if tick.major {
            css::LIGHT_GRAY
        } else {
            css::GAINSBORO
        };
        doc.line(plot.x0, y, plot.x1, y, stroke, 1.0);
        if tick.major {
            doc.text(
                plot.x0 - 6.0,
                y + 4.0,
                "end",
                11.0,
                css::BLACK,
                &tick.label,
            );
        }
    }
    doc.stroke_rect(plot, css::BLACK, 1.0);

    for (i, ((name, _), s)) in groups.iter().zip(&logged).enumerate() {
        let x = i as f64 + 1.0;
        let fill = hash_color(i as u64);

        if let (Some(wmin), Some(wmax)) = (s.whisker_min, s.whisker_max) {
            doc.stroke_path(&vertical_span(x, wmin, wmax, &xs, &ys), css::BLACK, 1.0);
            doc.stroke_path(
                &horizontal_span(wmin, x - 0.1, x + 0.1, &xs, &ys),
                css::BLACK,
                1.0,
            );
            doc.stroke_path(
                &horizontal_span(wmax, x - 0.1, x + 0.1, &xs, &ys),
                css::BLACK,
                1.0,
            );
        }

        let body = Rect::new(
            xs.map(x - 0.25),
            ys.map(s.box_max),
            xs.map(x + 0.25),
            ys.map(s.box_min),
        );
        doc.fill_rect(body, fill);
        doc.stroke_rect(body, css::BLACK, 1.0);

        if let Some(median) = s.median {
            doc.stroke_path(
                &horizontal_span(median, x - 0.25, x + 0.25, &xs, &ys),
                css::BLACK,
                1.5,
            );
        }

        // Mean marker, drawn as a small open square.
        let (cx, cy) = (xs.map(x), ys.map(s.mean));
        doc.stroke_rect(Rect::new(cx - 3.0, cy - 3.0, cx + 3.0, cy + 3.0), css::BLACK, 1.0);

        doc.text(xs.map(x), plot.y1 + 16.0, "middle", 11.0, css::BLACK, name);
    }

    doc.finish()
}
