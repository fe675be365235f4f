// Copyright 2025 the DistViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `distviz_demo`.

use kurbo::{BezPath, Rect};
use peniko::Color;

/// Accumulates SVG elements in paint order and serializes the document.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub(crate) fn fill_rect(&mut self, r: Rect, fill: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            rgb(fill)
        ));
        self.body.push('\n');
    }

    pub(crate) fn stroke_rect(&mut self, r: Rect, stroke: Color, stroke_width: f64) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            rgb(stroke),
            stroke_width
        ));
        self.body.push('\n');
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, stroke: Color, stroke_width: f64) {
        self.body.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path.to_svg(),
            rgb(stroke),
            stroke_width
        ));
        self.body.push('\n');
    }

    pub(crate) fn line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Color,
        stroke_width: f64,
    ) {
        self.body.push_str(&format!(
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" stroke="{}" stroke-width="{stroke_width}"/>"#,
            rgb(stroke)
        ));
        self.body.push('\n');
    }

    pub(crate) fn text(
        &mut self,
        x: f64,
        y: f64,
        anchor: &str,
        font_size: f64,
        fill: Color,
        text: &str,
    ) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" font-family="sans-serif" text-anchor="{anchor}" fill="{}">{}</text>"#,
            rgb(fill),
            escape_xml(text)
        ));
        self.body.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn rgb(c: Color) -> String {
    let c = c.to_rgba8();
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
