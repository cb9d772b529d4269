//! SVG implementation of the drawing canvas

use minimap_core::{Canvas, Color, Minimap, Point};
use std::fmt::Write;

/// Collects primitives into an SVG document.
///
/// Map coordinates grow upwards while SVG grows downwards, so everything is
/// placed in a group mirrored around the horizontal axis. Text gets a second
/// mirror so glyphs stay upright.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    font_size: f64,
    font_family: String,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, font_size: f64, font_family: impl Into<String>) -> Self {
        SvgCanvas {
            width,
            height,
            font_size,
            font_family: font_family.into(),
            body: String::new(),
        }
    }

    /// Canvas sized and styled for `map`.
    pub fn for_minimap(map: &Minimap) -> Self {
        let bounds = map.bounds();
        let config = map.config();
        Self::new(bounds.width, bounds.height, config.font_size, config.font_family.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Close the document and return its text.
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r#"  <g transform="matrix(1 0 0 -1 0 {})">"#, self.height);
        svg.push_str(&self.body);
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");
        svg
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: Point, to: Point, color: &Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(color.as_str()),
            width
        );
    }

    fn filled_circle(&mut self, center: Point, radius: f64, color: &Color) {
        let _ = writeln!(
            self.body,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            center.x,
            center.y,
            radius,
            escape_xml(color.as_str())
        );
    }

    fn centered_text(&mut self, at: Point, text: &str, color: &Color) {
        let _ = writeln!(
            self.body,
            r#"    <text transform="matrix(1 0 0 -1 {} {})" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            at.x,
            at.y,
            escape_xml(&self.font_family),
            self.font_size,
            escape_xml(color.as_str()),
            escape_xml(text)
        );
    }
}

pub(crate) fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
