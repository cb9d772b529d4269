//! Drawing capability the walker renders through

use crate::model::{Color, Point};
use std::fmt;

/// Primitive drawing surface. Coordinates are canvas coordinates with the
/// y axis pointing up; implementations handle the flip to image space.
pub trait Canvas {
    fn line(&mut self, from: Point, to: Point, color: &Color, width: f64);

    fn filled_circle(&mut self, center: Point, radius: f64, color: &Color);

    /// Draw `text` centered on `at`.
    fn centered_text(&mut self, at: Point, text: &str, color: &Color);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        at: Point,
        text: String,
        color: Color,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Line { from, to, color, width } => {
                write!(f, "line {from} -> {to} {color} w={width}")
            }
            DrawOp::Circle { center, radius, color } => {
                write!(f, "circle {center} r={radius} {color}")
            }
            DrawOp::Text { at, text, color } => write!(f, "text {at} \"{text}\" {color}"),
        }
    }
}

/// Canvas that keeps every primitive in call order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    /// One line per primitive, for readable assertions.
    pub fn trace(&self) -> String {
        self.ops
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for RecordingCanvas {
    fn line(&mut self, from: Point, to: Point, color: &Color, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.clone(),
            width,
        });
    }

    fn filled_circle(&mut self, center: Point, radius: f64, color: &Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.clone(),
        });
    }

    fn centered_text(&mut self, at: Point, text: &str, color: &Color) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_string(),
            color: color.clone(),
        });
    }
}
