//! Canvas extents and offsets derived from node positions

use crate::error::{MinimapError, Result};
use crate::model::{Point, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub width: u32,
    pub height: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Bounds {
    /// Compute bounds with `margin` split evenly around the extents.
    pub fn compute<I>(positions: I, margin: i64) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut positions = positions.into_iter();
        let first = positions.next().ok_or(MinimapError::EmptyGraph)?;

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in positions {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        // Extents of far-apart i64 coordinates do not fit in i64.
        let width = i128::from(max_x) - i128::from(min_x) + i128::from(margin);
        let height = i128::from(max_y) - i128::from(min_y) + i128::from(margin);
        let (Some(w), Some(h)) = (dimension(width), dimension(height)) else {
            return Err(MinimapError::CanvasTooLarge { width, height });
        };

        let half_margin = margin as f64 / 2.0;
        Ok(Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
            width: w,
            height: h,
            offset_x: min_x.unsigned_abs() as f64 + half_margin,
            offset_y: min_y.unsigned_abs() as f64 + half_margin,
        })
    }

    /// Canvas coordinates of a map position.
    pub fn project(&self, position: Position) -> Point {
        Point::new(
            position.x as f64 + self.offset_x,
            position.y as f64 + self.offset_y,
        )
    }
}

fn dimension(extent: i128) -> Option<u32> {
    u32::try_from(extent.max(1)).ok()
}
