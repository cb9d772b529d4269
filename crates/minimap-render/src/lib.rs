//! Minimap rendering: SVG canvas, PNG rasterization and file export

pub mod svg;
pub mod export;

#[cfg(test)]
pub mod tests;

pub use svg::SvgCanvas;
pub use export::{ImageFormat, RenderedImage, render, rasterize, save, output_path, output_stem};
