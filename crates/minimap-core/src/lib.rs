//! Minimap Core: path-actor graph, warp registry and the traversal that draws them

pub mod model;
pub mod error;
pub mod graph;
pub mod warp;
pub mod ingest;
pub mod bounds;
pub mod config;
pub mod canvas;
pub mod walker;
pub mod summary;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, WarpId, Position, Point, Color, PathNode, Warp};
pub use error::{MinimapError, Result};
pub use graph::NodeStore;
pub use warp::{WarpRegistry, DestinationOverwrite};
pub use ingest::{PathGraph, NODE_PREFIX, NONE_SENTINEL};
pub use bounds::Bounds;
pub use config::{MinimapConfig, Palette, BASE_VERTEX};
pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use walker::{Minimap, WalkReport};
pub use summary::GraphSummary;
