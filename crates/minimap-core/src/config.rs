//! Style and traversal settings, loadable from a TOML file

use crate::error::{MinimapError, Result};
use crate::ingest::NODE_PREFIX;
use crate::model::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the actor the first traversal starts from when present.
pub const BASE_VERTEX: &str = "PathActorBP";

/// Colors used for every primitive on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub visible: Color,
    pub hidden: Color,
    /// Warp marker whose warp has an arrival point.
    pub linked: Color,
    /// Outbound warp marker with no arrival point.
    pub unlinked: Color,
    /// Inbound warp marker nobody departs to (diagnostic mode only).
    pub unreached: Color,
    pub label: Color,
    /// Base disc of a node flagged hidden itself (diagnostic mode only).
    pub debug_hidden: Color,
    /// Base disc of a node not flagged hidden (diagnostic mode only).
    pub debug_visible: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            visible: Color::new("white"),
            hidden: Color::new("gray"),
            linked: Color::new("darkcyan"),
            unlinked: Color::new("darkgreen"),
            unreached: Color::new("darkslategray"),
            label: Color::new("white"),
            debug_hidden: Color::new("red"),
            debug_visible: Color::new("green"),
        }
    }
}

impl Palette {
    pub fn path(&self, hidden: bool) -> &Color {
        if hidden { &self.hidden } else { &self.visible }
    }
}

/// Settings for one minimap run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Diameter of a node disc; also the stroke width of path segments.
    pub path_width: f64,
    /// Padding added to the canvas, split evenly between both sides.
    pub margin: i64,
    pub font_size: f64,
    pub font_family: String,
    /// Record keys starting with this prefix are path actors.
    pub node_prefix: String,
    /// Preferred start of the first traversal.
    pub base_vertex: String,
    /// Color base discs by the node's own hidden flag and show unreached arrivals.
    pub debug: bool,
    pub palette: Palette,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        MinimapConfig {
            path_width: 100.0,
            margin: 400,
            font_size: 90.0,
            font_family: "Arial".to_string(),
            node_prefix: NODE_PREFIX.to_string(),
            base_vertex: BASE_VERTEX.to_string(),
            debug: false,
            palette: Palette::default(),
        }
    }
}

impl MinimapConfig {
    /// Radius of the disc drawn on every node.
    pub fn node_radius(&self) -> f64 {
        self.path_width / 2.0
    }

    /// Radius of the disc carrying a warp number.
    pub fn warp_radius(&self) -> f64 {
        self.path_width * 2.0 / 3.0
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| MinimapError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| MinimapError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }
}
