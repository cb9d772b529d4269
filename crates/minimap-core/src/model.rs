//! Core data structures for the path-actor graph

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense identifier of a node: its position in ingest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Sequential warp identifier, assigned in first-discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct WarpId(pub usize);

impl fmt::Display for WarpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer position of a node in map space (y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Position { x, y }
    }
}

/// A point on the canvas after offsets have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A CSS color, either a named color (`darkcyan`) or a hex literal (`#1e90ff`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(css: impl Into<String>) -> Self {
        Color(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single path actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
    pub hidden: bool,
    /// Neighbor names in input order, sentinels already removed.
    pub connections: Vec<String>,
    /// Warp this node departs through (`FastTravel`).
    pub outbound_warp: Option<String>,
    /// Warp this node is the arrival point of (`UniqueLabel`).
    pub inbound_warp: Option<String>,
}

/// A fast-travel link between departure nodes and at most one arrival node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warp {
    pub id: WarpId,
    pub key: String,
    pub sources: Vec<NodeId>,
    pub destination: Option<NodeId>,
}

impl Warp {
    pub fn new(id: WarpId, key: impl Into<String>) -> Self {
        Warp {
            id,
            key: key.into(),
            sources: Vec::new(),
            destination: None,
        }
    }

    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
