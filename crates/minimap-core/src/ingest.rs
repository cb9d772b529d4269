//! Ingest of path-actor records exported from the game data

use crate::error::{MinimapError, Result};
use crate::graph::NodeStore;
use crate::model::*;
use crate::warp::WarpRegistry;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Marker the game data uses for "no value" in string and link fields.
pub const NONE_SENTINEL: &str = "None";

/// Default prefix of record keys that describe path actors.
pub const NODE_PREFIX: &str = "PathActor";

#[derive(Debug, Deserialize)]
struct RawActor {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "HiddenPath")]
    hidden_path: bool,
    #[serde(rename = "Link")]
    link: RawLink,
    #[serde(rename = "FastTravel")]
    fast_travel: String,
    #[serde(rename = "UniqueLabel")]
    unique_label: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLink {
    List(Vec<String>),
    Sentinel(String),
}

/// Node store and warp registry built from one document.
#[derive(Debug, Default)]
pub struct PathGraph {
    pub nodes: NodeStore,
    pub warps: WarpRegistry,
}

impl PathGraph {
    /// Parse a JSON document. The game export wraps the record mapping in an
    /// array; a bare mapping is accepted as well.
    pub fn from_json_str(json: &str, prefix: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_document(&document, prefix)
    }

    pub fn from_document(document: &Value, prefix: &str) -> Result<Self> {
        let records = match document {
            Value::Object(map) => map,
            Value::Array(items) => match items.first() {
                Some(Value::Object(map)) => map,
                Some(_) => {
                    return Err(MinimapError::InvalidDocument(
                        "first array element is not an object".to_string(),
                    ));
                }
                None => {
                    return Err(MinimapError::InvalidDocument("empty array".to_string()));
                }
            },
            _ => {
                return Err(MinimapError::InvalidDocument(
                    "expected an object or an array of objects".to_string(),
                ));
            }
        };
        Self::from_records(records, prefix)
    }

    /// Build the graph from a record mapping, keeping the mapping's key order.
    pub fn from_records(records: &Map<String, Value>, prefix: &str) -> Result<Self> {
        let mut graph = PathGraph::default();

        for (name, record) in records {
            if !name.starts_with(prefix) {
                tracing::trace!("Skipping non-actor record: {}", name);
                continue;
            }
            let node = parse_actor(name, record)?;
            let outbound = node.outbound_warp.clone();
            let inbound = node.inbound_warp.clone();
            let id = graph.nodes.add_node(node)?;

            if let Some(key) = outbound {
                graph.warps.register_outbound(id, &key);
            }
            if let Some(key) = inbound {
                graph.warps.register_inbound(id, &key);
            }
        }

        tracing::debug!(
            "Ingested {} path actors, {} warps",
            graph.nodes.node_count(),
            graph.warps.len()
        );
        Ok(graph)
    }
}

fn parse_actor(name: &str, record: &Value) -> Result<PathNode> {
    let raw = RawActor::deserialize(record)
        .map_err(|e| MinimapError::data_format(name, e.to_string()))?;

    let connections = match raw.link {
        RawLink::List(links) => links.into_iter().filter(|l| l != NONE_SENTINEL).collect(),
        RawLink::Sentinel(s) if s == NONE_SENTINEL => Vec::new(),
        RawLink::Sentinel(s) => {
            return Err(MinimapError::data_format(
                name,
                format!("`Link` must be a list of names or \"{NONE_SENTINEL}\", got \"{s}\""),
            ));
        }
    };

    // The export's X axis is the map's vertical axis and vice versa.
    Ok(PathNode {
        id: NodeId::default(),
        name: name.to_string(),
        position: Position::new(coordinate(name, "Y", raw.y)?, coordinate(name, "X", raw.x)?),
        hidden: raw.hidden_path,
        connections,
        outbound_warp: optional_key(raw.fast_travel),
        inbound_warp: optional_key(raw.unique_label),
    })
}

/// Truncate toward zero, rejecting values outside the i64 range instead of saturating.
fn coordinate(name: &str, field: &str, value: f64) -> Result<i64> {
    let truncated = value.trunc();
    // i64::MIN and i64::MAX + 1 are both exact powers of two in f64.
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Ok(truncated as i64)
    } else {
        Err(MinimapError::data_format(
            name,
            format!("`{field}` coordinate {value} is out of range"),
        ))
    }
}

fn optional_key(value: String) -> Option<String> {
    (value != NONE_SENTINEL).then_some(value)
}
