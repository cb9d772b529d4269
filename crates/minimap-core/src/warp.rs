//! Warp registry: fast-travel keys to warp records with dense ids

use crate::model::{NodeId, Warp, WarpId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Recorded when a warp key is claimed as arrival point by a second node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationOverwrite {
    pub key: String,
    pub warp: WarpId,
    pub previous: NodeId,
    pub replacement: NodeId,
}

/// Maps warp keys to warps. Ids equal the number of keys seen before, so they
/// stay dense and follow first-discovery order whatever role introduced the key.
#[derive(Debug, Default)]
pub struct WarpRegistry {
    warps: Vec<Warp>,
    by_key: HashMap<String, WarpId>,
    overwrites: Vec<DestinationOverwrite>,
}

impl WarpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, key: &str) -> &mut Warp {
        let id = match self.by_key.get(key) {
            Some(&id) => id,
            None => {
                let id = WarpId(self.warps.len());
                self.by_key.insert(key.to_string(), id);
                self.warps.push(Warp::new(id, key));
                id
            }
        };
        &mut self.warps[id.0]
    }

    /// Record `node` as a departure point of `key`.
    pub fn register_outbound(&mut self, node: NodeId, key: &str) -> WarpId {
        let warp = self.entry(key);
        warp.sources.push(node);
        warp.id
    }

    /// Record `node` as the arrival point of `key`. A previous arrival point
    /// is replaced; the replacement is logged and kept in [`Self::overwrites`].
    pub fn register_inbound(&mut self, node: NodeId, key: &str) -> WarpId {
        let warp = self.entry(key);
        let id = warp.id;
        let previous = warp.destination.replace(node);
        if let Some(previous) = previous.filter(|&p| p != node) {
            tracing::warn!(
                "Warp `{}` (id {}) already arrives at node #{}; node #{} replaces it",
                key,
                id,
                previous.0,
                node.0
            );
            self.overwrites.push(DestinationOverwrite {
                key: key.to_string(),
                warp: id,
                previous,
                replacement: node,
            });
        }
        id
    }

    /// Get a warp by key.
    pub fn get(&self, key: &str) -> Option<&Warp> {
        self.by_key.get(key).map(|id| &self.warps[id.0])
    }

    /// Get a warp by id.
    pub fn warp(&self, id: WarpId) -> Option<&Warp> {
        self.warps.get(id.0)
    }

    /// Number of distinct warp keys.
    pub fn len(&self) -> usize {
        self.warps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warps.is_empty()
    }

    /// Iterate warps in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Warp> {
        self.warps.iter()
    }

    pub fn overwrites(&self) -> &[DestinationOverwrite] {
        &self.overwrites
    }
}
