//! Node store: path actors in ingest order, links held in a petgraph graph

use crate::error::{MinimapError, Result};
use crate::model::*;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The path-actor graph. Each declared link is a directed edge weighted with
/// its position in the declaring node's `Link` list, so declaration order
/// survives petgraph's own edge ordering.
pub struct NodeStore {
    inner: DiGraph<PathNode, usize>,
    by_name: HashMap<String, NodeId>,
    /// Links naming actors not ingested yet: target name -> (source, position).
    pending: HashMap<String, Vec<(NodeId, usize)>>,
}

impl std::fmt::Debug for NodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeStore")
            .field("node_count", &self.inner.node_count())
            .field("link_count", &self.inner.edge_count())
            .finish()
    }
}

fn node_index(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.index())
}

impl NodeStore {
    pub fn new() -> Self {
        NodeStore {
            inner: DiGraph::new(),
            by_name: HashMap::new(),
            pending: HashMap::new(),
        }
    }

    /// Add a node. The `id` field is overwritten with the assigned NodeId.
    /// Links to already known actors become edges now; the rest wait until
    /// their target is added.
    pub fn add_node(&mut self, mut node: PathNode) -> Result<NodeId> {
        if self.by_name.contains_key(&node.name) {
            return Err(MinimapError::data_format(&node.name, "duplicate path actor name"));
        }
        let id = NodeId(self.inner.node_count());
        node.id = id;
        let name = node.name.clone();
        let connections = node.connections.clone();

        let idx = self.inner.add_node(node);
        debug_assert_eq!(idx.index(), id.index());
        self.by_name.insert(name.clone(), id);

        for (position, target) in connections.iter().enumerate() {
            match self.by_name.get(target) {
                Some(&target) => {
                    self.inner.add_edge(idx, node_index(target), position);
                }
                None => self
                    .pending
                    .entry(target.clone())
                    .or_default()
                    .push((id, position)),
            }
        }
        for (source, position) in self.pending.remove(&name).unwrap_or_default() {
            self.inner.add_edge(node_index(source), idx, position);
        }
        Ok(id)
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.inner.node_weight(node_index(id))
    }

    /// Look up a node by its actor name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of resolved links, counted once per declaring node.
    pub fn link_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// The underlying directed link graph; node indices equal `NodeId`s.
    pub fn graph(&self) -> &DiGraph<PathNode, usize> {
        &self.inner
    }

    /// Iterate over all nodes in ingest order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.inner.raw_nodes().iter().map(|n| &n.weight)
    }

    /// Resolved neighbors of a node, in declaration order. Links to unknown names are dropped.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut links: Vec<(usize, NodeId)> = self
            .inner
            .edges_directed(node_index(id), Direction::Outgoing)
            .map(|edge| (*edge.weight(), NodeId(edge.target().index())))
            .collect();
        links.sort_by_key(|&(position, _)| position);
        links.into_iter().map(|(_, target)| target).collect()
    }

    /// Neighbors ordered so visible nodes come before hidden ones.
    /// The sort is stable, so declaration order survives within each group.
    pub fn sorted_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors = self.neighbors(id);
        neighbors.sort_by_key(|&n| self.node(n).is_some_and(|node| node.hidden));
        neighbors
    }

    /// Links whose target name is not a known node, as `(declaring node, missing name)`.
    pub fn dangling_links(&self) -> Vec<(NodeId, &str)> {
        let mut dangling: Vec<(NodeId, usize, &str)> = self
            .pending
            .iter()
            .flat_map(|(name, sources)| {
                sources
                    .iter()
                    .map(move |&(source, position)| (source, position, name.as_str()))
            })
            .collect();
        dangling.sort();
        dangling
            .into_iter()
            .map(|(source, _, name)| (source, name))
            .collect()
    }
}

impl std::ops::Index<NodeId> for NodeStore {
    type Output = PathNode;

    fn index(&self, id: NodeId) -> &PathNode {
        &self.inner[node_index(id)]
    }
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}
