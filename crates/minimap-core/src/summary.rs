//! Graph statistics for inspecting a dataset without rendering it

use crate::graph::NodeStore;
use crate::warp::{DestinationOverwrite, WarpRegistry};
use petgraph::algo::connected_components;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub hidden_nodes: usize,
    /// Distinct undirected links between known actors.
    pub links: usize,
    pub components: usize,
    pub warps: usize,
    /// Warp keys with departures but no arrival point.
    pub orphan_warps: Vec<String>,
    /// Warp keys with an arrival point nobody departs to.
    pub unreached_destinations: Vec<String>,
    /// `(actor, missing target)` pairs.
    pub dangling_links: Vec<(String, String)>,
    pub destination_overwrites: Vec<DestinationOverwrite>,
}

impl GraphSummary {
    pub fn compute(nodes: &NodeStore, warps: &WarpRegistry) -> Self {
        // Links declared from both ends count once.
        let links: HashSet<(usize, usize)> = nodes
            .graph()
            .edge_references()
            .map(|edge| {
                let (a, b) = (edge.source().index(), edge.target().index());
                (a.min(b), a.max(b))
            })
            .collect();

        GraphSummary {
            nodes: nodes.node_count(),
            hidden_nodes: nodes.all_nodes().filter(|n| n.hidden).count(),
            links: links.len(),
            // Weakly connected: a link declared from one end still joins both actors.
            components: connected_components(nodes.graph()),
            warps: warps.len(),
            orphan_warps: warps
                .iter()
                .filter(|w| !w.has_destination())
                .map(|w| w.key.clone())
                .collect(),
            unreached_destinations: warps
                .iter()
                .filter(|w| w.has_destination() && !w.has_sources())
                .map(|w| w.key.clone())
                .collect(),
            dangling_links: nodes
                .dangling_links()
                .into_iter()
                .map(|(id, missing)| (nodes[id].name.clone(), missing.to_string()))
                .collect(),
            destination_overwrites: warps.overwrites().to_vec(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "actors:       {} ({} hidden)", self.nodes, self.hidden_nodes)?;
        writeln!(f, "links:        {}", self.links)?;
        writeln!(f, "components:   {}", self.components)?;
        writeln!(f, "warps:        {}", self.warps)?;
        if !self.orphan_warps.is_empty() {
            writeln!(f, "no arrival:   {}", self.orphan_warps.join(", "))?;
        }
        if !self.unreached_destinations.is_empty() {
            writeln!(f, "unreached:    {}", self.unreached_destinations.join(", "))?;
        }
        for (actor, missing) in &self.dangling_links {
            writeln!(f, "dangling:     {actor} -> {missing}")?;
        }
        for overwrite in &self.destination_overwrites {
            writeln!(
                f,
                "overwritten:  warp `{}` arrival #{} replaced by #{}",
                overwrite.key, overwrite.previous.0, overwrite.replacement.0
            )?;
        }
        Ok(())
    }
}
