//! Graph walker: visits every path actor once and draws the minimap
//!
//! Each connected component is walked depth-first from a root. Path segments
//! are drawn post-order, after everything reachable below them, and each node's
//! markers are drawn right after the segment leading to it. The hidden flag
//! accumulates along a branch: once a segment is hidden, everything drawn
//! further down that branch is hidden too.

use crate::bounds::Bounds;
use crate::canvas::Canvas;
use crate::config::MinimapConfig;
use crate::error::Result;
use crate::graph::NodeStore;
use crate::ingest::PathGraph;
use crate::model::{Color, NodeId, PathNode, Point, Warp};
use crate::warp::WarpRegistry;
use serde::Serialize;
use std::collections::HashSet;

/// A fully ingested map, ready to be drawn any number of times.
#[derive(Debug)]
pub struct Minimap {
    graph: PathGraph,
    bounds: Bounds,
    config: MinimapConfig,
}

/// What a single walk did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalkReport {
    /// Roots the walk started from, one per component.
    pub roots: Vec<NodeId>,
    /// Nodes in the order they were taken out of the unvisited set.
    pub visit_order: Vec<NodeId>,
    /// Nodes in the order their markers were drawn.
    pub rendered: Vec<NodeId>,
    pub edges_drawn: usize,
    /// Nodes still unvisited when the walk finished; always zero.
    pub unvisited_left: usize,
}

impl Minimap {
    pub fn new(graph: PathGraph, config: MinimapConfig) -> Result<Self> {
        let bounds = Bounds::compute(graph.nodes.all_nodes().map(|n| n.position), config.margin)?;
        for (node, missing) in graph.nodes.dangling_links() {
            if let Some(node) = graph.nodes.node(node) {
                tracing::warn!("`{}` links to unknown actor `{}`; link ignored", node.name, missing);
            }
        }
        tracing::debug!(
            "Canvas {}x{}, offset ({}, {})",
            bounds.width,
            bounds.height,
            bounds.offset_x,
            bounds.offset_y
        );
        Ok(Minimap { graph, bounds, config })
    }

    pub fn from_json_str(json: &str, config: MinimapConfig) -> Result<Self> {
        let graph = PathGraph::from_json_str(json, &config.node_prefix)?;
        Self::new(graph, config)
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.graph.nodes
    }

    pub fn warps(&self) -> &WarpRegistry {
        &self.graph.warps
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Draw the whole map onto `canvas`.
    pub fn walk<C: Canvas + ?Sized>(&self, canvas: &mut C) -> WalkReport {
        Traversal::new(self, canvas).run()
    }
}

/// One pending `current -> next` segment whose subtree is still being drawn.
struct Frame {
    current: NodeId,
    next: NodeId,
    hidden: bool,
    neighbors: Vec<NodeId>,
    cursor: usize,
}

/// State owned by a single walk.
struct Traversal<'a, C: ?Sized> {
    map: &'a Minimap,
    canvas: &'a mut C,
    unvisited: HashSet<NodeId>,
    /// Ingest-order cursor for picking later roots; everything before it is visited.
    root_cursor: usize,
    report: WalkReport,
}

impl<'a, C: Canvas + ?Sized> Traversal<'a, C> {
    fn new(map: &'a Minimap, canvas: &'a mut C) -> Self {
        Traversal {
            map,
            canvas,
            unvisited: map.nodes().all_nodes().map(|n| n.id).collect(),
            root_cursor: 0,
            report: WalkReport::default(),
        }
    }

    fn run(mut self) -> WalkReport {
        // The base vertex is only preferred for the very first root.
        let mut root = self
            .map
            .nodes()
            .find(&self.map.config.base_vertex)
            .or_else(|| self.next_root());

        while let Some(r) = root {
            self.walk_component(r);
            root = self.next_root();
        }

        self.report.unvisited_left = self.unvisited.len();
        tracing::debug!(
            "Walk finished: {} components, {} nodes, {} segments",
            self.report.roots.len(),
            self.report.rendered.len(),
            self.report.edges_drawn
        );
        self.report
    }

    fn next_root(&mut self) -> Option<NodeId> {
        let count = self.map.nodes().node_count();
        while self.root_cursor < count {
            let id = NodeId(self.root_cursor);
            if self.unvisited.contains(&id) {
                return Some(id);
            }
            self.root_cursor += 1;
        }
        None
    }

    fn node(&self, id: NodeId) -> &'a PathNode {
        let map: &'a Minimap = self.map;
        &map.graph.nodes[id]
    }

    fn schedule(&mut self, id: NodeId) {
        if self.unvisited.remove(&id) {
            self.report.visit_order.push(id);
        }
    }

    fn walk_component(&mut self, root: NodeId) {
        tracing::debug!("Walking component from `{}`", self.node(root).name);
        self.report.roots.push(root);
        self.schedule(root);

        let root_hidden = self.node(root).hidden;
        for child in self.map.nodes().sorted_neighbors(root) {
            if !self.unvisited.contains(&child) {
                continue;
            }
            self.schedule(child);
            let hidden = root_hidden || self.node(child).hidden;
            // Draws the segment and the child's markers once its subtree is done.
            self.connect(root, child, hidden);
        }

        self.render_node(root, root_hidden);
    }

    fn frame(&self, current: NodeId, next: NodeId, hidden: bool) -> Frame {
        Frame {
            current,
            next,
            hidden: hidden || self.node(next).hidden,
            neighbors: self.map.nodes().sorted_neighbors(next),
            cursor: 0,
        }
    }

    /// Depth-first from `next`, drawing `current -> next` after every segment below it.
    fn connect(&mut self, current: NodeId, next: NodeId, hidden: bool) {
        let mut stack = vec![self.frame(current, next, hidden)];

        while let Some(top) = stack.last_mut() {
            let mut child = None;
            while let Some(&candidate) = top.neighbors.get(top.cursor) {
                top.cursor += 1;
                if candidate != top.current && self.unvisited.contains(&candidate) {
                    child = Some(candidate);
                    break;
                }
            }

            match child {
                Some(child) => {
                    let parent = top.next;
                    let hidden = top.hidden || self.node(child).hidden;
                    self.schedule(child);
                    let frame = self.frame(parent, child, hidden);
                    stack.push(frame);
                }
                None => {
                    if let Some(done) = stack.pop() {
                        self.draw_segment(done.current, done.next, done.hidden);
                        self.render_node(done.next, done.hidden);
                    }
                }
            }
        }
    }

    fn draw_segment(&mut self, from: NodeId, to: NodeId, hidden: bool) {
        let bounds = &self.map.bounds;
        let config = &self.map.config;
        let from = bounds.project(self.node(from).position);
        let to = bounds.project(self.node(to).position);
        self.canvas
            .line(from, to, config.palette.path(hidden), config.path_width);
        self.report.edges_drawn += 1;
    }

    fn render_node(&mut self, id: NodeId, hidden: bool) {
        let map = self.map;
        let config = &map.config;
        let palette = &config.palette;
        let node = self.node(id);
        let at = map.bounds.project(node.position);

        let base = if config.debug {
            if node.hidden { &palette.debug_hidden } else { &palette.debug_visible }
        } else {
            palette.path(hidden)
        };
        self.canvas.filled_circle(at, config.node_radius(), base);

        if let Some(warp) = node.outbound_warp.as_deref().and_then(|k| map.warps().get(k)) {
            let color = if warp.has_destination() { &palette.linked } else { &palette.unlinked };
            self.warp_marker(at, warp, color);
        }

        if let Some(warp) = node.inbound_warp.as_deref().and_then(|k| map.warps().get(k)) {
            if warp.has_sources() {
                self.warp_marker(at, warp, &palette.linked);
            } else if config.debug {
                self.warp_marker(at, warp, &palette.unreached);
            }
        }

        self.report.rendered.push(id);
    }

    fn warp_marker(&mut self, at: Point, warp: &Warp, color: &Color) {
        let config = &self.map.config;
        self.canvas.filled_circle(at, config.warp_radius(), color);
        self.canvas
            .centered_text(at, &warp.id.to_string(), &config.palette.label);
    }
}
