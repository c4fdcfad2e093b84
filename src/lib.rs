pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod analysis;
    pub mod layout;
    pub mod picking;
}
pub mod editor;
pub mod render;
mod json;

use std::collections::HashSet;

use model::{Color, Edge, Item, Node, EDGE_RANGE, EDGE_STROKE_WIDTH, NODE_RADIUS};

pub use algorithms::analysis::Bipartiteness;
pub use algorithms::layout::EdgePlan;
pub use editor::{Editor, Modifiers};
pub use render::Renderer;

pub struct Graph {
    pub(crate) nodes: Vec<Node>,    // insertion order is z-order (later = on top)
    pub(crate) edges: Vec<Edge>,
    pub(crate) selected: Vec<Item>, // live items only, no duplicates
    pub(crate) next_id: u32,        // shared by nodes and edges, never reused
}

pub struct NodeArrays {
    pub ids: Vec<u32>,
    pub positions: Vec<f32>,
    pub radii: Vec<f32>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            selected: Vec::new(),
            next_id: 0,
        }
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    // Nodes
    pub fn add_node(&mut self, x: f32, y: f32) -> u32 {
        let id = self.take_id();
        self.nodes.push(Node {
            id,
            x,
            y,
            radius: NODE_RADIUS,
            color: Color::default(),
        });
        // A create always exclusively selects the new item.
        self.selected.clear();
        self.selected.push(Item::Node { id });
        id
    }
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn translate_node(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        if let Some(n) = self.nodes.iter_mut().find(|n| n.id == id) {
            n.x += dx;
            n.y += dy;
            true
        } else {
            false
        }
    }

    // Edges
    pub fn add_edge(&mut self, a: u32, b: u32) -> Option<u32> {
        // a == b is a self-loop; parallel edges are allowed, no dedup.
        if self.node(a).is_none() || self.node(b).is_none() {
            return None;
        }
        let id = self.take_id();
        self.edges.push(Edge {
            id,
            start: a,
            end: b,
            range: EDGE_RANGE,
            stroke_width: EDGE_STROKE_WIDTH,
            color: Color::default(),
        });
        Some(id)
    }
    pub fn edge(&self, id: u32) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // Selection
    pub fn contains(&self, item: Item) -> bool {
        match item {
            Item::Node { id } => self.node(id).is_some(),
            Item::Edge { id } => self.edge(id).is_some(),
        }
    }
    pub fn select(&mut self, item: Item) -> bool {
        if !self.contains(item) {
            return false;
        }
        if !self.selected.contains(&item) {
            self.selected.push(item);
        }
        true
    }
    pub fn is_selected(&self, item: Item) -> bool {
        self.selected.contains(&item)
    }
    pub fn selected_items(&self) -> &[Item] {
        &self.selected
    }
    pub fn selected_node_ids(&self) -> Vec<u32> {
        self.selected
            .iter()
            .filter_map(|it| match *it {
                Item::Node { id } => Some(id),
                Item::Edge { .. } => None,
            })
            .collect()
    }
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let doomed: HashSet<u32> = self.selected.iter().map(|it| it.id()).collect();
        self.nodes.retain(|n| !doomed.contains(&n.id));
        // Cascade: an edge dies with its own id or with either endpoint.
        self.edges.retain(|e| {
            !doomed.contains(&e.id) && !doomed.contains(&e.start) && !doomed.contains(&e.end)
        });
        self.selected.clear();
    }

    pub fn recolor_selected(&mut self, color: Color) {
        for it in &self.selected {
            match *it {
                Item::Node { id } => {
                    if let Some(n) = self.nodes.iter_mut().find(|n| n.id == id) {
                        n.color = color;
                    }
                }
                Item::Edge { id } => {
                    if let Some(e) = self.edges.iter_mut().find(|e| e.id == id) {
                        e.color = color;
                    }
                }
            }
        }
    }

    // Incremental translation of every selected node; repeated per-tick
    // deltas accumulate across a drag gesture.
    pub fn move_selected(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        for it in &self.selected {
            if let Item::Node { id } = *it {
                if let Some(n) = self.nodes.iter_mut().find(|n| n.id == id) {
                    n.x += dx;
                    n.y += dy;
                }
            }
        }
    }

    // Bulk getters for host renderers
    pub fn get_node_arrays(&self) -> NodeArrays {
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut positions = Vec::with_capacity(self.nodes.len() * 2);
        let mut radii = Vec::with_capacity(self.nodes.len());
        for n in &self.nodes {
            ids.push(n.id);
            positions.push(n.x);
            positions.push(n.y);
            radii.push(n.radius);
        }
        NodeArrays {
            ids,
            positions,
            radii,
        }
    }

    // Picking
    pub fn pick(&self, x: f32, y: f32, cx: f32, cy: f32) -> Option<Item> {
        algorithms::picking::pick_impl(self, x, y, cx, cy)
    }

    // Multi-edge layout
    pub fn plan_edges(&self, cx: f32, cy: f32) -> Vec<EdgePlan> {
        algorithms::layout::plan_edges_impl(self, cx, cy)
    }

    // Analytics
    pub fn selected_degree(&self) -> u32 {
        algorithms::analysis::selected_degree_impl(self)
    }
    pub fn bipartiteness(&self) -> Bipartiteness {
        algorithms::analysis::bipartiteness_impl(self)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<(), (&'static str, String)> {
        json::from_json_impl(self, v)
    }

    // Render pass
    pub fn draw(&self, renderer: &mut dyn Renderer, cx: f32, cy: f32) {
        render::draw_impl(self, renderer, cx, cy)
    }

    // Clear the scene; next_id keeps counting so ids are never reused
    // within one editing session.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selected.clear();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
