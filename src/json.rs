use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::limits;
use crate::model::{Color, Edge, Node};
use crate::Graph;

// Persisted document shape. Endpoints serialize as `{ "id": n }` objects and
// are re-resolved against the loaded node list; `strokeWidth` and `nextId`
// keep their on-disk spelling.
#[derive(Serialize, Deserialize)]
struct EndpointDoc {
    id: u32,
}

#[derive(Serialize, Deserialize)]
struct NodeDoc {
    id: u32,
    x: f32,
    y: f32,
    radius: f32,
    color: Color,
}

#[derive(Serialize, Deserialize)]
struct EdgeDoc {
    id: u32,
    start: EndpointDoc,
    end: EndpointDoc,
    range: f32,
    #[serde(rename = "strokeWidth")]
    stroke_width: f32,
    color: Color,
}

#[derive(Serialize, Deserialize)]
struct Doc {
    nodes: Vec<NodeDoc>,
    edges: Vec<EdgeDoc>,
    #[serde(rename = "nextId")]
    next_id: u32,
}

pub fn to_json_impl(g: &Graph) -> Value {
    let doc = Doc {
        nodes: g
            .nodes
            .iter()
            .map(|n| NodeDoc {
                id: n.id,
                x: n.x,
                y: n.y,
                radius: n.radius,
                color: n.color,
            })
            .collect(),
        edges: g
            .edges
            .iter()
            .map(|e| EdgeDoc {
                id: e.id,
                start: EndpointDoc { id: e.start },
                end: EndpointDoc { id: e.end },
                range: e.range,
                stroke_width: e.stroke_width,
                color: e.color,
            })
            .collect(),
        next_id: g.next_id,
    };
    serde_json::to_value(doc).unwrap()
}

// Strict, all-or-nothing load: any failure leaves the graph untouched.
pub fn from_json_impl(g: &mut Graph, v: Value) -> Result<(), (&'static str, String)> {
    let doc: Doc = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;
    if doc.nodes.len() > limits::MAX_NODES {
        return Err(("caps_exceeded", format!("nodes>{}", limits::MAX_NODES)));
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(("caps_exceeded", format!("edges>{}", limits::MAX_EDGES)));
    }
    let mut seen: HashSet<u32> = HashSet::new();
    let mut max_id: Option<u32> = None;
    for n in &doc.nodes {
        if !limits::in_coord_bounds(n.x) || !limits::in_coord_bounds(n.y) {
            return Err(("out_of_bounds", "node coordinate".into()));
        }
        if !limits::in_radius_bounds(n.radius) {
            return Err(("out_of_bounds", "node radius".into()));
        }
        if !seen.insert(n.id) {
            return Err(("invalid_structure", format!("duplicate id {}", n.id)));
        }
        max_id = Some(max_id.map_or(n.id, |m| m.max(n.id)));
    }
    let node_ids: HashSet<u32> = doc.nodes.iter().map(|n| n.id).collect();
    for e in &doc.edges {
        if !limits::in_width_bounds(e.stroke_width) || !limits::in_width_bounds(e.range) {
            return Err(("out_of_bounds", "edge style".into()));
        }
        if !seen.insert(e.id) {
            return Err(("invalid_structure", format!("duplicate id {}", e.id)));
        }
        // Mandatory reference patching: a dangling endpoint fails the load,
        // the edge is never silently dropped.
        if !node_ids.contains(&e.start.id) {
            return Err(("dangling_ref", format!("edge {} start {}", e.id, e.start.id)));
        }
        if !node_ids.contains(&e.end.id) {
            return Err(("dangling_ref", format!("edge {} end {}", e.id, e.end.id)));
        }
        max_id = Some(max_id.map_or(e.id, |m| m.max(e.id)));
    }
    if let Some(m) = max_id {
        if doc.next_id <= m {
            return Err((
                "invalid_structure",
                format!("nextId {} not above max id {}", doc.next_id, m),
            ));
        }
    }
    g.nodes = doc
        .nodes
        .into_iter()
        .map(|n| Node {
            id: n.id,
            x: n.x,
            y: n.y,
            radius: n.radius,
            color: n.color,
        })
        .collect();
    g.edges = doc
        .edges
        .into_iter()
        .map(|e| Edge {
            id: e.id,
            start: e.start.id,
            end: e.end.id,
            range: e.range,
            stroke_width: e.stroke_width,
            color: e.color,
        })
        .collect();
    g.selected.clear();
    g.next_id = doc.next_id;
    Ok(())
}
