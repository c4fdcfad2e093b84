use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::math::{loop_anchor, perp_control};
use crate::Graph;

// Lateral step between successive fan-out pairs, in px.
pub const FAN_STEP: f32 = 40.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgePlan {
    Line {
        edge: u32,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Curve {
        edge: u32,
        x1: f32,
        y1: f32,
        cx: f32,
        cy: f32,
        x2: f32,
        y2: f32,
    },
    Loop {
        edge: u32,
        x: f32,
        y: f32,
        radius: f32,
    },
}

impl EdgePlan {
    pub fn edge_id(&self) -> u32 {
        match *self {
            EdgePlan::Line { edge, .. }
            | EdgePlan::Curve { edge, .. }
            | EdgePlan::Loop { edge, .. } => edge,
        }
    }
}

// Rendering-time grouping only: the Edge objects are never split or merged.
// Self-loops render as circles at their anchor. Parallel edges (same
// unordered endpoint pair) fan out symmetrically: an odd group draws its
// first member as the centered straight line, the remaining even count
// curves at heights +40, -40, +80, -80, ...
pub fn plan_edges_impl(g: &Graph, cx: f32, cy: f32) -> Vec<EdgePlan> {
    let mut plan = Vec::with_capacity(g.edges.len());
    let mut keys: Vec<(u32, u32)> = Vec::new(); // first-seen group order
    let mut groups: HashMap<(u32, u32), Vec<u32>> = HashMap::new();
    for e in &g.edges {
        if e.is_loop() {
            if let Some(n) = g.node(e.start) {
                let (ax, ay) = loop_anchor(n.x, n.y, n.radius, cx, cy);
                plan.push(EdgePlan::Loop {
                    edge: e.id,
                    x: ax,
                    y: ay,
                    radius: n.radius,
                });
            }
            continue;
        }
        let key = if e.start <= e.end {
            (e.start, e.end)
        } else {
            (e.end, e.start)
        };
        groups
            .entry(key)
            .or_insert_with(|| {
                keys.push(key);
                Vec::new()
            })
            .push(e.id);
    }
    for key in keys {
        let members = &groups[&key];
        let rep = match g.edge(members[0]) { Some(e) => e, None => continue };
        let (a, b) = match (g.node(rep.start), g.node(rep.end)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        let mut rest = &members[..];
        if members.len() % 2 == 1 {
            plan.push(EdgePlan::Line {
                edge: members[0],
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
            rest = &members[1..];
        }
        for (i, &eid) in rest.iter().enumerate() {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            let height = FAN_STEP * ((i / 2) as f32 + 1.0) * side;
            let (px, py) = perp_control(a.x, a.y, b.x, b.y, height);
            plan.push(EdgePlan::Curve {
                edge: eid,
                x1: a.x,
                y1: a.y,
                cx: px,
                cy: py,
                x2: b.x,
                y2: b.y,
            });
        }
    }
    plan
}
