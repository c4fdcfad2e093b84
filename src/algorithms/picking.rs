use crate::geometry::math::{dist_points, loop_anchor, seg_distance_sq};
use crate::model::Item;
use crate::Graph;

// Resolve a canvas coordinate to the topmost item under it. Nodes always
// beat edges; within each pass the scan runs in reverse insertion order so
// the item drawn last (on top) wins. Self-loops are hit-tested against the
// circle they render as, anchored relative to the view center (cx, cy).
pub fn pick_impl(g: &Graph, x: f32, y: f32, cx: f32, cy: f32) -> Option<Item> {
    for n in g.nodes.iter().rev() {
        if dist_points(x, y, n.x, n.y) <= n.radius {
            return Some(Item::Node { id: n.id });
        }
    }
    for e in g.edges.iter().rev() {
        if e.is_loop() {
            let n = match g.node(e.start) { Some(n) => n, None => continue };
            let (ax, ay) = loop_anchor(n.x, n.y, n.radius, cx, cy);
            if dist_points(x, y, ax, ay) <= n.radius {
                return Some(Item::Edge { id: e.id });
            }
        } else {
            let (a, b) = match (g.node(e.start), g.node(e.end)) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            let (d2, _) = seg_distance_sq(x, y, a.x, a.y, b.x, b.y);
            if d2.sqrt() <= e.range {
                return Some(Item::Edge { id: e.id });
            }
        }
    }
    None
}
