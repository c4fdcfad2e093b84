use crate::algorithms::layout::EdgePlan;
use crate::model::{Color, Item};
use crate::Graph;

// Drawing capability provided by the host shell. `highlighted` requests the
// selection emphasis; what it looks like is the host's business. Circles
// with `fill: None` are stroked outlines (self-loops).
pub trait Renderer {
    fn clear(&mut self);
    fn draw_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        fill: Option<Color>,
        stroke_width: f32,
        stroke: Color,
        highlighted: bool,
    );
    fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke_width: f32,
        color: Color,
        highlighted: bool,
    );
    fn draw_quadratic_curve(
        &mut self,
        x1: f32,
        y1: f32,
        cx: f32,
        cy: f32,
        x2: f32,
        y2: f32,
        stroke_width: f32,
        color: Color,
        highlighted: bool,
    );
}

// Edges first, nodes on top of them, each pass in insertion z-order.
pub fn draw_impl(g: &Graph, r: &mut dyn Renderer, view_cx: f32, view_cy: f32) {
    r.clear();
    for step in g.plan_edges(view_cx, view_cy) {
        let e = match g.edge(step.edge_id()) { Some(e) => e, None => continue };
        let highlighted = g.is_selected(Item::Edge { id: e.id });
        match step {
            EdgePlan::Line { x1, y1, x2, y2, .. } => {
                r.draw_line(x1, y1, x2, y2, e.stroke_width, e.color, highlighted)
            }
            EdgePlan::Curve {
                x1,
                y1,
                cx,
                cy,
                x2,
                y2,
                ..
            } => r.draw_quadratic_curve(x1, y1, cx, cy, x2, y2, e.stroke_width, e.color, highlighted),
            EdgePlan::Loop { x, y, radius, .. } => {
                r.draw_circle(x, y, radius, None, e.stroke_width, e.color, highlighted)
            }
        }
    }
    for n in &g.nodes {
        let highlighted = g.is_selected(Item::Node { id: n.id });
        r.draw_circle(n.x, n.y, n.radius, Some(n.color), 1.0, n.color, highlighted);
    }
}
