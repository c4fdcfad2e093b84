use crate::algorithms::analysis::Bipartiteness;
use crate::model::{color_for_key, Item};
use crate::render::{self, Renderer};
use crate::Graph;

// Pointer travel at or below this many px on each axis is a click, not a
// drag; a lot of presses wobble slightly before release.
pub const DRAG_SLOP: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Modifiers {
    pub shift: bool, // additive select
    pub alt: bool,   // edge-creation mode
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    press_x: f32,
    press_y: f32,
    last_x: f32,
    last_y: f32,
}

// The interaction state machine the host shell feeds raw pointer/key events
// into. Owns the graph; gesture state lives exactly from a press on an item
// to the matching release.
pub struct Editor {
    pub graph: Graph,
    center_x: f32,
    center_y: f32,
    drag: Option<Drag>,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_graph(Graph::new())
    }
    pub fn with_graph(graph: Graph) -> Self {
        Editor {
            graph,
            center_x: 0.0,
            center_y: 0.0,
            drag: None,
        }
    }

    // Reference point self-loops anchor against; the shell keeps this at
    // the canvas center across resizes.
    pub fn set_view_center(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.center_x = x;
            self.center_y = y;
        }
    }
    pub fn view_center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    // True from press to release. Load/save must not run while this holds.
    pub fn gesture_active(&self) -> bool {
        self.drag.is_some()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, mods: Modifiers) {
        let hit = match self.graph.pick(x, y, self.center_x, self.center_y) {
            Some(hit) => hit,
            None => {
                self.graph.clear_selection();
                return;
            }
        };

        if mods.alt {
            if let Item::Node { id } = hit {
                // One new edge per already-selected node; alt-clicking a
                // selected node this way produces a self-loop.
                for from in self.graph.selected_node_ids() {
                    self.graph.add_edge(from, id);
                }
                self.graph.clear_selection();
                self.graph.select(hit);
                return;
            }
        }

        if !self.graph.is_selected(hit) {
            if !mods.shift {
                self.graph.clear_selection();
            }
            self.graph.select(hit);
        }
        self.drag = Some(Drag {
            press_x: x,
            press_y: y,
            last_x: x,
            last_y: y,
        });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let drag = match self.drag.as_mut() { Some(d) => d, None => return };
        // Checked against the press point on every tick; `last` only
        // advances on applied ticks, so re-entering the dead zone stalls
        // the drag without a jump on exit.
        if (drag.press_x - x).abs() <= DRAG_SLOP && (drag.press_y - y).abs() <= DRAG_SLOP {
            return;
        }
        let dx = x - drag.last_x;
        let dy = y - drag.last_y;
        drag.last_x = x;
        drag.last_y = y;
        self.graph.move_selected(dx, dy);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn double_click(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.graph.add_node(x, y);
        }
    }

    // Key names arrive in DOM `event.key` form: "Backspace", "r", "G", ...
    pub fn key_up(&mut self, key: &str) {
        if key == "Backspace" {
            self.graph.delete_selected();
            return;
        }
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(color) = color_for_key(c.to_ascii_lowercase()) {
                self.graph.recolor_selected(color);
            }
        }
    }

    // Read-only stats for the shell's status display
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn selected_degree(&self) -> u32 {
        self.graph.selected_degree()
    }
    pub fn bipartiteness(&self) -> Bipartiteness {
        self.graph.bipartiteness()
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        render::draw_impl(&self.graph, renderer, self.center_x, self.center_y)
    }

    // Persistence; refused mid-gesture per the interaction contract.
    pub fn save(&self) -> Option<serde_json::Value> {
        if self.gesture_active() {
            return None;
        }
        Some(self.graph.to_json_value())
    }
    pub fn load(&mut self, v: serde_json::Value) -> Result<(), (&'static str, String)> {
        if self.gesture_active() {
            return Err(("busy", "load ignored during a drag gesture".into()));
        }
        self.graph.from_json_value(v)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
