use crate::error;
use crate::Editor;
use graphpad::Modifiers;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }

    pub fn set_view_center(&mut self, x: f32, y: f32) {
        self.inner.set_view_center(x, y);
    }
    pub fn gesture_active(&self) -> bool {
        self.inner.gesture_active()
    }

    // Input events, canvas-local coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32, shift: bool, alt: bool) {
        self.inner.pointer_down(x, y, Modifiers { shift, alt });
    }
    pub fn pointer_down_res(&mut self, x: f32, y: f32, shift: bool, alt: bool) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        self.inner.pointer_down(x, y, Modifiers { shift, alt });
        error::ok(JsValue::TRUE)
    }
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.inner.pointer_move(x, y);
        }
    }
    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }
    pub fn double_click(&mut self, x: f32, y: f32) {
        self.inner.double_click(x, y);
    }
    pub fn key_up(&mut self, key: &str) {
        self.inner.key_up(key);
    }

    // Direct graph mutations for host-driven tooling
    pub fn add_node(&mut self, x: f32, y: f32) -> u32 {
        self.inner.graph.add_node(x, y)
    }
    pub fn add_node_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(JsValue::from_f64(self.inner.graph.add_node(x, y) as f64))
    }
    pub fn add_edge(&mut self, a: u32, b: u32) -> Option<u32> {
        self.inner.graph.add_edge(a, b)
    }
    pub fn add_edge_res(&mut self, a: u32, b: u32) -> JsValue {
        if self.inner.graph.node(a).is_none() {
            return error::invalid_id("node", a);
        }
        if self.inner.graph.node(b).is_none() {
            return error::invalid_id("node", b);
        }
        match self.inner.graph.add_edge(a, b) {
            Some(eid) => error::ok(JsValue::from_f64(eid as f64)),
            None => error::err("invalid_edge", "failed to add edge", None),
        }
    }
    pub fn delete_selected(&mut self) {
        self.inner.graph.delete_selected();
    }
    pub fn clear_selection(&mut self) {
        self.inner.graph.clear_selection();
    }
    pub fn clear(&mut self) {
        self.inner.graph.clear();
    }

    // Stats surface
    pub fn node_count(&self) -> u32 {
        self.inner.node_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }
    pub fn selected_degree(&self) -> u32 {
        self.inner.selected_degree()
    }
    pub fn bipartiteness(&self) -> String {
        self.inner.bipartiteness().as_str().to_string()
    }
    pub fn stats(&self) -> JsValue {
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "nodes", &JsValue::from_f64(self.node_count() as f64));
        crate::interop::set_kv(&obj, "edges", &JsValue::from_f64(self.edge_count() as f64));
        crate::interop::set_kv(
            &obj,
            "selectedDegree",
            &JsValue::from_f64(self.selected_degree() as f64),
        );
        crate::interop::set_kv(
            &obj,
            "bipartite",
            &JsValue::from_str(self.inner.bipartiteness().as_str()),
        );
        obj.into()
    }

    // Picking and selection
    pub fn pick(&self, x: f32, y: f32) -> JsValue {
        let (cx, cy) = self.inner.view_center();
        match self.inner.graph.pick(x, y, cx, cy) {
            Some(item) => serde_wasm_bindgen::to_value(&item).unwrap(),
            None => JsValue::NULL,
        }
    }
    pub fn selected(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.graph.selected_items()).unwrap()
    }

    // Render data for the canvas shell: full node/edge records plus the
    // fanned-out edge plan, and typed arrays for the hot drag path.
    pub fn nodes(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.graph.nodes()).unwrap()
    }
    pub fn edges(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.graph.edges()).unwrap()
    }
    pub fn edge_plan(&self) -> JsValue {
        let (cx, cy) = self.inner.view_center();
        serde_wasm_bindgen::to_value(&self.inner.graph.plan_edges(cx, cy)).unwrap()
    }
    pub fn get_node_data(&self) -> JsValue {
        let na = self.inner.graph.get_node_arrays();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&na.ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&na.positions).into());
        crate::interop::set_kv(&obj, "radii", &crate::interop::arr_f32(&na.radii).into());
        obj.into()
    }

    // JSON persistence; both refuse while a drag gesture is live
    pub fn to_json(&self) -> Option<String> {
        self.inner.save().map(|v| v.to_string())
    }
    pub fn from_json(&mut self, text: &str) -> JsValue {
        let v: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("load failed: {}", e)));
                return error::err("json_parse", format!("{}", e), None);
            }
        };
        match self.inner.load(v) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(("busy", _)) => error::busy("load"),
            Err((code, message)) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "load failed: {}: {}",
                    code, message
                )));
                error::err(code, message, None)
            }
        }
    }
}
