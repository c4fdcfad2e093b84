use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Editor { pub(crate) inner: graphpad::Editor }

impl Editor {
    pub fn rs_new() -> Editor { Editor { inner: graphpad::Editor::new() } }
}
