//! WASM bindings for the previewer core

use wasm_bindgen::prelude::*;

use crate::prefs::{Keybinding, Orientation, OutputFormat};
use crate::session::Session;
use crate::store::LocalStore;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed previewer session backed by browser localStorage.
#[wasm_bindgen]
pub struct WasmPreviewer {
    session: Session<LocalStore>,
}

#[wasm_bindgen]
impl WasmPreviewer {
    /// Create a session, restoring the persisted draft and preferences.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::new(LocalStore::new()),
        }
    }

    /// Current diagram source, for seeding the editor widget.
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.session.source().to_string()
    }

    /// Editor change handler.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.session.set_source(text);
    }

    /// Set the keybinding mode from its select-control value.
    /// Returns false for values no mode matches.
    #[wasm_bindgen(js_name = setKeybinding)]
    pub fn set_keybinding(&mut self, value: &str) -> bool {
        match value.parse::<Keybinding>() {
            Ok(kb) => {
                self.session.set_keybinding(kb);
                true
            }
            Err(_) => false,
        }
    }

    /// Set the layout orientation from its select-control value.
    #[wasm_bindgen(js_name = setOrientation)]
    pub fn set_orientation(&mut self, value: &str) -> bool {
        match value.parse::<Orientation>() {
            Ok(or) => {
                self.session.set_orientation(or);
                true
            }
            Err(_) => false,
        }
    }

    /// Set the output format from its select-control value.
    #[wasm_bindgen(js_name = setOutputFormat)]
    pub fn set_output_format(&mut self, value: &str) -> bool {
        match value.parse::<OutputFormat>() {
            Ok(fmt) => {
                self.session.set_output_format(fmt);
                true
            }
            Err(_) => false,
        }
    }

    /// Submit: encode the current text and return the render URL to
    /// assign to the image element.
    pub fn submit(&mut self) -> String {
        self.session.submit().to_string()
    }

    /// URL from the last submit, or undefined if nothing was submitted.
    #[wasm_bindgen(js_name = getRenderUrl)]
    pub fn get_render_url(&self) -> Option<String> {
        self.session.render_url().map(str::to_string)
    }

    /// Current preference values as a camelCase JS object, for
    /// initializing the selection controls after restore.
    #[wasm_bindgen(js_name = getPreferences)]
    pub fn get_preferences(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.session.preferences()).unwrap_or(JsValue::NULL)
    }
}

impl Default for WasmPreviewer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode diagram text without a session; handy for building a
/// downloadable link for arbitrary markup.
#[wasm_bindgen(js_name = encodeDiagram)]
pub fn encode_diagram(text: &str) -> String {
    crate::encode::encode(text)
}
