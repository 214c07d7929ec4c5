//! Imports of the JavaScript libraries the server-rendered page loads:
//! Chart.js as the global `Chart` and Bootstrap 5 as `bootstrap`.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element};

#[wasm_bindgen]
extern "C" {
    /// A Chart.js chart instance.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    /// Returns the tooltip widget bound to `element`, creating it on first use.
    #[wasm_bindgen(js_namespace = ["bootstrap", "Tooltip"], js_name = getOrCreateInstance, catch)]
    pub fn tooltip_get_or_create_instance(element: &Element) -> Result<JsValue, JsValue>;
}
