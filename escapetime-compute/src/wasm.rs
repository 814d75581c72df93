//! JavaScript entry points for a browser-side rendering surface.

use crate::PointColorer;
use escapetime_color::ColorMode;
use escapetime_core::EvaluatorConfig;
use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Escape value at `x + yi`: 0 if bounded, otherwise >= 1.
#[wasm_bindgen(js_name = evaluateEscape)]
pub fn evaluate_escape(x: f64, y: f64, max_iterations: u32) -> Result<f64, JsError> {
    Ok(crate::evaluate_escape(x, y, max_iterations)?)
}

/// Map a value to `rgb(r, g, b)`. `mode_json` is a serialized `ColorMode`,
/// e.g. `{"mode":"interpolate"}`.
#[wasm_bindgen(js_name = mapColor)]
pub fn map_color(value: f64, mode_json: &str) -> Result<String, JsError> {
    let mode: ColorMode = serde_json::from_str(mode_json)?;
    Ok(escapetime_color::map_color(value, &mode)?.to_string())
}

/// `#RRGGBB` color of `x + yi` with the default rainbow cycle.
#[wasm_bindgen(js_name = pointColor)]
pub fn point_color(x: f64, y: f64, max_iterations: u32) -> Result<String, JsError> {
    let colorer = PointColorer::from_config(
        &EvaluatorConfig { max_iterations },
        ColorMode::default(),
    )?;
    Ok(colorer.point_color(x, y)?.to_hex())
}
