//! API - functions exported to JS

pub mod canvas;

use wasm_bindgen::prelude::*;

use crate::domain::FieldConfig;

/// Start the background on the canvas with this id using the reference look.
/// Returns `false` (and does nothing) when the canvas is missing.
#[wasm_bindgen]
pub fn start_background(canvas_id: &str) -> bool {
    canvas::activate(canvas_id, FieldConfig::default())
}

/// Same as `start_background` with a JSON config override.
/// Throws on invalid config before touching the page.
#[wasm_bindgen]
pub fn start_background_with_config(canvas_id: &str, json: &str) -> Result<bool, JsValue> {
    let config = FieldConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    Ok(canvas::activate(canvas_id, config))
}
