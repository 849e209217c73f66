use wasm_bindgen::prelude::*;

use super::frame::DOT_STRIDE;
use super::perf_stats::PerfStats;
use super::FieldCore;

/// JS handle for hosts that drive their own frame loop.
///
/// Call `step()` once per frame, then read the packed dots through
/// `frame_ptr()` / `frame_len()` (stride `dot_stride()`).
#[wasm_bindgen]
pub struct PointField {
    core: FieldCore,
}

#[wasm_bindgen]
impl PointField {
    /// Create a field with the reference configuration
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: FieldCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, json: String) -> Result<PointField, JsValue> {
        let core = FieldCore::from_config_json(width, height, &json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn yaw(&self) -> f32 { self.core.rotation().yaw }

    #[wasm_bindgen(getter)]
    pub fn pitch(&self) -> f32 { self.core.rotation().pitch }

    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> usize { self.core.point_count() }

    /// Dots that survived culling in the last step
    #[wasm_bindgen(getter)]
    pub fn drawn_count(&self) -> usize { self.core.drawn_count() }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.core.pointer_move(client_x, client_y);
    }

    /// Advance one animation tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    // === FRAME ABI ===

    /// f32 values per dot: x, y, radius, hue, alpha
    pub fn dot_stride(&self) -> usize {
        DOT_STRIDE
    }

    /// Pointer to the packed dot buffer (valid until the next `step`)
    pub fn frame_ptr(&self) -> *const f32 {
        self.core.frame_buffer().as_ptr()
    }

    /// Length of the dot buffer in f32 elements
    pub fn frame_len(&self) -> usize {
        self.core.frame_buffer().len_elements()
    }

    pub fn frame_byte_len(&self) -> usize {
        self.core.frame_buffer().len_bytes()
    }
}
