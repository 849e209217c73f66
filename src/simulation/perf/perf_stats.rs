use wasm_bindgen::prelude::*;

/// Per-step counters, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) project_ms: f64,
    pub(super) points_processed: u32,
    pub(super) points_drawn: u32,
    pub(super) points_culled: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn points_processed(&self) -> u32 { self.points_processed }
    #[wasm_bindgen(getter)]
    pub fn points_drawn(&self) -> u32 { self.points_drawn }
    #[wasm_bindgen(getter)]
    pub fn points_culled(&self) -> u32 { self.points_culled }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
