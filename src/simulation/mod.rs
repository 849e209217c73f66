//! Field - animated perspective point-field
//!
//! FieldCore owns all mutable state (viewport, pointer-driven rotation,
//! simulation clock, last frame) and only orchestrates:
//! - per-point math lives in systems/
//! - the lattice and config live in domain/
//! - browser wiring lives in api/
//!
//! All entry points run on one thread, strictly interleaved: pointer and
//! resize callbacks between frames, never during one.

use crate::domain::{FieldConfig, Lattice};
use crate::systems::{Camera, Rotation, WaveParams};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/frame.rs"]
mod frame;
#[path = "render/surface.rs"]
mod surface;
#[path = "step/project.rs"]
mod project;
#[path = "step/step.rs"]
mod step;
#[path = "input/pointer.rs"]
mod pointer;
#[path = "input/resize.rs"]
mod resize;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::PointField;
pub use frame::{Dot, FrameBuffer, DOT_STRIDE};
pub use perf_stats::PerfStats;
pub use pointer::normalize_pointer;
pub use project::{project_point, FrameParams};
pub use surface::{Palette, Surface};

use perf_timer::PerfTimer;

/// The point-field renderer state
pub struct FieldCore {
    config: FieldConfig,
    lattice: Lattice,
    camera: Camera,
    wave: WaveParams,

    // Viewport
    width: u32,
    height: u32,

    // Pointer, normalised to [-1, 1]
    pointer_x: f32,
    pointer_y: f32,

    // Rotation eases from `rotation` toward `target` every step
    rotation: Rotation,
    target: Rotation,

    // Clock
    time: f64,
    frame: u64,

    frame_buffer: FrameBuffer,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FieldCore {
    /// Create a field with the reference configuration
    pub fn new(width: u32, height: u32) -> Self {
        init::create_field_core(width, height, FieldConfig::default())
    }

    /// Create a field from an already validated configuration
    pub fn with_config(width: u32, height: u32, config: FieldConfig) -> Self {
        init::create_field_core(width, height, config)
    }

    pub fn from_config_json(width: u32, height: u32, json: &str) -> Result<Self, String> {
        let config = FieldConfig::from_json(json)?;
        Ok(Self::with_config(width, height, config))
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn time(&self) -> f64 { self.time }

    pub fn config(&self) -> &FieldConfig { &self.config }

    pub fn lattice(&self) -> &Lattice { &self.lattice }

    pub fn point_count(&self) -> usize { self.lattice.len() }

    pub fn pointer(&self) -> (f32, f32) { (self.pointer_x, self.pointer_y) }

    pub fn rotation(&self) -> Rotation { self.rotation }

    pub fn target_rotation(&self) -> Rotation { self.target }

    /// Dots produced by the last `step`
    pub fn frame_buffer(&self) -> &FrameBuffer { &self.frame_buffer }

    pub fn drawn_count(&self) -> usize { self.frame_buffer.len() }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Raw pointer position in viewport pixels
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        pointer::pointer_move(self, client_x, client_y);
    }

    /// New viewport size; lattice, rotation and clock are left alone
    pub fn resize(&mut self, width: u32, height: u32) {
        resize::resize(self, width, height);
    }

    /// Advance one animation tick: ease rotation, advance the clock,
    /// project every lattice point into the frame buffer.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Clear the surface and draw the current frame buffer.
    /// Returns the number of dots drawn.
    pub fn render<S: Surface>(&self, surface: &mut S) -> usize {
        surface::render(self, surface)
    }

    /// Snapshot of everything the per-point math needs for this frame
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            camera: self.camera,
            wave: self.wave,
            rotation: self.rotation,
            time: self.time as f32,
            width: self.width as f32,
            height: self.height as f32,
            size_factor: self.config.size_factor,
            base_hue: self.config.base_hue,
            hue_shift: self.config.hue_shift,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            saturation: self.config.saturation,
            lightness: self.config.lightness,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
