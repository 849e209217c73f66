//! Wave Field Engine - animated point-field background in WASM
//!
//! A fixed lattice of 3D points ripples under two sine waves, tilts toward
//! the pointer and is perspective-projected onto a full-viewport canvas.
//!
//! Layout:
//! - core/        - logging macros
//! - domain/      - configuration, lattice
//! - systems/     - per-point math (rotation, wave, projection, colour)
//! - simulation/  - FieldCore state + PointField wasm facade
//! - api/         - canvas wiring and exported start functions

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Wave field engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::{start_background, start_background_with_config};
pub use domain::{FieldConfig, GridPoint, Lattice};
pub use simulation::{Dot, FieldCore, FrameBuffer, Palette, PerfStats, PointField, Surface};
