//! Systems - pure per-point math used by the frame step
//!
//! Nothing here holds state; the simulation feeds in config and the
//! current rotation/time and gets screen-space results back.

pub mod vec3;
pub mod easing;
pub mod wave;
pub mod projection;
pub mod color;

pub use vec3::Vec3;
pub use easing::{ease_toward, Rotation};
pub use wave::WaveParams;
pub use projection::{Camera, Projected};
pub use color::{hsla, wave_hue};
