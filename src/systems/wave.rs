//! Wave displacement
//!
//! Two independent sine terms: one travelling outward from the origin,
//! one travelling sideways along X. Their frequencies must differ or the
//! surface collapses into a single visible ripple.

use crate::domain::FieldConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub radial_amplitude: f32,
    pub radial_frequency: f32,
    pub lateral_amplitude: f32,
    pub lateral_frequency: f32,
}

impl WaveParams {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            radial_amplitude: config.radial_amplitude,
            radial_frequency: config.radial_frequency,
            lateral_amplitude: config.lateral_amplitude,
            lateral_frequency: config.lateral_frequency,
        }
    }

    /// Vertical offset for a point at planar `distance` and world `x`
    #[inline]
    pub fn displacement(&self, distance: f32, x: f32, time: f32) -> f32 {
        (distance * self.radial_frequency - time).sin() * self.radial_amplitude
            + (x * self.lateral_frequency + time).sin() * self.lateral_amplitude
    }
}
