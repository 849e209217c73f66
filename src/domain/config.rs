use serde::{Deserialize, Serialize};

/// Upper bound on `rows * cols`
pub const MAX_POINTS: usize = 1_000_000;

/// Tunables for the point field.
///
/// Every field has a default, so a JSON override only needs the keys it
/// changes: `{"rows": 30, "base_hue": 180}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    // Lattice
    pub rows: u32,
    pub cols: u32,
    pub spacing: f32,
    pub plane_height: f32,

    // Projection
    pub fov: f32,
    pub view_distance: f32,

    // Motion
    pub ease: f32,
    pub time_step: f64,
    pub yaw_range: f32,
    pub pitch_range: f32,

    // Wave
    pub radial_amplitude: f32,
    pub radial_frequency: f32,
    pub lateral_amplitude: f32,
    pub lateral_frequency: f32,

    // Appearance
    pub base_hue: f32,
    pub hue_shift: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub size_factor: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            rows: 50,
            cols: 50,
            spacing: 40.0,
            plane_height: 100.0,

            fov: 300.0,
            view_distance: 400.0,

            ease: 0.05,
            time_step: 0.1,
            yaw_range: 0.3,
            pitch_range: 0.2,

            radial_amplitude: 30.0,
            radial_frequency: 0.02,
            lateral_amplitude: 20.0,
            lateral_frequency: 0.03,

            base_hue: 200.0,
            hue_shift: 2.0,
            saturation: 100.0,
            lightness: 60.0,
            size_factor: 3.0,
        }
    }
}

impl FieldConfig {
    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FieldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn point_count(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "lattice must have at least one row and column (got {}x{})",
                self.rows, self.cols
            ));
        }
        match (self.rows as usize).checked_mul(self.cols as usize) {
            Some(n) if n <= MAX_POINTS => {}
            _ => {
                return Err(format!(
                    "lattice {}x{} exceeds {} points",
                    self.rows, self.cols, MAX_POINTS
                ));
            }
        }

        let finite = [
            ("spacing", self.spacing),
            ("plane_height", self.plane_height),
            ("fov", self.fov),
            ("view_distance", self.view_distance),
            ("yaw_range", self.yaw_range),
            ("pitch_range", self.pitch_range),
            ("radial_amplitude", self.radial_amplitude),
            ("radial_frequency", self.radial_frequency),
            ("lateral_amplitude", self.lateral_amplitude),
            ("lateral_frequency", self.lateral_frequency),
            ("base_hue", self.base_hue),
            ("hue_shift", self.hue_shift),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
            ("size_factor", self.size_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite", name));
            }
        }

        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(format!("ease must be in (0, 1], got {}", self.ease));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(format!("time_step must be positive, got {}", self.time_step));
        }

        Ok(())
    }
}
