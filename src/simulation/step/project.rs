use crate::domain::GridPoint;
use crate::systems::{wave_hue, Camera, Rotation, Vec3, WaveParams};

use super::frame::Dot;

/// Per-frame inputs shared by every point
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub camera: Camera,
    pub wave: WaveParams,
    pub rotation: Rotation,
    pub time: f32,
    pub width: f32,
    pub height: f32,
    pub size_factor: f32,
    pub base_hue: f32,
    pub hue_shift: f32,
}

/// Wave-displace, rotate and project one lattice point.
/// `None` when the point ends up at or behind the camera.
#[inline]
pub fn project_point(point: &GridPoint, params: &FrameParams) -> Option<Dot> {
    let base = point.base();
    let wave = params.wave.displacement(base.planar_length(), base.x, params.time);

    // Yaw turns the flat (x, z); pitch then tilts the displaced height with it
    let yawed = base.rotate_y(params.rotation.yaw);
    let displaced = Vec3::new(yawed.x, base.y + wave, yawed.z);
    let rotated = displaced.rotate_x(params.rotation.pitch);

    let projected = params.camera.project(rotated, params.width, params.height)?;

    Some(Dot {
        screen_x: projected.screen_x,
        screen_y: projected.screen_y,
        radius: projected.scale * params.size_factor,
        hue: wave_hue(params.base_hue, params.hue_shift, wave),
        alpha: projected.scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldConfig;

    fn params(time: f32, rotation: Rotation) -> FrameParams {
        let config = FieldConfig::default();
        FrameParams {
            camera: Camera { fov: config.fov, view_distance: config.view_distance },
            wave: WaveParams::from_config(&config),
            rotation,
            time,
            width: 800.0,
            height: 600.0,
            size_factor: config.size_factor,
            base_hue: config.base_hue,
            hue_shift: config.hue_shift,
        }
    }

    #[test]
    fn flat_origin_point_projects_to_centre_column() {
        // x = 0, distance = 0, time = 0 => no wave
        let point = GridPoint { x: 0.0, y: 100.0, z: 0.0 };
        let dot = project_point(&point, &params(0.0, Rotation::default())).unwrap();
        assert_eq!(dot.screen_x, 400.0);
        assert_eq!(dot.alpha, 0.75);
        assert_eq!(dot.screen_y, 300.0 + 100.0 * 0.75);
        assert_eq!(dot.radius, 0.75 * 3.0);
        assert_eq!(dot.hue, 200.0);
    }

    #[test]
    fn radius_and_alpha_follow_scale() {
        let point = GridPoint { x: 120.0, y: 100.0, z: 360.0 };
        let dot = project_point(&point, &params(2.3, Rotation { yaw: 0.1, pitch: -0.05 })).unwrap();
        assert!((dot.radius - dot.alpha * 3.0).abs() < 1e-5);
        assert!(dot.alpha > 0.0);
    }

    #[test]
    fn hue_tracks_wave_height() {
        let point = GridPoint { x: 200.0, y: 100.0, z: 400.0 };
        let p = params(1.7, Rotation::default());
        let wave = p.wave.displacement(point.base().planar_length(), point.x, p.time);
        let dot = project_point(&point, &p).unwrap();
        assert!((dot.hue - (200.0 + 2.0 * wave)).abs() < 1e-3);
    }

    #[test]
    fn yaw_rotates_points_around_vertical_axis() {
        // Quarter-turn yaw sends (x, z) = (400, 0) to z = 400
        let point = GridPoint { x: 400.0, y: 0.0, z: 0.0 };
        let mut p = params(0.0, Rotation { yaw: std::f32::consts::FRAC_PI_2, pitch: 0.0 });
        p.wave = WaveParams { radial_amplitude: 0.0, lateral_amplitude: 0.0, ..p.wave };
        let dot = project_point(&point, &p).unwrap();
        // scale = 300 / (400 + 400)
        assert!((dot.alpha - 0.375).abs() < 1e-5);
        assert!((dot.screen_x - 400.0).abs() < 1e-2);
    }

    #[test]
    fn point_behind_camera_is_culled() {
        // Half-turn yaw flips z = 600 to z = -600, past the view distance
        let point = GridPoint { x: 0.0, y: 0.0, z: 600.0 };
        let p = params(0.0, Rotation { yaw: std::f32::consts::PI, pitch: 0.0 });
        assert!(project_point(&point, &p).is_none());
    }

    #[test]
    fn identical_inputs_identical_dots() {
        let point = GridPoint { x: -340.0, y: 100.0, z: 880.0 };
        let p = params(12.5, Rotation { yaw: 0.2, pitch: 0.1 });
        assert_eq!(project_point(&point, &p), project_point(&point, &p));
    }
}
