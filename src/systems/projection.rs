//! Perspective projection and culling
//!
//! `scale = fov / (view_distance + z)`. Points with `view_distance + z <= 0`
//! sit at or behind the camera plane and are culled, as is any point whose
//! scale comes out non-positive. In front of the plane scale is not clamped:
//! points there grow large and fully opaque.

use super::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub view_distance: f32,
}

/// Screen-space result for one visible point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen_x: f32,
    pub screen_y: f32,
    pub scale: f32,
}

impl Camera {
    #[inline]
    pub fn scale(&self, z: f32) -> f32 {
        self.fov / (self.view_distance + z)
    }

    /// Project a rotated point onto a `width` x `height` viewport, or `None` when culled
    #[inline]
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Option<Projected> {
        let depth = self.view_distance + p.z;
        // On the camera plane the division would give inf; NaN fails too
        if !(depth > 0.0) {
            return None;
        }
        let scale = self.fov / depth;
        if !(scale > 0.0) {
            return None;
        }
        Some(Projected {
            screen_x: width * 0.5 + p.x * scale,
            screen_y: height * 0.5 + p.y * scale,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMERA: Camera = Camera { fov: 300.0, view_distance: 400.0 };

    #[test]
    fn reference_example_has_unit_scale() {
        let p = CAMERA.project(Vec3::new(10.0, 20.0, -100.0), 800.0, 600.0).unwrap();
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.screen_x, 410.0);
        assert_eq!(p.screen_y, 320.0);
    }

    #[test]
    fn origin_lands_on_viewport_centre() {
        let p = CAMERA.project(Vec3::zero(), 1024.0, 768.0).unwrap();
        assert_eq!((p.screen_x, p.screen_y), (512.0, 384.0));
        assert_eq!(p.scale, 0.75);
    }

    #[test]
    fn same_input_same_output() {
        let v = Vec3::new(-231.5, 87.25, 613.0);
        let a = CAMERA.project(v, 1280.0, 720.0);
        let b = CAMERA.project(v, 1280.0, 720.0);
        assert_eq!(a, b);
    }

    #[test]
    fn points_at_or_behind_camera_are_culled() {
        assert!(CAMERA.project(Vec3::new(0.0, 0.0, -400.0), 800.0, 600.0).is_none());
        assert!(CAMERA.project(Vec3::new(0.0, 0.0, -401.0), 800.0, 600.0).is_none());
        assert!(CAMERA.project(Vec3::new(0.0, 0.0, -5000.0), 800.0, 600.0).is_none());
        assert!(CAMERA.project(Vec3::new(0.0, 0.0, -399.0), 800.0, 600.0).is_some());
    }

    #[test]
    fn point_on_camera_plane_never_yields_infinite_coordinates() {
        assert!(CAMERA.project(Vec3::new(10.0, 0.0, -400.0), 800.0, 600.0).is_none());
        assert!(CAMERA.project(Vec3::new(-250.0, 80.0, -400.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn negative_fov_culls_everything() {
        let camera = Camera { fov: -300.0, view_distance: 400.0 };
        assert!(camera.project(Vec3::zero(), 800.0, 600.0).is_none());
    }

    #[test]
    fn near_camera_scale_is_not_clamped() {
        let p = CAMERA.project(Vec3::new(0.0, 0.0, -399.0), 800.0, 600.0).unwrap();
        assert_eq!(p.scale, 300.0);
    }

    #[test]
    fn farther_points_shrink() {
        let near = CAMERA.scale(0.0);
        let far = CAMERA.scale(1000.0);
        assert!(far < near);
    }
}
