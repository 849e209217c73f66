/// Move `current` a fixed fraction of the way toward `target`.
///
/// With `factor` in (0, 1] this never overshoots: the remaining gap is
/// multiplied by `1 - factor` each call.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Yaw/pitch pair that eases toward a pointer-driven target
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Rotation {
    pub fn ease_toward(&mut self, target: Rotation, factor: f32) {
        self.yaw = ease_toward(self.yaw, target.yaw, factor);
        self.pitch = ease_toward(self.pitch, target.pitch, factor);
    }
}
