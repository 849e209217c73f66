use crate::systems::Rotation;

use super::FieldCore;

/// Map a viewport coordinate to [-1, 1]; a zero-sized axis maps to 0
#[inline]
pub fn normalize_pointer(pos: f32, dimension: f32) -> f32 {
    if dimension > 0.0 {
        2.0 * (pos / dimension) - 1.0
    } else {
        0.0
    }
}

/// Only the target moves here; `step` eases the live rotation toward it.
pub(super) fn pointer_move(field: &mut FieldCore, client_x: f32, client_y: f32) {
    field.pointer_x = normalize_pointer(client_x, field.width as f32);
    field.pointer_y = normalize_pointer(client_y, field.height as f32);

    field.target = Rotation {
        yaw: field.pointer_x * field.config.yaw_range,
        pitch: field.pointer_y * field.config.pitch_range,
    };
}
