use crate::domain::{FieldConfig, Lattice};
use crate::systems::{Camera, Rotation, WaveParams};

use super::frame::FrameBuffer;
use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn create_field_core(width: u32, height: u32, config: FieldConfig) -> FieldCore {
    let lattice = Lattice::new(config.rows, config.cols, config.spacing, config.plane_height);
    let frame_buffer = FrameBuffer::with_capacity(lattice.len());

    FieldCore {
        camera: Camera {
            fov: config.fov,
            view_distance: config.view_distance,
        },
        wave: WaveParams::from_config(&config),
        lattice,
        config,
        width,
        height,
        pointer_x: 0.0,
        pointer_y: 0.0,
        rotation: Rotation::default(),
        target: Rotation::default(),
        time: 0.0,
        frame: 0,
        frame_buffer,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
