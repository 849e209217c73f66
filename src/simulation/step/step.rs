#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::frame::Dot;
use super::project::{project_point, FrameParams};
use super::{FieldCore, PerfTimer};

pub(super) fn step(field: &mut FieldCore) {
    let mut timer = if field.perf_enabled { Some(PerfTimer::start()) } else { None };

    let ease = field.config.ease;
    let target = field.target;
    field.rotation.ease_toward(target, ease);

    // Fixed step per tick: animation speed follows frame rate, not wall clock
    field.time += field.config.time_step;
    field.frame += 1;

    let params = field.frame_params();
    project_lattice(field, &params);

    if let Some(timer) = timer.as_mut() {
        let project_ms = timer.lap_ms();
        let processed = field.lattice.len() as u32;
        let drawn = field.frame_buffer.len() as u32;
        let stats = &mut field.perf_stats;
        stats.project_ms = project_ms;
        stats.points_processed = processed;
        stats.points_drawn = drawn;
        stats.points_culled = processed - drawn;
        stats.frame = field.frame;
        stats.step_ms = timer.total_ms();
    }
}

/// Refill the frame buffer in lattice order; culled points are skipped
fn project_lattice(field: &mut FieldCore, params: &FrameParams) {
    field.frame_buffer.clear();

    #[cfg(feature = "parallel")]
    {
        let dots: Vec<Option<Dot>> = field
            .lattice
            .points()
            .par_iter()
            .map(|p| project_point(p, params))
            .collect();
        for dot in dots.into_iter().flatten() {
            field.frame_buffer.push(dot);
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for point in field.lattice.points() {
            let dot: Option<Dot> = project_point(point, params);
            if let Some(dot) = dot {
                field.frame_buffer.push(dot);
            }
        }
    }
}
