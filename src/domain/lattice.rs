//! Lattice - the fixed grid of world-space points under the wave
//!
//! Points lie on a horizontal plane at `plane_height`. Columns run along X
//! and are centred on the origin; rows run along +Z starting at 0.
//! Built once; base coordinates never change afterwards.

use crate::systems::vec3::Vec3;

/// One node of the lattice, in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub x: f32,
    /// Base height; the wave displacement is added to it every frame.
    pub y: f32,
    pub z: f32,
}

impl GridPoint {
    #[inline]
    pub fn base(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

pub struct Lattice {
    points: Vec<GridPoint>,
    rows: u32,
    cols: u32,
    spacing: f32,
}

impl Lattice {
    pub fn new(rows: u32, cols: u32, spacing: f32, plane_height: f32) -> Self {
        let mut points = Vec::with_capacity((rows as usize) * (cols as usize));
        // (cols - 1) / 2 keeps the X extent symmetric for odd and even counts
        let half_span = cols.saturating_sub(1) as f32 * 0.5;

        for row in 0..rows {
            let z = row as f32 * spacing;
            for col in 0..cols {
                points.push(GridPoint {
                    x: (col as f32 - half_span) * spacing,
                    y: plane_height,
                    z,
                });
            }
        }

        Self { points, rows, cols, spacing }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rows(&self) -> u32 { self.rows }

    pub fn cols(&self) -> u32 { self.cols }

    pub fn spacing(&self) -> f32 { self.spacing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_rows_times_cols_points() {
        for (rows, cols) in [(1, 1), (3, 7), (50, 50), (8, 1)] {
            let lattice = Lattice::new(rows, cols, 40.0, 100.0);
            assert_eq!(lattice.len(), (rows * cols) as usize);
        }
    }

    #[test]
    fn x_is_symmetric_about_zero() {
        for cols in [1u32, 2, 5, 50] {
            let lattice = Lattice::new(2, cols, 40.0, 0.0);
            let row: Vec<f32> = lattice.points()[..cols as usize].iter().map(|p| p.x).collect();
            let first = row[0];
            let last = row[row.len() - 1];
            assert!((first + last).abs() < 1e-3, "cols={} first={} last={}", cols, first, last);
            let sum: f32 = row.iter().sum();
            assert!(sum.abs() < 1e-2);
        }
    }

    #[test]
    fn z_starts_at_zero_and_steps_by_spacing() {
        let lattice = Lattice::new(4, 3, 25.0, 0.0);
        for (i, p) in lattice.points().iter().enumerate() {
            let row = i / 3;
            assert_eq!(p.z, row as f32 * 25.0);
        }
        assert_eq!(lattice.points()[0].z, 0.0);
    }

    #[test]
    fn neighbours_along_x_are_one_spacing_apart() {
        let lattice = Lattice::new(1, 50, 40.0, 0.0);
        for pair in lattice.points().windows(2) {
            assert!((pair[1].x - pair[0].x - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn every_point_sits_on_the_plane() {
        let lattice = Lattice::new(5, 5, 40.0, 123.0);
        assert!(lattice.points().iter().all(|p| p.y == 123.0));
    }
}
