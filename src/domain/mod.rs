//! Domain - configuration and the world-space lattice

pub mod config;
pub mod lattice;

pub use config::{FieldConfig, MAX_POINTS};
pub use lattice::{GridPoint, Lattice};
