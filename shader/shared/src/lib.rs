//! Types shared between the SPIR-V entry points and the host.

#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
pub mod geometry;
pub mod push_constants;
pub mod transform;

/// Occupancy of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::NoUninit)]
#[repr(u32)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// The liveness scalar handed to the cell vertex stage: 1.0 for a live
    /// cell, 0.0 for a dead one.
    pub fn liveness(self) -> f32 {
        match self {
            Cell::Dead => 0.0,
            Cell::Alive => 1.0,
        }
    }
}
