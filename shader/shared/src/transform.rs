//! The grid-to-clip coordinate mapping used by every vertex entry point.
//!
//! Grid coordinates live in `[0, width) x [0, height)` with rows growing
//! downward; clip space is `[-1, 1]` on both axes with Y growing upward.
//! The mapping is a pure function of the vertex position and the grid size.
//! Out-of-range positions and zero dimensions are not rejected, they simply
//! map outside clip space (or to non-finite values); callers guarantee a
//! positive grid size.

use crate::push_constants::Size;
use glam::*;

/// Maps a grid coordinate to a clip-space position.
///
/// Each axis is scaled from `[0, size)` to `[-1, 1)` and Y is negated so the
/// top-left cell lands in the top-left clip corner. Z and W are fixed at 1.0:
/// a flat draw with no depth variation and no perspective division.
pub fn grid_to_clip(position: Vec2, size: Size) -> Vec4 {
    let centered = position / size.as_vec2() * 2.0 - Vec2::ONE;
    vec2(centered.x, -centered.y).extend(1.0).extend(1.0)
}

/// Output of the liveness-forwarding vertex variant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellVertex {
    pub clip_position: Vec4,
    /// Forwarded verbatim for interpolation; never inspected here.
    pub alive: f32,
}

/// The cell-occupancy variant of [`grid_to_clip`]: identical position
/// mapping, plus the liveness scalar passed through unmodified.
pub fn cell_to_clip(position: Vec2, alive: f32, size: Size) -> CellVertex {
    CellVertex {
        clip_position: grid_to_clip(position, size),
        alive,
    }
}
