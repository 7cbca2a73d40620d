#![cfg_attr(target_arch = "spirv", no_std)]

use glam::*;
use shared::push_constants::shader::*;
use shared::transform::*;
use spirv_std::spirv;

/// Gridline vertex stage: grid-space line endpoints, no liveness attribute.
#[spirv(vertex)]
pub fn grid_vs(
    position: Vec2,
    #[cfg(not(feature = "emulate_constants"))]
    #[spirv(push_constant)]
    constants: &VertexConstants,
    #[cfg(feature = "emulate_constants")]
    #[spirv(storage_buffer, descriptor_set = 1, binding = 0)]
    constants: &VertexConstants,
    #[spirv(position, invariant)] out_pos: &mut Vec4,
) {
    *out_pos = grid_to_clip(position, constants.size);
}

#[spirv(fragment)]
pub fn grid_fs(output: &mut Vec4) {
    *output = vec4(0.0, 0.0, 0.0, 1.0);
}

/// Cell-occupancy vertex stage: same mapping as [`grid_vs`], plus the
/// `alive` attribute forwarded for interpolation.
#[spirv(vertex)]
pub fn cells_vs(
    position: Vec2,
    alive: f32,
    #[cfg(not(feature = "emulate_constants"))]
    #[spirv(push_constant)]
    constants: &VertexConstants,
    #[cfg(feature = "emulate_constants")]
    #[spirv(storage_buffer, descriptor_set = 1, binding = 0)]
    constants: &VertexConstants,
    #[spirv(position, invariant)] out_pos: &mut Vec4,
    frag_alive: &mut f32,
) {
    let vertex = cell_to_clip(position, alive, constants.size);
    *out_pos = vertex.clip_position;
    *frag_alive = vertex.alive;
}

#[spirv(fragment)]
pub fn cells_fs(frag_alive: f32, output: &mut Vec4) {
    let color = (1.0 - frag_alive) * Vec3::ONE;
    *output = color.extend(1.0);
}
