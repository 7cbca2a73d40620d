use super::*;
use bytemuck::NoUninit;

/// Per-draw constants for both vertex entry points. The gridline and cell
/// draws differ only in their vertex attributes, not in their uniforms.
#[derive(Copy, Clone, Debug, NoUninit)]
#[repr(C)]
pub struct VertexConstants {
    pub size: Size,
}
