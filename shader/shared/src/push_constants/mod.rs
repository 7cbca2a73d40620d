#[cfg(not(target_arch = "spirv"))]
use bytemuck::NoUninit;
use glam::*;

pub mod shader;

/// Grid dimensions in cells. Constant for the duration of a draw call and
/// assumed positive on both axes; the transform divides by them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "spirv"), derive(NoUninit))]
#[repr(C)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    #[cfg(not(target_arch = "spirv"))]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<UVec2> for Size {
    fn from(v: UVec2) -> Self {
        Self {
            width: v.x,
            height: v.y,
        }
    }
}
