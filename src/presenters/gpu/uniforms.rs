use bytemuck::{Pod, Zeroable};

use crate::controllers::explorer::publisher::{
    COLOR_PALETTE_UNIFORM, ITERATION_COUNT_UNIFORM, SCALE_UNIFORM, WORLD_BOTTOM_UNIFORM,
    WORLD_LEFT_UNIFORM,
};
use crate::core::data::palette::PALETTE_SIZE;
use crate::core::data::window_dimensions::WindowDimensions;

/// CPU mirror of the `View` uniform block in `shaders/fragment.wgsl`.
///
/// Field order and padding follow WGSL uniform layout rules: the palette array starts on
/// a 16-byte boundary and stores each RGB entry as a `vec4`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub scale: f32,
    pub left: f32,
    pub bottom: f32,
    pub iteration_count: i32,
    pub screen_size: [f32; 2],
    _padding: [f32; 2],
    pub color_palette: [[f32; 4]; PALETTE_SIZE],
}

impl ViewUniforms {
    #[must_use]
    pub fn new(window: WindowDimensions) -> Self {
        let mut uniforms = Self::zeroed();
        uniforms.set_screen_size(window);
        uniforms
    }

    pub fn set_screen_size(&mut self, window: WindowDimensions) {
        self.screen_size = [window.width as f32, window.height as f32];
    }

    /// Returns `false` for names the block does not declare.
    pub fn set_float(&mut self, name: &str, value: f32) -> bool {
        let slot = match name {
            SCALE_UNIFORM => &mut self.scale,
            WORLD_LEFT_UNIFORM => &mut self.left,
            WORLD_BOTTOM_UNIFORM => &mut self.bottom,
            _ => return false,
        };

        *slot = value;
        true
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> bool {
        if name != ITERATION_COUNT_UNIFORM {
            return false;
        }

        self.iteration_count = value;
        true
    }

    /// Extra entries beyond the palette size are dropped.
    pub fn set_vec3(&mut self, name: &str, values: &[[f32; 3]]) -> bool {
        if name != COLOR_PALETTE_UNIFORM {
            return false;
        }

        for (slot, [r, g, b]) in self.color_palette.iter_mut().zip(values) {
            *slot = [*r, *g, *b, 1.0];
        }
        true
    }
}
