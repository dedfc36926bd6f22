use crate::controllers::explorer::ports::platform::ShaderUniforms;
use crate::core::data::palette::COLOR_PALETTE;
use crate::core::data::viewport::Viewport;

pub const SCALE_UNIFORM: &str = "u_ScreenToWorldScaleFactor";
pub const WORLD_BOTTOM_UNIFORM: &str = "u_WorldBottom";
pub const WORLD_LEFT_UNIFORM: &str = "u_WorldLeft";
pub const ITERATION_COUNT_UNIFORM: &str = "u_IterationCount";
pub const COLOR_PALETTE_UNIFORM: &str = "u_ColorPalette";

/// Pushes the per-redraw view parameters. World values are narrowed to `f32` here, at
/// the shader boundary.
pub fn publish_view<U: ShaderUniforms + ?Sized>(
    uniforms: &mut U,
    viewport: &Viewport,
    iteration_count: i32,
) {
    uniforms.set_uniform_float(SCALE_UNIFORM, viewport.screen_to_world_scale() as f32);
    uniforms.set_uniform_float(WORLD_BOTTOM_UNIFORM, viewport.bottom() as f32);
    uniforms.set_uniform_float(WORLD_LEFT_UNIFORM, viewport.left() as f32);
    uniforms.set_uniform_int(ITERATION_COUNT_UNIFORM, iteration_count);
}

/// The palette only changes with the program, so it is sent after each (re)load.
pub fn publish_palette<U: ShaderUniforms + ?Sized>(uniforms: &mut U) {
    uniforms.set_uniform_vec3(COLOR_PALETTE_UNIFORM, &COLOR_PALETTE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::palette::PALETTE_SIZE;

    #[derive(Debug, PartialEq)]
    enum Uniform {
        Float(String, f32),
        Int(String, i32),
        Vec3(String, usize),
    }

    #[derive(Default)]
    struct Recorder {
        uniforms: Vec<Uniform>,
    }

    impl ShaderUniforms for Recorder {
        fn set_uniform_float(&mut self, name: &str, value: f32) {
            self.uniforms.push(Uniform::Float(name.to_string(), value));
        }

        fn set_uniform_int(&mut self, name: &str, value: i32) {
            self.uniforms.push(Uniform::Int(name.to_string(), value));
        }

        fn set_uniform_vec3(&mut self, name: &str, values: &[[f32; 3]]) {
            self.uniforms.push(Uniform::Vec3(name.to_string(), values.len()));
        }
    }

    #[test]
    fn publishes_view_uniforms_in_order() {
        let viewport = Viewport::new(-2.0, -1.0, 3.0, 2.0, 1000).unwrap();
        let mut recorder = Recorder::default();

        publish_view(&mut recorder, &viewport, 512);

        assert_eq!(
            recorder.uniforms,
            vec![
                Uniform::Float("u_ScreenToWorldScaleFactor".to_string(), 0.003),
                Uniform::Float("u_WorldBottom".to_string(), -1.0),
                Uniform::Float("u_WorldLeft".to_string(), -2.0),
                Uniform::Int("u_IterationCount".to_string(), 512),
            ]
        );
    }

    #[test]
    fn publishes_full_palette() {
        let mut recorder = Recorder::default();

        publish_palette(&mut recorder);

        assert_eq!(
            recorder.uniforms,
            vec![Uniform::Vec3("u_ColorPalette".to_string(), PALETTE_SIZE)]
        );
    }
}
