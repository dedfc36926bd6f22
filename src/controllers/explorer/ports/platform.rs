use crate::controllers::explorer::config::ShaderPaths;
use crate::controllers::explorer::errors::PlatformError;
use crate::core::data::window_dimensions::WindowDimensions;

/// Named parameters of the bound shader program.
pub trait ShaderUniforms {
    fn set_uniform_float(&mut self, name: &str, value: f32);
    fn set_uniform_int(&mut self, name: &str, value: i32);
    fn set_uniform_vec3(&mut self, name: &str, values: &[[f32; 3]]);
}

/// What the explorer needs from the window system and the GPU.
///
/// Input is pushed into the controller by the backend rather than pulled through this
/// trait.
pub trait Platform: ShaderUniforms {
    fn window_dimensions(&self) -> WindowDimensions;

    /// Monotonic milliseconds since startup.
    fn elapsed_ms(&self) -> f64;

    /// Duration of the last completed frame.
    fn frame_time_ms(&self) -> f64;

    /// Asks for a publish + present pass at the end of the current loop iteration.
    fn request_redraw(&mut self);

    /// Compiles and links the shader pair. On failure the previous program stays bound.
    fn reload_shader(&mut self, shaders: &ShaderPaths) -> Result<(), PlatformError>;
}
