use crate::controllers::explorer::config::ShaderPaths;
use crate::controllers::explorer::errors::PlatformError;
use crate::controllers::explorer::ports::platform::{Platform, ShaderUniforms};
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::memory::arena::ScratchArena;
use crate::core::timing::clock::{Clock, SystemClock};
use crate::presenters::gpu::{GpuPresenter, PresenterError};
use crate::storage::load_file::{load_file_into, source_text};

/// [`Platform`] backed by a winit window and the wgpu presenter.
pub struct GuiPlatform {
    presenter: GpuPresenter,
    scratch: ScratchArena,
    clock: SystemClock,
    window: WindowDimensions,
    frame_time_ms: f64,
    redraw_requested: bool,
}

impl GuiPlatform {
    pub fn new(presenter: GpuPresenter, clock: SystemClock, window: WindowDimensions) -> Self {
        Self {
            presenter,
            scratch: ScratchArena::default(),
            clock,
            window,
            frame_time_ms: 0.0,
            redraw_requested: false,
        }
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn record_frame_time(&mut self, frame_time_ms: f64) {
        self.frame_time_ms = frame_time_ms;
    }

    pub fn resize(&mut self, window: WindowDimensions) -> Result<(), PresenterError> {
        self.window = window;
        self.presenter.resize(window)
    }

    pub fn present(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &egui::Context,
    ) -> Result<(), PresenterError> {
        self.presenter.render(egui_output, egui_ctx)
    }
}

impl ShaderUniforms for GuiPlatform {
    fn set_uniform_float(&mut self, name: &str, value: f32) {
        self.presenter.set_uniform_float(name, value);
    }

    fn set_uniform_int(&mut self, name: &str, value: i32) {
        self.presenter.set_uniform_int(name, value);
    }

    fn set_uniform_vec3(&mut self, name: &str, values: &[[f32; 3]]) {
        self.presenter.set_uniform_vec3(name, values);
    }
}

impl Platform for GuiPlatform {
    fn window_dimensions(&self) -> WindowDimensions {
        self.window
    }

    fn elapsed_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    fn frame_time_ms(&self) -> f64 {
        self.frame_time_ms
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn reload_shader(&mut self, shaders: &ShaderPaths) -> Result<(), PlatformError> {
        let mut scope = self.scratch.scope();
        let vertex = load_file_into(&mut scope, &shaders.vertex)?;
        let fragment = load_file_into(&mut scope, &shaders.fragment)?;

        let vertex_source = source_text(&scope, vertex, &shaders.vertex)?;
        let fragment_source = source_text(&scope, fragment, &shaders.fragment)?;

        self.presenter.load_program(vertex_source, fragment_source)
    }
}
