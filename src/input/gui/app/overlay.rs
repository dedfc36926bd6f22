use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::explorer::APP_NAME;
use crate::core::data::viewport::Viewport;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::timing::frame_scheduler::LoopTimings;

/// Values shown in the diagnostics panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStats {
    pub timings: LoopTimings,
    pub iterations: i32,
    pub viewport: Viewport,
    pub window: WindowDimensions,
}

impl OverlayStats {
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        let frame_time_ms = self.timings.frame_time_ms;
        (frame_time_ms > 0.0).then(|| 1000.0 / frame_time_ms)
    }
}

/// egui diagnostics panel drawn over the fractal.
pub struct Overlay {
    ctx: Context,
    state: EguiWinitState,
}

impl Overlay {
    pub fn new(window: &Window, event_loop: &EventLoop<()>) -> Self {
        let ctx = Context::default();
        let state = EguiWinitState::new(
            ctx.clone(),
            ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self { ctx, state }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn set_pixels_per_point(&self, pixels_per_point: f32) {
        self.ctx.set_pixels_per_point(pixels_per_point);
    }

    /// Forwards a window event to egui. Returns true if egui consumed it.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn run(&mut self, window: &Window, stats: &OverlayStats) -> egui::FullOutput {
        let raw_input = self.state.take_egui_input(window);

        let mut output = self.ctx.run(raw_input, |ctx| {
            egui::Window::new("Diagnostics")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 180.0])
                .show(ctx, |ui| {
                    ui.heading(APP_NAME);
                    ui.separator();

                    ui.label(format!("Frame time: {:.3} ms", stats.timings.frame_time_ms));
                    match stats.fps() {
                        Some(fps) => ui.label(format!("FPS: {fps:.1}")),
                        None => ui.label("FPS: -"),
                    };
                    ui.label(format!("Loop time: {:.3} ms", stats.timings.update_ms));
                    ui.label(format!("Idle time: {:.3} ms", stats.timings.idle_ms));
                    ui.label(format!("Iterations: {}", stats.iterations));

                    ui.separator();
                    ui.label("View region:");
                    ui.label(format!(
                        "Left/bottom: ({:.6}, {:.6})",
                        stats.viewport.left(),
                        stats.viewport.bottom()
                    ));
                    ui.label(format!(
                        "Extent: {:.3e} x {:.3e}",
                        stats.viewport.width(),
                        stats.viewport.height()
                    ));

                    ui.separator();
                    ui.label(format!(
                        "Window size: {}x{}",
                        stats.window.width, stats.window.height
                    ));
                });
        });

        let platform_output = std::mem::take(&mut output.platform_output);
        self.state.handle_platform_output(window, platform_output);

        output
    }
}
