use log::{debug, error, info, trace};

use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::platform::{Platform, ShaderUniforms};
use crate::controllers::explorer::publisher::{publish_palette, publish_view};
use crate::controllers::explorer::state::ExplorerState;
use crate::core::data::viewport::ZoomDirection;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::input::keys::TrackedKey;
use crate::core::input::mouse::MouseEvent;
use crate::core::timing::frame_scheduler::FrameTick;

pub const APP_NAME: &str = "GPUdbrot";

/// Application layer of the explorer.
///
/// The backend drives it through a fixed lifecycle: [`on_entry`](Self::on_entry) once,
/// then per loop iteration any number of input callbacks followed by
/// [`on_loop`](Self::on_loop) and, when a redraw was requested,
/// [`on_redraw`](Self::on_redraw). [`on_exit`](Self::on_exit) runs once when the loop
/// stops.
#[derive(Debug)]
pub struct ExplorerController {
    config: ExplorerConfig,
    state: ExplorerState,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerError> {
        let state = ExplorerState::new(&config)?;

        Ok(Self { config, state })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        APP_NAME
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    /// Binds the initial shader program. Failing to load it is fatal.
    pub fn on_entry<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
    ) -> Result<(), ExplorerError> {
        self.on_resize(platform.window_dimensions());

        if let Err(err) = platform.reload_shader(&self.config.shaders) {
            error!("{err}");
            return Err(ExplorerError::StartupShader(err));
        }

        publish_palette(platform);
        platform.request_redraw();

        info!(
            "{} started at {}x{} with {} iterations",
            APP_NAME,
            self.state.window.width,
            self.state.window.height,
            self.state.iteration_count()
        );

        Ok(())
    }

    pub fn on_loop<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        let input = &mut self.state.input;
        input.poll();

        if input.is_key_released_edge(TrackedKey::Shift) {
            self.reload_shaders(platform);
        }

        let increase = self.state.input.is_key_down(TrackedKey::UpArrow);
        let decrease = self.state.input.is_key_down(TrackedKey::DownArrow);

        if let Some(count) = self
            .state
            .iterations
            .update(platform.elapsed_ms(), increase, decrease)
        {
            debug!("iteration count {count}");
        }

        platform.request_redraw();
    }

    pub fn on_key_event(&mut self, key: TrackedKey, pressed: bool) {
        self.state.input.handle_key_event(key, pressed);
    }

    pub fn on_mouse_event(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Move {
                x, y, left_button, ..
            } => {
                let (dx, dy) = self.state.cursor.move_to(x, y, left_button);

                if left_button {
                    self.state.viewport.pan_by_screen_delta(dx, dy);
                }
            }
            MouseEvent::Wheel { toward_user } => {
                let direction = ZoomDirection::from_wheel(toward_user);
                let zoomed = self.state.viewport.zoom(
                    direction,
                    self.state.cursor.position(),
                    self.state.window,
                );

                if zoomed {
                    debug!(
                        "zoom {:?}: width {:e}, height {:e}",
                        direction,
                        self.state.viewport.width(),
                        self.state.viewport.height()
                    );
                } else {
                    debug!("zoom {direction:?} rejected");
                }
            }
        }
    }

    pub fn on_resize(&mut self, window: WindowDimensions) {
        self.state.window = window;
        self.state.viewport.resize(window.width);
    }

    pub fn on_redraw<U: ShaderUniforms + ?Sized>(&self, uniforms: &mut U) {
        publish_view(uniforms, &self.state.viewport, self.state.iteration_count());
    }

    /// Records the scheduler's timings for one loop iteration and traces them. Frames
    /// get an extra line with the measured frame rate.
    pub fn on_tick(&mut self, tick: FrameTick) {
        self.state.timings.record(tick);

        trace!("idle {:.3} ms | loop {:.3} ms", tick.idle_ms(), tick.update_ms());

        if let Some(frame_time_ms) = tick.completed_frame() {
            let fps = if frame_time_ms > 0.0 {
                1000.0 / frame_time_ms
            } else {
                f64::INFINITY
            };

            trace!(
                "frame {:.3} ms ({:.1} fps), {} iterations",
                frame_time_ms,
                fps,
                self.state.iteration_count()
            );
        }
    }

    pub fn on_exit(&mut self) {
        self.state.input.reset();
        info!("{APP_NAME} exiting");
    }

    fn reload_shaders<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        match platform.reload_shader(&self.config.shaders) {
            Ok(()) => {
                publish_palette(platform);
                info!(
                    "reloaded shaders from {} and {}",
                    self.config.shaders.vertex.display(),
                    self.config.shaders.fragment.display()
                );
            }
            Err(err) => error!("{err}; keeping the previous shader program"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::explorer::config::{ShaderPaths, ShaderStage};
    use crate::controllers::explorer::errors::PlatformError;
    use crate::controllers::explorer::publisher::{
        COLOR_PALETTE_UNIFORM, ITERATION_COUNT_UNIFORM, SCALE_UNIFORM, WORLD_LEFT_UNIFORM,
    };

    #[derive(Default)]
    struct FakePlatform {
        window: WindowDimensions,
        now_ms: f64,
        redraws: usize,
        reloads: usize,
        fail_reload: bool,
        floats: Vec<(String, f32)>,
        ints: Vec<(String, i32)>,
        palettes: Vec<String>,
    }

    impl ShaderUniforms for FakePlatform {
        fn set_uniform_float(&mut self, name: &str, value: f32) {
            self.floats.push((name.to_string(), value));
        }

        fn set_uniform_int(&mut self, name: &str, value: i32) {
            self.ints.push((name.to_string(), value));
        }

        fn set_uniform_vec3(&mut self, name: &str, _values: &[[f32; 3]]) {
            self.palettes.push(name.to_string());
        }
    }

    impl Platform for FakePlatform {
        fn window_dimensions(&self) -> WindowDimensions {
            self.window
        }

        fn elapsed_ms(&self) -> f64 {
            self.now_ms
        }

        fn frame_time_ms(&self) -> f64 {
            0.0
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn reload_shader(&mut self, _shaders: &ShaderPaths) -> Result<(), PlatformError> {
            self.reloads += 1;

            if self.fail_reload {
                Err(PlatformError::ShaderCompile {
                    stage: ShaderStage::Fragment,
                    message: "expected ';'".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn started() -> (ExplorerController, FakePlatform) {
        let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
        let mut platform = FakePlatform {
            window: WindowDimensions::new(1080, 720),
            ..FakePlatform::default()
        };

        controller.on_entry(&mut platform).unwrap();

        (controller, platform)
    }

    fn press_and_release(
        controller: &mut ExplorerController,
        platform: &mut FakePlatform,
        key: TrackedKey,
    ) {
        controller.on_key_event(key, true);
        controller.on_loop(platform);
        controller.on_key_event(key, false);
        controller.on_loop(platform);
    }

    #[test]
    fn entry_loads_shader_and_publishes_palette() {
        let (controller, platform) = started();

        assert_eq!(controller.name(), "GPUdbrot");
        assert_eq!(platform.reloads, 1);
        assert_eq!(platform.palettes, vec![COLOR_PALETTE_UNIFORM.to_string()]);
        assert_eq!(platform.redraws, 1);
    }

    #[test]
    fn entry_failure_is_fatal() {
        let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
        let mut platform = FakePlatform {
            fail_reload: true,
            window: WindowDimensions::new(1080, 720),
            ..FakePlatform::default()
        };

        let result = controller.on_entry(&mut platform);

        assert!(matches!(result, Err(ExplorerError::StartupShader(_))));
        assert!(platform.palettes.is_empty());
    }

    #[test]
    fn entry_picks_up_actual_window_size() {
        let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
        let mut platform = FakePlatform {
            window: WindowDimensions::new(2000, 1000),
            ..FakePlatform::default()
        };

        controller.on_entry(&mut platform).unwrap();

        assert_eq!(controller.state().window, WindowDimensions::new(2000, 1000));
        assert!((controller.state().viewport.screen_to_world_scale() - 0.0015).abs() < 1e-12);
    }

    #[test]
    fn shift_release_reloads_once_and_republishes_palette() {
        let (mut controller, mut platform) = started();

        press_and_release(&mut controller, &mut platform, TrackedKey::Shift);
        controller.on_loop(&mut platform);

        assert_eq!(platform.reloads, 2);
        assert_eq!(platform.palettes.len(), 2);
    }

    #[test]
    fn failed_reload_keeps_running_without_palette() {
        let (mut controller, mut platform) = started();
        platform.fail_reload = true;

        press_and_release(&mut controller, &mut platform, TrackedKey::Shift);

        assert_eq!(platform.reloads, 2);
        assert_eq!(platform.palettes.len(), 1);
    }

    #[test]
    fn every_loop_requests_a_redraw() {
        let (mut controller, mut platform) = started();

        controller.on_loop(&mut platform);
        controller.on_loop(&mut platform);

        assert_eq!(platform.redraws, 3);
    }

    #[test]
    fn held_up_arrow_is_rate_limited() {
        let (mut controller, mut platform) = started();
        controller.on_key_event(TrackedKey::UpArrow, true);

        for step in 0..=100 {
            platform.now_ms = f64::from(step);
            controller.on_loop(&mut platform);
        }

        assert_eq!(controller.state().iteration_count(), 1024 + 5);
    }

    #[test]
    fn down_arrow_never_goes_below_zero() {
        let config = ExplorerConfig {
            initial_iterations: 1,
            ..ExplorerConfig::default()
        };
        let mut controller = ExplorerController::new(config).unwrap();
        let mut platform = FakePlatform::default();
        controller.on_key_event(TrackedKey::DownArrow, true);

        for step in 0..10 {
            platform.now_ms = f64::from(step) * 50.0;
            controller.on_loop(&mut platform);
        }

        assert_eq!(controller.state().iteration_count(), 0);
    }

    #[test]
    fn drag_pans_only_while_left_button_held() {
        let (mut controller, _platform) = started();
        let scale = controller.state().viewport.screen_to_world_scale();

        controller.on_mouse_event(MouseEvent::Move {
            x: 100.0,
            y: 100.0,
            left_button: false,
            right_button: false,
        });
        assert_eq!(controller.state().viewport.left(), -2.0);

        controller.on_mouse_event(MouseEvent::Move {
            x: 110.0,
            y: 95.0,
            left_button: true,
            right_button: false,
        });

        let viewport = controller.state().viewport;
        assert!((viewport.left() - (-2.0 - 10.0 * scale)).abs() < 1e-12);
        assert!((viewport.bottom() - (-1.0 - 5.0 * scale)).abs() < 1e-12);
        assert_eq!(controller.state().cursor.position().x, 110.0);
    }

    #[test]
    fn wheel_zooms_about_cursor() {
        let (mut controller, _platform) = started();
        controller.on_mouse_event(MouseEvent::Move {
            x: 540.0,
            y: 360.0,
            left_button: false,
            right_button: false,
        });

        controller.on_mouse_event(MouseEvent::Wheel { toward_user: true });

        let viewport = controller.state().viewport;
        assert!((viewport.width() - 3.0 / 1.1).abs() < 1e-12);
        assert!((viewport.height() - 2.0 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn redraw_publishes_view_and_iterations() {
        let (controller, mut platform) = started();

        controller.on_redraw(&mut platform);

        assert!(platform.floats.iter().any(|(name, _)| name == SCALE_UNIFORM));
        assert!(
            platform
                .floats
                .iter()
                .any(|(name, value)| name == WORLD_LEFT_UNIFORM && *value == -2.0)
        );
        assert_eq!(
            platform.ints,
            vec![(ITERATION_COUNT_UNIFORM.to_string(), 1024)]
        );
    }

    #[test]
    fn resize_keeps_world_rectangle() {
        let (mut controller, _platform) = started();

        controller.on_resize(WindowDimensions::new(540, 720));

        let viewport = controller.state().viewport;
        assert_eq!(viewport.width(), 3.0);
        assert!((viewport.screen_to_world_scale() - 3.0 / 540.0).abs() < 1e-12);
    }

    #[test]
    fn ticks_update_loop_and_idle_times() {
        let (mut controller, _platform) = started();

        controller.on_tick(FrameTick::Idle {
            update_ms: 1.5,
            idle_ms: 4.5,
        });

        let timings = controller.state().timings;
        assert_eq!(timings.update_ms, 1.5);
        assert_eq!(timings.idle_ms, 4.5);
        assert_eq!(timings.frame_time_ms, 0.0);

        controller.on_tick(FrameTick::Frame {
            update_ms: 2.0,
            idle_ms: 0.0,
            frame_time_ms: 8.0,
        });

        let timings = controller.state().timings;
        assert_eq!(timings.update_ms, 2.0);
        assert_eq!(timings.idle_ms, 0.0);
        assert_eq!(timings.frame_time_ms, 8.0);
    }

    #[test]
    fn exit_forgets_held_keys() {
        let (mut controller, mut platform) = started();
        controller.on_key_event(TrackedKey::UpArrow, true);
        controller.on_loop(&mut platform);

        controller.on_exit();

        assert!(!controller.state().input.is_key_down(TrackedKey::UpArrow));
    }
}
