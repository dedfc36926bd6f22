//! Drives the explorer through whole sessions against a recording platform.

use std::collections::HashMap;
use std::path::PathBuf;

use gpudbrot::core::data::window_dimensions::WindowDimensions;
use gpudbrot::core::input::{MouseEvent, TrackedKey};
use gpudbrot::core::memory::ScratchArena;
use gpudbrot::core::timing::{Clock, FrameScheduler, FrameTarget, ManualClock, PacingStrategy};
use gpudbrot::storage::{load_file_into, source_text};
use gpudbrot::{
    ExplorerConfig, ExplorerController, ExplorerError, Platform, PlatformError, ShaderPaths,
    ShaderStage, ShaderUniforms,
};

/// Loads shader sources through the scratch arena like the windowed backend does, and
/// records every uniform write.
struct RecordingPlatform<'c> {
    clock: &'c ManualClock,
    scratch: ScratchArena,
    window: WindowDimensions,
    frame_time_ms: f64,
    redraw_requested: bool,
    redraws: usize,
    loaded_programs: usize,
    floats: HashMap<String, f32>,
    ints: HashMap<String, i32>,
    palette_uploads: usize,
}

impl<'c> RecordingPlatform<'c> {
    fn new(clock: &'c ManualClock, window: WindowDimensions) -> Self {
        Self {
            clock,
            scratch: ScratchArena::default(),
            window,
            frame_time_ms: 0.0,
            redraw_requested: false,
            redraws: 0,
            loaded_programs: 0,
            floats: HashMap::new(),
            ints: HashMap::new(),
            palette_uploads: 0,
        }
    }
}

impl ShaderUniforms for RecordingPlatform<'_> {
    fn set_uniform_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_uniform_int(&mut self, name: &str, value: i32) {
        self.ints.insert(name.to_string(), value);
    }

    fn set_uniform_vec3(&mut self, name: &str, values: &[[f32; 3]]) {
        assert_eq!(name, "u_ColorPalette");
        assert_eq!(values.len(), 16);
        self.palette_uploads += 1;
    }
}

impl Platform for RecordingPlatform<'_> {
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

        if !vertex_source.contains("fn vs_main") {
            return Err(PlatformError::ShaderCompile {
                stage: ShaderStage::Vertex,
                message: "missing entry point vs_main".to_string(),
            });
        }

        if !fragment_source.contains("fn fs_main") {
            return Err(PlatformError::ShaderCompile {
                stage: ShaderStage::Fragment,
                message: "missing entry point fs_main".to_string(),
            });
        }

        self.loaded_programs += 1;
        Ok(())
    }
}

fn run_frame(
    controller: &mut ExplorerController,
    platform: &mut RecordingPlatform<'_>,
    scheduler: &mut FrameScheduler<&ManualClock>,
    clock: &ManualClock,
    update_cost_ms: f64,
) {
    let iteration = scheduler.run_iteration(|| {
        controller.on_loop(platform);
        clock.advance(update_cost_ms);

        if platform.redraw_requested {
            platform.redraw_requested = false;
            controller.on_redraw(platform);
            platform.redraws += 1;
        }
    });

    platform.frame_time_ms = scheduler.frame_time_ms();
    controller.on_tick(iteration.tick);
}

#[test]
fn session_pans_zooms_and_publishes() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::new(1280, 720));
    let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
    let mut scheduler =
        FrameScheduler::new(&clock, FrameTarget::Uncapped, PacingStrategy::FrameBoundary);

    controller.on_entry(&mut platform).unwrap();
    assert_eq!(platform.loaded_programs, 1);
    assert_eq!(platform.palette_uploads, 1);

    // Zoom in at the window centre
    controller.on_mouse_event(MouseEvent::Move {
        x: 640.0,
        y: 360.0,
        left_button: false,
        right_button: false,
    });
    controller.on_mouse_event(MouseEvent::Wheel { toward_user: true });
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);

    let viewport = controller.state().viewport;
    assert!((viewport.width() - 3.0 / 1.1).abs() < 1e-12);
    assert!((viewport.left() - (-0.5 - 1.5 / 1.1)).abs() < 1e-12);
    assert_eq!(platform.floats["u_WorldLeft"], viewport.left() as f32);
    assert_eq!(
        platform.floats["u_ScreenToWorldScaleFactor"],
        (viewport.width() / 1280.0) as f32
    );

    // Drag right by 64 pixels
    controller.on_mouse_event(MouseEvent::Move {
        x: 704.0,
        y: 360.0,
        left_button: true,
        right_button: false,
    });
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);

    let panned = controller.state().viewport;
    let scale = viewport.screen_to_world_scale();
    assert!((panned.left() - (viewport.left() - 64.0 * scale)).abs() < 1e-12);
    assert_eq!(panned.bottom(), viewport.bottom());
    assert_eq!(platform.redraws, 2);
    assert_eq!(platform.ints["u_IterationCount"], 1024);
}

#[test]
fn held_arrow_keys_are_paced_by_the_debouncer() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::default());
    let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
    let mut scheduler = FrameScheduler::new(
        &clock,
        FrameTarget::Fixed { frame_time_ms: 5.0 },
        PacingStrategy::FrameBoundary,
    );
    controller.on_entry(&mut platform).unwrap();

    controller.on_key_event(TrackedKey::UpArrow, true);
    while clock.now_ms() < 100.0 {
        run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);
    }
    controller.on_key_event(TrackedKey::UpArrow, false);
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);

    let raised = controller.state().iteration_count();
    assert!(raised > 1024);
    assert!(raised <= 1024 + 5);
    assert_eq!(platform.ints["u_IterationCount"], raised);

    controller.on_key_event(TrackedKey::DownArrow, true);
    while clock.now_ms() < 5000.0 {
        run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);
    }

    assert!(controller.state().iteration_count() < raised);
    assert!(controller.state().iteration_count() >= 0);
}

#[test]
fn scheduler_reports_measured_frame_time() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::default());
    let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
    let mut scheduler = FrameScheduler::new(
        &clock,
        FrameTarget::Fixed { frame_time_ms: 10.0 },
        PacingStrategy::FrameBoundary,
    );
    controller.on_entry(&mut platform).unwrap();

    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 2.0);
    assert_eq!(platform.frame_time_ms(), 0.0);
    assert_eq!(clock.slept_ms(), 8.0);

    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 2.0);
    assert_eq!(platform.frame_time_ms(), 12.0);
}

#[test]
fn loop_and_idle_times_reach_controller_diagnostics() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::default());
    let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
    let mut scheduler = FrameScheduler::new(
        &clock,
        FrameTarget::Fixed { frame_time_ms: 10.0 },
        PacingStrategy::FrameBoundary,
    );
    controller.on_entry(&mut platform).unwrap();

    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 3.0);
    let timings = controller.state().timings;
    assert_eq!(timings.update_ms, 3.0);
    assert_eq!(timings.idle_ms, 7.0);
    assert_eq!(timings.frame_time_ms, 0.0);

    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);
    let timings = controller.state().timings;
    assert_eq!(timings.update_ms, 1.0);
    assert_eq!(timings.idle_ms, 0.0);
    assert_eq!(timings.frame_time_ms, 11.0);
}

#[test]
fn shift_release_reloads_shipped_shaders() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::default());
    let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
    let mut scheduler =
        FrameScheduler::new(&clock, FrameTarget::Uncapped, PacingStrategy::FrameBoundary);
    controller.on_entry(&mut platform).unwrap();

    controller.on_key_event(TrackedKey::Shift, true);
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);
    controller.on_key_event(TrackedKey::Shift, false);
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);
    run_frame(&mut controller, &mut platform, &mut scheduler, &clock, 1.0);

    assert_eq!(platform.loaded_programs, 2);
    assert_eq!(platform.palette_uploads, 2);
    assert_eq!(platform.scratch.used(), 0);
}

#[test]
fn missing_shader_at_startup_is_fatal() {
    let clock = ManualClock::new();
    let mut platform = RecordingPlatform::new(&clock, WindowDimensions::default());
    let config = ExplorerConfig {
        shaders: ShaderPaths {
            vertex: PathBuf::from("shaders/vertex.wgsl"),
            fragment: PathBuf::from("shaders/does-not-exist.wgsl"),
        },
        ..ExplorerConfig::default()
    };
    let mut controller = ExplorerController::new(config).unwrap();

    let error = controller.on_entry(&mut platform).unwrap_err();

    assert!(matches!(
        error,
        ExplorerError::StartupShader(PlatformError::FileLoad(_))
    ));
    assert_eq!(platform.loaded_programs, 0);
    assert_eq!(platform.scratch.used(), 0);
}
