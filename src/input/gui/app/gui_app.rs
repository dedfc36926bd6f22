use log::error;
use winit::error::EventLoopError;
use winit::event::{ElementState, Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::platform::Platform;
use crate::controllers::explorer::ExplorerController;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::input::keys::TrackedKey;
use crate::core::timing::clock::SystemClock;
use crate::core::timing::frame_scheduler::FrameScheduler;
use crate::input::gui::app::overlay::{Overlay, OverlayStats};
use crate::input::gui::app::platform::GuiPlatform;
use crate::input::gui::app::translate::{MouseButtons, tracked_key, wheel_event};
use crate::presenters::gpu::{GpuPresenter, PresenterError};

pub struct GuiApp {
    window: &'static Window,
    controller: ExplorerController,
    platform: GuiPlatform,
    scheduler: FrameScheduler<SystemClock>,
    overlay: Overlay,
    buttons: MouseButtons,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: ExplorerController,
        presenter: GpuPresenter,
    ) -> Self {
        let size = window.inner_size();
        let clock = SystemClock::start();
        let config = controller.config();
        let scheduler = FrameScheduler::new(clock, config.frame_target, config.pacing);

        Self {
            window,
            platform: GuiPlatform::new(
                presenter,
                clock,
                WindowDimensions::new(size.width, size.height),
            ),
            controller,
            scheduler,
            overlay: Overlay::new(window, event_loop),
            buttons: MouseButtons::default(),
        }
    }

    /// Loads the startup shader program.
    pub fn start(&mut self) -> Result<(), ExplorerError> {
        self.controller.on_entry(&mut self.platform)
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::NewEvents(StartCause::Init) => {
                elwt.set_control_flow(ControlFlow::Poll);
            }
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                if matches!(event, WindowEvent::CloseRequested) {
                    elwt.exit();
                    return;
                }

                if let Err(err) = self.handle_window_event(&event) {
                    error!("{err}");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if let Err(err) = self.run_iteration() {
                    error!("render failed: {err}");
                    elwt.exit();
                }
            }
            Event::LoopExiting => self.controller.on_exit(),
            _ => {}
        })
    }

    /// One paced pass of the main loop: input latch, state update and, when requested,
    /// publish + present.
    pub fn run_iteration(&mut self) -> Result<(), PresenterError> {
        let window = self.window;
        let Self {
            controller,
            platform,
            scheduler,
            overlay,
            ..
        } = self;

        let iteration = scheduler.run_iteration(|| {
            controller.on_loop(platform);

            if !platform.take_redraw_request() {
                return Ok(());
            }

            controller.on_redraw(platform);

            let stats = OverlayStats {
                timings: controller.state().timings,
                iterations: controller.state().iteration_count(),
                viewport: controller.state().viewport,
                window: platform.window_dimensions(),
            };
            let egui_output = overlay.run(window, &stats);

            platform.present(egui_output, overlay.context())
        });

        self.platform.record_frame_time(self.scheduler.frame_time_ms());
        self.controller.on_tick(iteration.tick);

        iteration.output
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), PresenterError> {
        let egui_consumed = self.overlay.handle_window_event(self.window, event);

        match event {
            WindowEvent::Resized(size) => {
                self.resize(WindowDimensions::new(size.width, size.height))?;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.overlay.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(WindowDimensions::new(size.width, size.height))?;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = tracked_key(event.physical_key) {
                    self.controller
                        .on_key_event(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.buttons.handle_button_event(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Drags that start on the overlay move the cursor without panning
                let buttons = if egui_consumed {
                    MouseButtons::default()
                } else {
                    self.buttons
                };

                self.controller
                    .on_mouse_event(buttons.move_event(position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                if let Some(wheel) = wheel_event(*delta) {
                    self.controller.on_mouse_event(wheel);
                }
            }
            WindowEvent::Focused(false) => {
                self.buttons.reset();
                for key in TrackedKey::ALL {
                    self.controller.on_key_event(key, false);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn resize(&mut self, window: WindowDimensions) -> Result<(), PresenterError> {
        self.platform.resize(window)?;
        self.controller.on_resize(window);

        Ok(())
    }
}
