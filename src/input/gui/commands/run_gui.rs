use thiserror::Error;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::{ExplorerConfig, ExplorerController, ExplorerError};
use crate::input::gui::app::GuiApp;
use crate::presenters::gpu::{GpuPresenter, PresenterError};

#[derive(Debug, Error)]
pub enum RunGuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Presenter(#[from] PresenterError),
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(&self) -> Result<(), RunGuiError> {
        let event_loop = EventLoop::new()?;
        let controller = ExplorerController::new(self.config.clone())?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(controller.name())
                .with_inner_size(PhysicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter = GpuPresenter::new(window, self.config.vsync)?;
        let mut app = GuiApp::new(window, &event_loop, controller, presenter);

        app.start()?;
        app.run(event_loop)?;

        Ok(())
    }
}
