use crate::controllers::explorer::config::ExplorerConfig;
use crate::core::data::cursor::CursorState;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::input::tracker::InputStateTracker;
use crate::core::params::debouncer::IterationDebouncer;
use crate::core::timing::frame_scheduler::LoopTimings;

/// Everything the explorer mutates between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    pub viewport: Viewport,
    pub cursor: CursorState,
    pub input: InputStateTracker,
    pub iterations: IterationDebouncer,
    pub window: WindowDimensions,
    pub timings: LoopTimings,
}

impl ExplorerState {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ViewportError> {
        Ok(Self {
            viewport: Viewport::initial(config.window)?,
            cursor: CursorState::default(),
            input: InputStateTracker::default(),
            iterations: IterationDebouncer::new(
                config.initial_iterations,
                config.iteration_cooldown_ms,
            ),
            window: config.window,
            timings: LoopTimings::default(),
        })
    }

    #[must_use]
    pub fn iteration_count(&self) -> i32 {
        self.iterations.count()
    }
}
