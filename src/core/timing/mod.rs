pub mod clock;
pub mod frame_scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_scheduler::{
    FrameScheduler, FrameTarget, FrameTick, Iteration, LoopTimings, PacingStrategy,
};
