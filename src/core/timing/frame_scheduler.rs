use crate::core::timing::clock::Clock;

/// Desired time between frame boundaries.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FrameTarget {
    /// Every iteration ends a frame and nothing sleeps.
    #[default]
    Uncapped,
    Fixed { frame_time_ms: f64 },
}

impl FrameTarget {
    #[must_use]
    pub fn from_fps(frames_per_second: f64) -> Self {
        if frames_per_second.is_finite() && frames_per_second > 0.0 {
            Self::Fixed {
                frame_time_ms: 1000.0 / frames_per_second,
            }
        } else {
            Self::Uncapped
        }
    }

    #[must_use]
    pub fn frame_time_ms(&self) -> f64 {
        match *self {
            Self::Uncapped => 0.0,
            Self::Fixed { frame_time_ms } if frame_time_ms.is_finite() => frame_time_ms.max(0.0),
            Self::Fixed { .. } => 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PacingStrategy {
    /// Iterations repeat until the frame boundary is reached. Iterations that land
    /// short of the target sleep off the remainder and do not end a frame.
    #[default]
    FrameBoundary,
    /// Every iteration ends a frame. A short iteration sleeps up to the target (plus
    /// one millisecond of slack) in place and the sleep counts toward the frame time.
    Compensated,
}

/// Outcome of one scheduler iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameTick {
    Idle { update_ms: f64, idle_ms: f64 },
    Frame {
        update_ms: f64,
        idle_ms: f64,
        frame_time_ms: f64,
    },
}

impl FrameTick {
    #[must_use]
    pub fn update_ms(&self) -> f64 {
        match *self {
            Self::Idle { update_ms, .. } | Self::Frame { update_ms, .. } => update_ms,
        }
    }

    /// Time slept during the iteration. Zero for frames closed without sleeping.
    #[must_use]
    pub fn idle_ms(&self) -> f64 {
        match *self {
            Self::Idle { idle_ms, .. } | Self::Frame { idle_ms, .. } => idle_ms,
        }
    }

    #[must_use]
    pub fn completed_frame(&self) -> Option<f64> {
        match *self {
            Self::Frame { frame_time_ms, .. } => Some(frame_time_ms),
            Self::Idle { .. } => None,
        }
    }
}

/// Most recent loop, idle and frame times, for diagnostics.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LoopTimings {
    pub update_ms: f64,
    pub idle_ms: f64,
    pub frame_time_ms: f64,
}

impl LoopTimings {
    /// Loop and idle times follow every tick. Frame time only changes when a frame
    /// closes.
    pub fn record(&mut self, tick: FrameTick) {
        self.update_ms = tick.update_ms();
        self.idle_ms = tick.idle_ms();

        if let Some(frame_time_ms) = tick.completed_frame() {
            self.frame_time_ms = frame_time_ms;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Iteration<T> {
    pub output: T,
    pub tick: FrameTick,
}

/// Paces a cooperative single-threaded main loop.
///
/// The scheduler never preempts the update step. It measures it, then either sleeps
/// toward the target or closes the frame and records how long it really took.
#[derive(Debug)]
pub struct FrameScheduler<C: Clock> {
    clock: C,
    target: FrameTarget,
    strategy: PacingStrategy,
    frame_start_ms: f64,
    frame_time_ms: f64,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(clock: C, target: FrameTarget, strategy: PacingStrategy) -> Self {
        let frame_start_ms = clock.now_ms();

        Self {
            clock,
            target,
            strategy,
            frame_start_ms,
            frame_time_ms: 0.0,
        }
    }

    /// Last measured frame duration. This is what actually happened, not the target.
    #[must_use]
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time_ms
    }

    #[must_use]
    pub fn target(&self) -> FrameTarget {
        self.target
    }

    pub fn set_target(&mut self, target: FrameTarget) {
        self.target = target;
    }

    pub fn run_iteration<T>(&mut self, update: impl FnOnce() -> T) -> Iteration<T> {
        match self.strategy {
            PacingStrategy::FrameBoundary => self.run_to_boundary(update),
            PacingStrategy::Compensated => self.run_compensated(update),
        }
    }

    fn run_to_boundary<T>(&mut self, update: impl FnOnce() -> T) -> Iteration<T> {
        let loop_start_ms = self.clock.now_ms();
        let output = update();
        let now_ms = self.clock.now_ms();
        let update_ms = now_ms - loop_start_ms;

        let target_ms = self.target.frame_time_ms();
        let elapsed_ms = now_ms - self.frame_start_ms;

        let tick = if elapsed_ms < target_ms {
            let idle_ms = target_ms - elapsed_ms;
            self.clock.sleep_ms(idle_ms);

            FrameTick::Idle { update_ms, idle_ms }
        } else {
            self.frame_time_ms = elapsed_ms;
            self.frame_start_ms = now_ms;

            FrameTick::Frame {
                update_ms,
                idle_ms: 0.0,
                frame_time_ms: elapsed_ms,
            }
        };

        Iteration { output, tick }
    }

    fn run_compensated<T>(&mut self, update: impl FnOnce() -> T) -> Iteration<T> {
        let loop_start_ms = self.clock.now_ms();
        let output = update();
        let now_ms = self.clock.now_ms();
        let update_ms = now_ms - loop_start_ms;

        let target_ms = self.target.frame_time_ms();
        let mut frame_time_ms = now_ms - self.frame_start_ms;
        let mut idle_ms = 0.0;

        // An uncapped target never sleeps, not even the one millisecond of slack
        if target_ms > 0.0 && frame_time_ms - 1.0 < target_ms {
            let sleep_start_ms = self.clock.now_ms();
            idle_ms = target_ms - frame_time_ms + 1.0;
            self.clock.sleep_ms(idle_ms);
            frame_time_ms += self.clock.now_ms() - sleep_start_ms;
        }

        self.frame_time_ms = frame_time_ms;
        self.frame_start_ms = self.clock.now_ms();

        Iteration {
            output,
            tick: FrameTick::Frame {
                update_ms,
                idle_ms,
                frame_time_ms,
            },
        }
    }
}
