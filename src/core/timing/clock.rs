use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// Monotonic millisecond time source the frame scheduler paces against.
pub trait Clock {
    /// Milliseconds since the clock was started.
    fn now_ms(&self) -> f64;

    /// Blocks the calling thread. Resolution is only guaranteed to the millisecond.
    fn sleep_ms(&self, duration_ms: f64);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn sleep_ms(&self, duration_ms: f64) {
        (**self).sleep_ms(duration_ms);
    }
}

/// Wall clock anchored at construction. Copies share the same origin.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn sleep_ms(&self, duration_ms: f64) {
        if duration_ms.is_finite() && duration_ms > 0.0 {
            thread::sleep(Duration::from_secs_f64(duration_ms / 1000.0));
        }
    }
}

/// Hand-driven clock: time only moves through [`ManualClock::advance`] and `sleep_ms`.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<f64>,
    slept_ms: Cell<f64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration_ms: f64) {
        self.now_ms.set(self.now_ms.get() + duration_ms);
    }

    /// Total time spent in `sleep_ms` so far.
    #[must_use]
    pub fn slept_ms(&self) -> f64 {
        self.slept_ms.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    fn sleep_ms(&self, duration_ms: f64) {
        if duration_ms > 0.0 {
            self.advance(duration_ms);
            self.slept_ms.set(self.slept_ms.get() + duration_ms);
        }
    }
}
