/// Minimum time between two accepted iteration-count changes.
pub const DEFAULT_COOLDOWN_MS: f64 = 20.0;

pub const DEFAULT_ITERATION_COUNT: i32 = 1024;

/// Rate-limits iteration-count changes driven by held arrow keys.
///
/// Holding a key moves the count by at most one step per cooldown interval instead of
/// one step per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationDebouncer {
    count: i32,
    cooldown_ms: f64,
    last_change_ms: f64,
}

impl IterationDebouncer {
    #[must_use]
    pub fn new(initial_count: i32, cooldown_ms: f64) -> Self {
        Self {
            count: initial_count.max(0),
            cooldown_ms: if cooldown_ms.is_finite() {
                cooldown_ms.max(0.0)
            } else {
                DEFAULT_COOLDOWN_MS
            },
            last_change_ms: 0.0,
        }
    }

    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    #[must_use]
    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    #[must_use]
    pub fn last_change_ms(&self) -> f64 {
        self.last_change_ms
    }

    /// Feeds one poll cycle of arrow-key levels. Returns the new count when a change
    /// was applied.
    pub fn update(&mut self, now_ms: f64, increase: bool, decrease: bool) -> Option<i32> {
        let candidate = self
            .count
            .saturating_add(i32::from(increase))
            .saturating_sub(i32::from(decrease))
            .max(0);

        if candidate == self.count || now_ms - self.last_change_ms < self.cooldown_ms {
            return None;
        }

        self.count = candidate;
        self.last_change_ms = now_ms;

        Some(candidate)
    }
}

impl Default for IterationDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATION_COUNT, DEFAULT_COOLDOWN_MS)
    }
}
