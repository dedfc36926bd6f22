use crate::core::input::keys::{KeyState, TrackedKey};

/// Converts raw key events into per-poll level and release-edge signals.
///
/// Key events only record the latest hardware level. [`InputStateTracker::poll`] is
/// called once per loop iteration and latches that level, so a release edge is visible
/// for exactly one iteration no matter how many events arrived in between.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputStateTracker {
    keys: [KeyState; TrackedKey::COUNT],
    hardware: [bool; TrackedKey::COUNT],
}

impl InputStateTracker {
    /// Records the hardware level reported by the platform. Key repeats keep the key
    /// down.
    pub fn handle_key_event(&mut self, key: TrackedKey, pressed: bool) {
        self.hardware[key.index()] = pressed;
    }

    pub fn poll(&mut self) {
        for key in TrackedKey::ALL {
            let index = key.index();
            self.keys[index].advance(self.hardware[index]);
        }
    }

    #[must_use]
    pub fn is_key_down(&self, key: TrackedKey) -> bool {
        self.keys[key.index()].is_down
    }

    #[must_use]
    pub fn is_key_released_edge(&self, key: TrackedKey) -> bool {
        self.keys[key.index()].released()
    }

    /// Forgets every key, e.g. when the window loses focus mid-press.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
