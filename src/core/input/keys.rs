/// Keys the explorer reacts to. Platform backends translate their own key codes into
/// this set and drop everything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrackedKey {
    /// Releasing shift reloads the shader program.
    Shift,
    UpArrow,
    DownArrow,
}

impl TrackedKey {
    pub const COUNT: usize = 3;

    pub const ALL: [TrackedKey; Self::COUNT] = [Self::Shift, Self::UpArrow, Self::DownArrow];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Shift => 0,
            Self::UpArrow => 1,
            Self::DownArrow => 2,
        }
    }
}

/// Level history of one key across two consecutive polls.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct KeyState {
    pub was_down: bool,
    pub is_down: bool,
}

impl KeyState {
    pub fn advance(&mut self, hardware_down: bool) {
        self.was_down = self.is_down;
        self.is_down = hardware_down;
    }

    #[must_use]
    pub fn released(&self) -> bool {
        self.was_down && !self.is_down
    }
}
