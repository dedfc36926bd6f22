/// Size of the window's client area in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A minimized window reports a zero extent on at least one axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for WindowDimensions {
    fn default() -> Self {
        Self::new(1080, 720)
    }
}
