#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Last cursor position seen by the application, in screen pixels with the origin at
/// the top-left corner of the window.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub primary_held: bool,
}

impl CursorState {
    #[must_use]
    pub fn position(&self) -> ScreenPoint {
        ScreenPoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Moves the cursor and returns the screen-space delta from the previous position.
    pub fn move_to(&mut self, x: f64, y: f64, primary_held: bool) -> (f64, f64) {
        let delta = (x - self.x, y - self.y);

        self.x = x;
        self.y = y;
        self.primary_held = primary_held;

        delta
    }
}
