#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseEvent {
    /// Cursor position in screen pixels plus the button levels at the time of the move.
    Move {
        x: f64,
        y: f64,
        left_button: bool,
        right_button: bool,
    },
    /// One wheel notch. Only the direction is reported, never a magnitude.
    Wheel { toward_user: bool },
}
