use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::input::keys::TrackedKey;
use crate::core::input::mouse::MouseEvent;

#[must_use]
pub fn tracked_key(key: PhysicalKey) -> Option<TrackedKey> {
    match key {
        PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight) => Some(TrackedKey::Shift),
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(TrackedKey::UpArrow),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(TrackedKey::DownArrow),
        _ => None,
    }
}

/// Collapses a scroll delta to one wheel notch. Positive `y` scrolls away from the user.
#[must_use]
pub fn wheel_event(delta: MouseScrollDelta) -> Option<MouseEvent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y == 0.0 {
        None
    } else {
        Some(MouseEvent::Wheel {
            toward_user: y < 0.0,
        })
    }
}

/// Button levels carried into every cursor move.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtons {
    left_held: bool,
    right_held: bool,
}

impl MouseButtons {
    pub fn handle_button_event(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.left_held = pressed,
            MouseButton::Right => self.right_held = pressed,
            _ => {}
        }
    }

    #[must_use]
    pub fn move_event(&self, x: f64, y: f64) -> MouseEvent {
        MouseEvent::Move {
            x,
            y,
            left_button: self.left_held,
            right_button: self.right_held,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
