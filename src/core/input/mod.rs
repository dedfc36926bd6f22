pub mod keys;
pub mod mouse;
pub mod tracker;

pub use keys::{KeyState, TrackedKey};
pub use mouse::MouseEvent;
pub use tracker::InputStateTracker;
