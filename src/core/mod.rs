//! Platform-independent navigation and frame-pacing logic.

pub mod data;
pub mod input;
pub mod memory;
pub mod params;
pub mod timing;
