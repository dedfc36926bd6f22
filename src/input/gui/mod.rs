//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! wgpu (through pixels) for rendering, and egui for the diagnostics overlay.

pub mod app;
pub mod args;
pub mod commands;

pub use args::GuiArgs;
pub use commands::{RunGuiCommand, RunGuiError};
