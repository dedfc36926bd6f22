use std::fmt;
use std::path::PathBuf;

use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::params::debouncer::{DEFAULT_COOLDOWN_MS, DEFAULT_ITERATION_COUNT};
use crate::core::timing::frame_scheduler::{FrameTarget, PacingStrategy};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Source files of the shader pair reloaded on Shift release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("shaders/vertex.wgsl"),
            fragment: PathBuf::from("shaders/fragment.wgsl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub window: WindowDimensions,
    pub vsync: bool,
    pub frame_target: FrameTarget,
    pub pacing: PacingStrategy,
    pub iteration_cooldown_ms: f64,
    pub initial_iterations: i32,
    pub shaders: ShaderPaths,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            window: WindowDimensions::default(),
            vsync: false,
            frame_target: FrameTarget::Uncapped,
            pacing: PacingStrategy::FrameBoundary,
            iteration_cooldown_ms: DEFAULT_COOLDOWN_MS,
            initial_iterations: DEFAULT_ITERATION_COUNT,
            shaders: ShaderPaths::default(),
        }
    }
}
