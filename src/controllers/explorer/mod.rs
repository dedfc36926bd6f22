//! Explorer controller: the application layer between a platform backend and the
//! navigation core.
//!
//! # Architecture
//!
//! - **Input**: key, mouse and resize callbacks pushed by the backend
//! - **Output**: the [`Platform`] and [`ShaderUniforms`] ports
//! - **Core**: viewport, input tracking and debouncing from `core/`

pub mod config;
mod controller;
pub mod errors;
pub mod ports;
pub mod publisher;
pub mod state;

pub use config::{ExplorerConfig, ShaderPaths, ShaderStage};
pub use controller::{APP_NAME, ExplorerController};
pub use errors::{ExplorerError, PlatformError};
pub use ports::{Platform, ShaderUniforms};
pub use state::ExplorerState;
