//! Port definitions for the explorer controller.

pub mod platform;

pub use platform::{Platform, ShaderUniforms};
