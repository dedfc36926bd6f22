use thiserror::Error;

use crate::controllers::explorer::config::ShaderStage;
use crate::core::data::viewport::ViewportError;
use crate::storage::load_file::LoadFileError;

/// Failures reported by a [`Platform`](crate::controllers::explorer::ports::Platform).
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    FileLoad(#[from] LoadFileError),
    #[error("{stage} shader failed to compile: {message}")]
    ShaderCompile { stage: ShaderStage, message: String },
    #[error("shader program failed to link: {message}")]
    ShaderLink { message: String },
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to load the startup shader program")]
    StartupShader(#[source] PlatformError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
