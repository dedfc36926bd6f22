pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
pub mod storage;

pub use controllers::explorer::{
    APP_NAME, ExplorerConfig, ExplorerController, ExplorerError, ExplorerState, Platform,
    PlatformError, ShaderPaths, ShaderStage, ShaderUniforms,
};

#[cfg(feature = "gui")]
pub use input::gui::{GuiArgs, RunGuiCommand, RunGuiError};
