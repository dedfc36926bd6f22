pub mod run_gui;

pub use run_gui::{RunGuiCommand, RunGuiError};
