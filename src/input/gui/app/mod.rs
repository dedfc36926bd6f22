pub mod gui_app;
pub mod overlay;
pub mod platform;
pub mod translate;

pub use gui_app::GuiApp;
