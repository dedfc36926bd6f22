use clap::Parser;

use crate::controllers::explorer::ExplorerConfig;
use crate::core::data::window_dimensions::WindowDimensions;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gpudbrot", about = "Real-time GPU Mandelbrot explorer")]
pub struct GuiArgs {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Wait for vertical sync when presenting
    #[arg(long)]
    pub vsync: bool,
}

impl GuiArgs {
    #[must_use]
    pub fn into_config(self) -> ExplorerConfig {
        ExplorerConfig {
            window: WindowDimensions::new(self.width, self.height),
            vsync: self.vsync,
            ..ExplorerConfig::default()
        }
    }
}
