//! wgpu presenter: a full-window quad shaded by the Mandelbrot fragment program.

pub mod presenter;
pub mod shader_program;
pub mod uniforms;

pub use presenter::{GpuPresenter, PresenterError};
