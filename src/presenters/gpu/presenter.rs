use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::wgpu::util::DeviceExt;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu};
use thiserror::Error;
use winit::window::Window;

use crate::controllers::explorer::errors::PlatformError;
use crate::controllers::explorer::ports::platform::ShaderUniforms;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::presenters::gpu::shader_program::{QUAD_INDICES, QUAD_VERTICES, ShaderProgram};
use crate::presenters::gpu::uniforms::ViewUniforms;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("GPU surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize the GPU surface: {0}")]
    Resize(#[from] pixels::TextureError),
}

/// Draws the fractal quad and the egui overlay into the window surface.
///
/// `pixels` owns the device and the surface; its CPU framebuffer is unused (1x1) because
/// every frame comes from the fragment shader.
pub struct GpuPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    program: Option<ShaderProgram>,
    uniforms: ViewUniforms,
    uniform_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    window: WindowDimensions,
}

impl GpuPresenter {
    pub fn new(window: &'static Window, vsync: bool) -> Result<Self, PresenterError> {
        let size = window.inner_size();
        let dimensions = WindowDimensions::new(size.width, size.height);
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .enable_vsync(vsync)
            .build()?;

        let device = pixels.device();
        let uniforms = ViewUniforms::new(dimensions);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("view-uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("view-uniforms-layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("view-uniforms"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad-vertices"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad-indices"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let egui_renderer = EguiRenderer::new(
            device,
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            program: None,
            uniforms,
            uniform_buffer,
            bind_group_layout,
            bind_group,
            vertex_buffer,
            index_buffer,
            window: dimensions,
        })
    }

    /// Swaps in a new program. The current one stays bound if the new pair fails.
    pub fn load_program(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<(), PlatformError> {
        let program = ShaderProgram::build(
            self.pixels.device(),
            self.pixels.render_texture_format(),
            &self.bind_group_layout,
            vertex_source,
            fragment_source,
        )?;

        self.program = Some(program);
        Ok(())
    }

    pub fn resize(&mut self, window: WindowDimensions) -> Result<(), PresenterError> {
        if window.is_empty() {
            return Ok(());
        }

        self.pixels.resize_surface(window.width, window.height)?;
        self.window = window;
        self.uniforms.set_screen_size(window);

        Ok(())
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), PresenterError> {
        if self.window.is_empty() {
            return Ok(());
        }

        self.pixels
            .queue()
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        let Self {
            pixels,
            egui_renderer,
            program,
            bind_group,
            vertex_buffer,
            index_buffer,
            window,
            ..
        } = self;

        pixels.render_with(|encoder, render_target, context| {
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("mandelbrot"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                if let Some(program) = program.as_ref() {
                    render_pass.set_pipeline(program.pipeline());
                    render_pass.set_bind_group(0, bind_group, &[]);
                    render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
                }
            }

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [window.width, window.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Overlay on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}

impl ShaderUniforms for GpuPresenter {
    fn set_uniform_float(&mut self, name: &str, value: f32) {
        if !self.uniforms.set_float(name, value) {
            warn!("shader has no float uniform named {name}");
        }
    }

    fn set_uniform_int(&mut self, name: &str, value: i32) {
        if !self.uniforms.set_int(name, value) {
            warn!("shader has no int uniform named {name}");
        }
    }

    fn set_uniform_vec3(&mut self, name: &str, values: &[[f32; 3]]) {
        if !self.uniforms.set_vec3(name, values) {
            warn!("shader has no vec3 array uniform named {name}");
        }
    }
}
