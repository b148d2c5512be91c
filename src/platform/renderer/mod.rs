//=========================================================================
// GPU Renderer
//=========================================================================
//
// `Renderer` backed by wgpu.
//
// Architecture:
// ```text
//   clear / draw_*  ──► Mesh (CPU triangles, clip space)
//   present()       ──► vertex buffer ──► one render pass ──► surface
// ```
//
// The clear color becomes the render pass load op; everything else is a
// single triangle list drawn in call order.
//
//=========================================================================

//=== Submodules ==========================================================

mod glyphs;
mod init;
mod mesh;
mod pipeline;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use wgpu::util::DeviceExt;
use wgpu::{
    Device, Queue, RenderPipeline, Surface, SurfaceConfiguration, SurfaceError,
};
use winit::window::Window;

//=== Internal Imports ====================================================

use crate::core::render::{Font, Renderer};
use crate::core::{Color, Rect, Vec2};

use mesh::Mesh;

//=== RenderError =========================================================

/// Failures of GPU setup and presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No adapter can drive the window surface.
    AdapterUnavailable,

    /// The adapter refused to open a device.
    DeviceRequest(String),

    /// The window surface could not be created or configured.
    SurfaceCreation(String),

    /// The GPU ran out of memory while acquiring a frame.
    OutOfMemory,

    /// Any other surface failure.
    Surface(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdapterUnavailable => write!(f, "No compatible graphics adapter found"),
            Self::DeviceRequest(e) => write!(f, "Device request failed: {}", e),
            Self::SurfaceCreation(e) => write!(f, "Surface creation failed: {}", e),
            Self::OutOfMemory => write!(f, "Out of GPU memory"),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

//=== GpuRenderer =========================================================

pub(crate) struct GpuRenderer {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    clear_color: Color,
    mesh: Mesh,
}

impl GpuRenderer {
    /// Opens a device for `window`. Drawing coordinates span `arena`
    /// regardless of the window's physical size.
    pub fn new(window: Arc<Window>, arena: Vec2) -> Result<Self, RenderError> {
        let context = futures::executor::block_on(init::init_wgpu(window))?;
        let pipeline = pipeline::create_pipeline(&context.device, context.config.format);

        info!(
            target: "platform::render",
            "Renderer ready: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            device: context.device,
            queue: context.queue,
            surface: context.surface,
            config: context.config,
            pipeline,
            clear_color: Color::BLACK,
            mesh: Mesh::new(arena),
        })
    }

    /// Reconfigures the surface for a new physical size. Zero sizes
    /// (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        debug!(target: "platform::render", "Surface resized to {}x{}", width, height);
    }

    fn clear_value(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color.to_f32_array();
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }

    fn encode_frame(&self, view: &wgpu::TextureView) -> wgpu::CommandBuffer {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let vertex_buffer = (!self.mesh.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Frame Vertex Buffer"),
                    contents: bytemuck::cast_slice(self.mesh.vertices()),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_value()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(buffer) = &vertex_buffer {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..self.mesh.vertices().len() as u32, 0..1);
            }
        }

        encoder.finish()
    }
}

impl Renderer for GpuRenderer {
    type Error = RenderError;

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.mesh.clear();
    }

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: i32) {
        self.mesh.push_circle(color, center, radius);
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        self.mesh.push_rect(color, rect);
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Vec2,
        font: Font,
        color: Color,
        background: Color,
    ) {
        self.mesh.push_text(content, position, font, color, background);
    }

    /// Lost and outdated surfaces are reconfigured and the frame skipped.
    fn present(&mut self) -> Result<(), RenderError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                warn!(target: "platform::render", "Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                self.mesh.clear();
                return Ok(());
            }
            Err(SurfaceError::Timeout) => {
                warn!(target: "platform::render", "Surface timeout, frame skipped");
                self.mesh.clear();
                return Ok(());
            }
            Err(SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Surface(e.to_string())),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let commands = self.encode_frame(&view);

        self.queue.submit(std::iter::once(commands));
        frame.present();
        self.mesh.clear();

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RenderError>();
    }

    #[test]
    fn render_error_display_format() {
        assert_eq!(
            RenderError::AdapterUnavailable.to_string(),
            "No compatible graphics adapter found"
        );
        assert_eq!(
            RenderError::DeviceRequest("limits".into()).to_string(),
            "Device request failed: limits"
        );
    }
}
