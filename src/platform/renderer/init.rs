use std::sync::Arc;

use log::info;
use wgpu::*;
use winit::window::Window;

use super::RenderError;

pub(super) struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

pub(super) async fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext, RenderError> {
    let instance = Instance::default();

    let size = window.inner_size();
    let surface = instance
        .create_surface(window)
        .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(RenderError::AdapterUnavailable)?;

    info!(target: "platform::render", "Using adapter: {}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| RenderError::DeviceRequest(e.to_string()))?;

    // Colors are raw 8-bit values, so a linear format is preferred.
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or_else(|| RenderError::SurfaceCreation("no compatible surface format".into()))?;

    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
    })
}
