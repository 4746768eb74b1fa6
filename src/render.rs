use ascii_scene_core::{
    build_text_mesh, AsciiEffectKey, Camera, KeyedSlot, MeshData, TextStyle, TEXT_DEPTH,
    TEXT_SIZE, TEXT_STRING,
};
use glam::Mat4;
use web_sys as web;

mod ascii;
mod atlas;
mod helpers;
mod scene;
mod targets;
use ascii::{AsciiEffect, AsciiPipeline};
use scene::{GpuMesh, ScenePipeline, SceneUniforms};
use targets::RenderTargets;

/// What the scene pass should draw this frame.
pub enum SceneMesh<'m> {
    Text,
    /// A loaded asset, identified by name and cache generation.
    Asset {
        asset: &'m str,
        generation: u64,
        data: &'m MeshData,
    },
    /// Asset still loading or failed: draw nothing.
    None,
}

pub struct FrameParams<'m> {
    pub camera: Camera,
    pub model_matrix: Mat4,
    pub mesh: SceneMesh<'m>,
    pub ascii: &'m AsciiEffectKey,
    pub css_size: (f32, f32),
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    scene: ScenePipeline,
    text_mesh: GpuMesh,
    asset_mesh: KeyedSlot<(String, u64), GpuMesh>,

    ascii_pipeline: AsciiPipeline,
    ascii: KeyedSlot<AsciiEffectKey, AsciiEffect>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits: older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);
        let scene = ScenePipeline::new(&device);
        let text = build_text_mesh(
            TEXT_STRING,
            TextStyle {
                size: TEXT_SIZE,
                depth: TEXT_DEPTH,
                color: [1.0, 1.0, 1.0, 1.0],
            },
        );
        let text_mesh = GpuMesh::upload(&device, "text_mesh", &text);
        let ascii_pipeline = AsciiPipeline::new(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            text_mesh,
            asset_mesh: KeyedSlot::new(),
            ascii_pipeline,
            ascii: KeyedSlot::new(),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            if let Some(effect) = self.ascii.get_mut() {
                effect.rebind(&self.device, &self.ascii_pipeline, &self.targets.color_view);
            }
        }
    }

    pub fn render(&mut self, params: &FrameParams<'_>) -> anyhow::Result<()> {
        let device = &self.device;
        let queue = &self.queue;
        let targets = &self.targets;
        let ascii_pipeline = &self.ascii_pipeline;
        let effect = self.ascii.get_or_rebuild(params.ascii, |key| {
            AsciiEffect::build(device, queue, ascii_pipeline, key, &targets.color_view)
        })?;
        let (css_w, css_h) = params.css_size;
        effect.set_viewport(queue, css_w, css_h);

        let mesh = match params.mesh {
            SceneMesh::Text => {
                // release the previous asset's buffers once it is off screen
                self.asset_mesh.clear();
                Some(&self.text_mesh)
            }
            SceneMesh::Asset {
                asset,
                generation,
                data,
            } => {
                let key = (asset.to_string(), generation);
                let uploaded = self.asset_mesh.get_or_rebuild(&key, |(name, _)| {
                    log::info!("[gpu] uploading {} ({} triangles)", name, data.triangle_count());
                    Ok::<_, std::convert::Infallible>(GpuMesh::upload(device, name, data))
                });
                match uploaded {
                    Ok(m) => Some(&*m),
                    Err(never) => match never {},
                }
            }
            SceneMesh::None => {
                self.asset_mesh.clear();
                None
            }
        };

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });

        let uniforms = SceneUniforms::new(&params.camera, params.model_matrix);
        self.scene.draw(
            &mut encoder,
            queue,
            &targets.color_view,
            &targets.depth_view,
            &uniforms,
            mesh,
        );

        helpers::blit(
            &mut encoder,
            "ascii_pass",
            &view,
            effect.clear_color(),
            ascii_pipeline.pipeline(),
            effect.bind_group(),
        );

        queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        let (w, h) = self.targets.size();
        w as f32 / h.max(1) as f32
    }
}
