use super::atlas;
use super::helpers;
use ascii_scene_core::{AsciiEffectKey, CellGrid, Rgb};

pub static ASCII_WGSL: &str = include_str!("../../shaders/ascii.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct AsciiUniforms {
    grid: [f32; 2],
    ramp_len: f32,
    invert: f32,
    fg: [f32; 4],
    bg: [f32; 4],
}

/// Layout and pipeline shared by every effect instance.
pub(crate) struct AsciiPipeline {
    bgl: wgpu::BindGroupLayout,
    pipeline: wgpu::RenderPipeline,
    sampler: wgpu::Sampler,
    srgb_output: bool,
}

impl AsciiPipeline {
    pub(crate) fn new(device: &wgpu::Device, swap_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ascii_shader"),
            source: wgpu::ShaderSource::Wgsl(ASCII_WGSL.into()),
        });
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                multisampled: false,
                view_dimension: wgpu::TextureViewDimension::D2,
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ascii_bgl"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                texture_entry(2),
                sampler_entry(3),
                wgpu::BindGroupLayoutEntry {
                    binding: 4,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ascii_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_post_pipeline(
            device,
            &pl,
            &shader,
            "fs_ascii",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );
        Self {
            bgl,
            pipeline,
            sampler: helpers::linear_sampler(device, "ascii_sampler"),
            srgb_output: swap_format.is_srgb(),
        }
    }

    pub(crate) fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Colours in the encoding the swapchain expects.
    fn output_color(&self, c: Rgb) -> [f32; 4] {
        let [r, g, b] = if self.srgb_output {
            c.to_linear()
        } else {
            c.to_unit()
        };
        [r, g, b, 1.0]
    }
}

/// One configured ASCII filter: glyph atlas, colours and invert flag.
///
/// Rebuilt whenever any of its settings change; the previous instance is
/// dropped, releasing its GPU resources.
pub(crate) struct AsciiEffect {
    atlas_view: wgpu::TextureView,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: AsciiUniforms,
    resolution: f32,
}

impl AsciiEffect {
    pub(crate) fn build(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        shared: &AsciiPipeline,
        key: &AsciiEffectKey,
        scene_view: &wgpu::TextureView,
    ) -> anyhow::Result<Self> {
        let atlas = atlas::rasterize(&key.characters)?;
        let (atlas_tex, atlas_view) = helpers::create_color_texture_device(
            device,
            "glyph_atlas",
            atlas.width,
            atlas.height,
            wgpu::TextureFormat::R8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &atlas_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &atlas.coverage,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(atlas.width),
                rows_per_image: Some(atlas.height),
            },
            wgpu::Extent3d {
                width: atlas.width,
                height: atlas.height,
                depth_or_array_layers: 1,
            },
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ascii_uniforms"),
            size: std::mem::size_of::<AsciiUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = bind(device, shared, scene_view, &atlas_view, &uniform_buffer);
        log::info!(
            "[ascii] rebuilt: {} glyphs, res {:.3}, fg {}, bg {}, invert {}",
            key.characters.chars().count(),
            key.resolution(),
            key.fg,
            key.bg,
            key.invert
        );
        Ok(Self {
            atlas_view,
            uniform_buffer,
            bind_group,
            uniforms: AsciiUniforms {
                grid: [1.0, 1.0],
                ramp_len: key.characters.chars().count() as f32,
                invert: if key.invert { 1.0 } else { 0.0 },
                fg: shared.output_color(key.fg),
                bg: shared.output_color(key.bg),
            },
            resolution: key.resolution(),
        })
    }

    /// Point the effect at a recreated scene target.
    pub(crate) fn rebind(
        &mut self,
        device: &wgpu::Device,
        shared: &AsciiPipeline,
        scene_view: &wgpu::TextureView,
    ) {
        self.bind_group = bind(
            device,
            shared,
            scene_view,
            &self.atlas_view,
            &self.uniform_buffer,
        );
    }

    /// Size the character grid for a viewport given in CSS pixels.
    pub(crate) fn set_viewport(&mut self, queue: &wgpu::Queue, css_width: f32, css_height: f32) {
        let grid = CellGrid::for_viewport(css_width, css_height, self.resolution);
        self.uniforms.grid = [grid.cols as f32, grid.rows as f32];
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }

    pub(crate) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub(crate) fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.uniforms.bg;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

fn bind(
    device: &wgpu::Device,
    shared: &AsciiPipeline,
    scene_view: &wgpu::TextureView,
    atlas_view: &wgpu::TextureView,
    uniform_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ascii_bg"),
        layout: &shared.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(scene_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&shared.sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(atlas_view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(&shared.sampler),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: uniform_buffer.as_entire_binding(),
            },
        ],
    })
}
