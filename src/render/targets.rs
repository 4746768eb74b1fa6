use super::helpers;

/// Offscreen targets the scene is drawn into before the ASCII pass.
///
/// - `color_*` is the lit scene in Rgba8Unorm, cleared to transparent so
///   empty space reads as fully bright.
/// - `depth_*` backs the scene pass only.
pub(crate) struct RenderTargets {
    pub(crate) color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (color_tex, color_view) = create_scene_color(device, width, height);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.color_tex, self.color_view) = create_scene_color(device, width, height);
        (self.depth_tex, self.depth_view) = helpers::create_depth_texture(device, width, height);
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        (self.color_tex.width(), self.color_tex.height())
    }
}

fn create_scene_color(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture_device(
        device,
        "scene_color",
        width,
        height,
        helpers::SCENE_COLOR_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}
