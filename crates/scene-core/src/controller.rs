//! Scene Controller: UI state plus the render parameters derived from it.
//!
//! All mutations are synchronous and independent. The render loop reads the
//! controller each frame through [`SceneController::render_instruction`] and
//! [`SceneController::ascii_key`]; it never writes to it.

use crate::animation::{text_idle_rotation, trs};
use crate::catalog::{find_model, is_loadable_asset, ModelDescriptor, ModelKind, MODELS};
use crate::constants::{TEXT_OFFSET, USER_SCALE_DEFAULT, USER_SCALE_MAX, USER_SCALE_MIN};
use crate::error::{CacheError, SettingsError};
use crate::settings::{AsciiEffectKey, AsciiSettings, AsciiUpdate};
use glam::{Mat4, Vec3};

/// Cache of loaded mesh assets that can forget an entry on request.
pub trait AssetCache {
    fn evict(&mut self, asset: &str) -> Result<(), CacheError>;
}

/// What the renderer should draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderSource<'a> {
    Mesh { asset: &'a str },
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderInstruction<'a> {
    pub source: RenderSource<'a>,
    pub scale: f32,
    pub model_matrix: Mat4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneController {
    selected: String,
    user_scale: f32,
    ascii: AsciiSettings,
    credits_open: bool,
}

impl Default for SceneController {
    fn default() -> Self {
        Self {
            selected: MODELS[0].id.to_string(),
            user_scale: USER_SCALE_DEFAULT,
            ascii: AsciiSettings::default(),
            credits_open: false,
        }
    }
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> &str {
        &self.selected
    }

    pub fn selected_model(&self) -> Option<&'static ModelDescriptor> {
        find_model(&self.selected)
    }

    pub fn user_scale(&self) -> f32 {
        self.user_scale
    }

    pub fn ascii(&self) -> &AsciiSettings {
        &self.ascii
    }

    pub fn credits_open(&self) -> bool {
        self.credits_open
    }

    /// Switch to model `id`.
    ///
    /// When leaving a loadable mesh asset for a different model, the cache is
    /// asked to drop it. That is best effort: a failure is logged and the
    /// selection changes regardless.
    pub fn select_model(&mut self, id: &str, cache: &mut dyn AssetCache) {
        if self.selected != id && is_loadable_asset(&self.selected) {
            if let Err(e) = cache.evict(&self.selected) {
                log::warn!("could not evict cached asset `{}`: {}", self.selected, e);
            }
        }
        log::debug!("[scene] select {} -> {}", self.selected, id);
        self.selected = id.to_string();
    }

    /// Store a user scale multiplier, clamped to the slider range.
    ///
    /// Non-finite input is ignored. Returns the stored value.
    pub fn set_user_scale(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            self.user_scale = value.clamp(USER_SCALE_MIN, USER_SCALE_MAX);
        } else {
            log::warn!("ignoring non-finite scale {}", value);
        }
        self.user_scale
    }

    pub fn update_ascii_setting(&mut self, update: AsciiUpdate) -> Result<(), SettingsError> {
        log::debug!("[scene] ascii update {:?}", update);
        self.ascii.apply(update)
    }

    /// Restore the ASCII defaults and a user scale of 1.0.
    pub fn reset_settings(&mut self) {
        self.ascii = AsciiSettings::default();
        self.user_scale = USER_SCALE_DEFAULT;
    }

    pub fn open_credits(&mut self) {
        self.credits_open = true;
    }

    pub fn close_credits(&mut self) {
        self.credits_open = false;
    }

    pub fn set_credits_open(&mut self, open: bool) {
        self.credits_open = open;
    }

    /// Base scale of the selection (1.0 when unknown) times the user scale.
    pub fn derive_final_scale(&self) -> f32 {
        let base = self.selected_model().map(|m| m.base_scale).unwrap_or(1.0);
        base * self.user_scale
    }

    pub fn ascii_key(&self) -> AsciiEffectKey {
        self.ascii.effect_key()
    }

    /// Draw parameters for the frame at `elapsed_sec` since start.
    ///
    /// Meshes sit at their descriptor position without rotation. The text
    /// entry is offset inside its group and turns with the idle animation.
    pub fn render_instruction(&self, elapsed_sec: f32) -> RenderInstruction<'_> {
        let scale = self.derive_final_scale();
        let model = self.selected_model();
        let position = model.map(|m| m.position_vec3()).unwrap_or(Vec3::ZERO);
        match model.map(|m| m.kind) {
            Some(ModelKind::Text) => {
                let (pitch, yaw) = text_idle_rotation(elapsed_sec);
                let local = trs(Vec3::from_array(TEXT_OFFSET), Vec3::new(pitch, yaw, 0.0), scale);
                RenderInstruction {
                    source: RenderSource::Text,
                    scale,
                    model_matrix: Mat4::from_translation(position) * local,
                }
            }
            _ => RenderInstruction {
                source: RenderSource::Mesh {
                    asset: &self.selected,
                },
                scale,
                model_matrix: trs(position, Vec3::ZERO, scale),
            },
        }
    }
}
