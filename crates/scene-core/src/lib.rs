//! Platform-free core of the ASCII scene viewer.
//!
//! Holds the Scene Controller and everything the web front-end needs that
//! does not touch the browser or the GPU: the model catalog, ASCII filter
//! settings and glyph mapping, the orbit camera, and mesh generation/import.

pub mod animation;
pub mod ascii;
pub mod cache;
pub mod catalog;
pub mod constants;
pub mod controller;
pub mod error;
pub mod glb;
pub mod keyed;
pub mod mesh;
pub mod orbit;
pub mod settings;
pub mod text3d;

pub use ascii::CellGrid;
pub use cache::{CacheEntry, MeshCache};
pub use catalog::{find_model, ModelDescriptor, ModelKind, MODELS, TEXT_MODEL_ID};
pub use constants::*;
pub use controller::{AssetCache, RenderInstruction, RenderSource, SceneController};
pub use error::{AssetError, CacheError, ColorParseError, SettingsError};
pub use keyed::KeyedSlot;
pub use mesh::{MeshData, Vertex};
pub use orbit::{Camera, OrbitCamera};
pub use settings::{AsciiEffectKey, AsciiSettings, AsciiUpdate, RampPreset, Rgb, RAMP_PRESETS};
pub use text3d::{build_text_mesh, TextStyle};
