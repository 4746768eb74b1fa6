use thiserror::Error;

/// Failure to drop a cached asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("asset `{0}` is not cached")]
    NotCached(String),
}

/// Failure to turn asset bytes into mesh data.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF document has no scene")]
    NoScene,
    #[error("glTF scene contains no triangle geometry")]
    Empty,
    #[error("primitive is missing POSITION data")]
    MissingPositions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("character ramp must contain at least one glyph")]
    EmptyRamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour `{0}`, expected #rrggbb")]
pub struct ColorParseError(pub String);
