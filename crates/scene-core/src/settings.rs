//! ASCII filter parameters and the typed updates applied to them.

use crate::constants::*;
use crate::error::{ColorParseError, SettingsError};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB colour, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([0xff, 0xff, 0xff]);

    /// Components as 0..1 floats, still sRGB encoded.
    pub fn to_unit(self) -> [f32; 3] {
        self.0.map(|c| c as f32 / 255.0)
    }

    /// Components decoded to linear light.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_unit().map(|c| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AsciiSettings {
    /// Character cells per CSS pixel along x.
    pub resolution: f32,
    /// Glyphs ordered from sparse to dense.
    pub characters: String,
    pub fg: Rgb,
    pub bg: Rgb,
    pub invert: bool,
}

impl Default for AsciiSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            characters: DEFAULT_RAMP.to_string(),
            fg: Rgb(DEFAULT_FG),
            bg: Rgb(DEFAULT_BG),
            invert: DEFAULT_INVERT,
        }
    }
}

/// One field of [`AsciiSettings`] together with its new value.
#[derive(Clone, Debug, PartialEq)]
pub enum AsciiUpdate {
    Resolution(f32),
    Characters(String),
    FgColor(Rgb),
    BgColor(Rgb),
    Invert(bool),
}

impl AsciiSettings {
    /// Merge a single field, leaving the others untouched.
    ///
    /// Resolution is clamped to the slider range and ramps are capped at
    /// [`MAX_RAMP_GLYPHS`]. An empty ramp is rejected and nothing changes.
    pub fn apply(&mut self, update: AsciiUpdate) -> Result<(), SettingsError> {
        match update {
            AsciiUpdate::Resolution(r) => {
                if r.is_finite() {
                    self.resolution = r.clamp(RESOLUTION_MIN, RESOLUTION_MAX);
                } else {
                    log::warn!("ignoring non-finite resolution {}", r);
                }
            }
            AsciiUpdate::Characters(chars) => {
                if chars.is_empty() {
                    return Err(SettingsError::EmptyRamp);
                }
                self.characters = chars.chars().take(MAX_RAMP_GLYPHS).collect();
            }
            AsciiUpdate::FgColor(c) => self.fg = c,
            AsciiUpdate::BgColor(c) => self.bg = c,
            AsciiUpdate::Invert(v) => self.invert = v,
        }
        Ok(())
    }

    pub fn glyph_count(&self) -> usize {
        self.characters.chars().count()
    }

    /// Identity of the effect instance these settings require.
    pub fn effect_key(&self) -> AsciiEffectKey {
        AsciiEffectKey {
            resolution_bits: self.resolution.to_bits(),
            characters: self.characters.clone(),
            fg: self.fg,
            bg: self.bg,
            invert: self.invert,
        }
    }
}

/// The full parameter tuple of the ASCII effect.
///
/// The effect cannot be reconfigured in place; any change to this key means
/// the running instance is dropped and a new one is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AsciiEffectKey {
    resolution_bits: u32,
    pub characters: String,
    pub fg: Rgb,
    pub bg: Rgb,
    pub invert: bool,
}

impl AsciiEffectKey {
    pub fn resolution(&self) -> f32 {
        f32::from_bits(self.resolution_bits)
    }
}

/// Preset character ramp offered by the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RampPreset {
    pub label: &'static str,
    pub characters: &'static str,
}

pub const RAMP_PRESETS: [RampPreset; 2] = [
    RampPreset {
        label: ".:-=+*#%@",
        characters: " .:-=+*#%@",
    },
    RampPreset {
        label: ".-+*#",
        characters: " .-+*#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trips_through_hex() {
        let c: Rgb = "#f0ffc0".parse().unwrap();
        assert_eq!(c, Rgb([0xf0, 0xff, 0xc0]));
        assert_eq!(c.to_string(), "#f0ffc0");
        assert_eq!("#F0FFC0".parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn rgb_rejects_malformed_input() {
        assert!("f0ffc0".parse::<Rgb>().is_err());
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ffé000".parse::<Rgb>().is_err());
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let w = Rgb::WHITE.to_linear();
        assert!(w.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let mid = Rgb([128, 128, 128]).to_linear()[0];
        assert!(mid > 0.2 && mid < 0.23);
    }

    #[test]
    fn resolution_is_clamped_to_slider_range() {
        let mut s = AsciiSettings::default();
        s.apply(AsciiUpdate::Resolution(0.9)).unwrap();
        assert_eq!(s.resolution, RESOLUTION_MAX);
        s.apply(AsciiUpdate::Resolution(0.0)).unwrap();
        assert_eq!(s.resolution, RESOLUTION_MIN);
        s.apply(AsciiUpdate::Resolution(f32::NAN)).unwrap();
        assert_eq!(s.resolution, RESOLUTION_MIN);
    }

    #[test]
    fn non_finite_resolution_leaves_state_unchanged() {
        let mut s = AsciiSettings::default();
        let before = s.clone();
        s.apply(AsciiUpdate::Resolution(f32::INFINITY)).unwrap();
        s.apply(AsciiUpdate::Resolution(f32::NEG_INFINITY)).unwrap();
        s.apply(AsciiUpdate::Resolution(f32::NAN)).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn empty_ramp_is_rejected() {
        let mut s = AsciiSettings::default();
        assert_eq!(
            s.apply(AsciiUpdate::Characters(String::new())),
            Err(SettingsError::EmptyRamp)
        );
        assert_eq!(s, AsciiSettings::default());
    }

    #[test]
    fn long_ramps_are_truncated() {
        let mut s = AsciiSettings::default();
        s.apply(AsciiUpdate::Characters("x".repeat(200))).unwrap();
        assert_eq!(s.glyph_count(), MAX_RAMP_GLYPHS);
    }

    #[test]
    fn effect_key_changes_with_every_field() {
        let base = AsciiSettings::default();
        let updates = [
            AsciiUpdate::Resolution(0.2),
            AsciiUpdate::Characters(" .-+*#".into()),
            AsciiUpdate::FgColor(Rgb::WHITE),
            AsciiUpdate::BgColor(Rgb([1, 2, 3])),
            AsciiUpdate::Invert(true),
        ];
        for u in updates {
            let mut s = base.clone();
            s.apply(u.clone()).unwrap();
            assert_ne!(s.effect_key(), base.effect_key(), "{u:?}");
        }
        assert_eq!(base.effect_key().resolution(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn presets_start_with_a_space() {
        for p in RAMP_PRESETS {
            assert!(p.characters.starts_with(' '));
            assert_eq!(p.characters.trim_start(), p.label);
        }
    }
}
