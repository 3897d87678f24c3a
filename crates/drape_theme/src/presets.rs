//! Built-in skins shipped with the crate

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use drape_border::LineBorder;

use crate::error::{Result, ThemeError};
use crate::skin::Skin;

/// Built-in skin catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkinPreset {
    /// Grey outlines on a light background
    #[default]
    Light,
    /// Muted outlines for dark backgrounds
    Dark,
}

impl SkinPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn all() -> &'static [SkinPreset] {
        const PRESETS: [SkinPreset; 2] = [SkinPreset::Light, SkinPreset::Dark];
        &PRESETS
    }

    /// TOML source of this preset
    pub fn source(self) -> &'static str {
        match self {
            Self::Light => include_str!("../skins/light.toml"),
            Self::Dark => include_str!("../skins/dark.toml"),
        }
    }

    /// Parse and validate this preset
    pub fn skin(self) -> Result<Skin<LineBorder>> {
        Skin::from_toml_str(self.source())
    }
}

impl Display for SkinPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SkinPreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Skin used when nothing else is configured
pub fn default_skin() -> Result<Skin<LineBorder>> {
    SkinPreset::default().skin()
}
