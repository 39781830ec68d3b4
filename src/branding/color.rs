//! Color scheme resolution with strict precedence.

use crate::branding::store::ClubPreset;
use crate::foundation::core::Rgb;
use serde::{Deserialize, Serialize};

/// Explicit primary/secondary colors carried on a template config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Dominant brand color (banner, accents).
    pub primary: Rgb,
    /// Supporting color (decoration, secondary text).
    pub secondary: Rgb,
}

/// Fully resolved color scheme handed to template variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Dominant brand color.
    pub primary: Rgb,
    /// Supporting color.
    pub secondary: Rgb,
}

impl ColorScheme {
    /// Build from an explicit pair.
    pub fn from_pair(p: ColorPair) -> Self {
        Self {
            primary: p.primary,
            secondary: p.secondary,
        }
    }
}

/// Resolve the active color scheme.
///
/// Precedence is strict: explicit per-request colors beat a resolved club
/// preset, which beats the template default. The caller is responsible for
/// having already turned a dangling preset reference into an error; by the
/// time this runs, `preset` is either resolved or genuinely absent.
pub fn resolve_colors(
    explicit: Option<ColorPair>,
    preset: Option<&ClubPreset>,
    template_default: ColorScheme,
) -> ColorScheme {
    if let Some(pair) = explicit {
        return ColorScheme::from_pair(pair);
    }
    if let Some(p) = preset {
        return ColorScheme {
            primary: p.primary_color,
            secondary: p.secondary_color,
        };
    }
    template_default
}

#[cfg(test)]
#[path = "../../tests/unit/branding/color.rs"]
mod tests;
