//! Output dimensions, hex colors, and premultiplied-alpha pixel helpers.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use serde::{Deserialize, Serialize};

/// Largest supported output edge in pixels.
///
/// The CPU rasterizer addresses surfaces in `u16`; the cap also guards against
/// pathological allocations from oversized requests.
pub const MAX_DIMENSION: u32 = 8_192;

/// Output dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create validated dimensions: both edges positive and within
    /// [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> CrewframeResult<Self> {
        let d = Self { width, height };
        d.validate()?;
        Ok(d)
    }

    /// Validate an already-constructed value (e.g. after deserialization).
    pub fn validate(&self) -> CrewframeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CrewframeError::validation(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(CrewframeError::validation(format!(
                "dimensions must be at most {MAX_DIMENSION} per edge, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Opaque sRGB color parsed from a 6-digit hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct from raw channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `RRGGBB` string (case-insensitive).
    ///
    /// Shorthand, 8-digit, and named forms are rejected: template configs and
    /// club presets store exactly 6 hex digits.
    pub fn from_hex(s: &str) -> CrewframeResult<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        // from_str_radix alone would accept a leading sign per pair.
        if t.len() != 6 || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CrewframeError::validation(format!(
                "color must be 6-digit hex (\"#RRGGBB\"), got {s:?}"
            )));
        }
        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16).map_err(|_| {
                CrewframeError::validation(format!("invalid hex byte {pair:?} in color {s:?}"))
            })
        };
        Ok(Self {
            r: byte(&t[0..2])?,
            g: byte(&t[2..4])?,
            b: byte(&t[4..6])?,
        })
    }

    /// Render back to lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual-ish luma in `0..=255`, used to pick readable text colors.
    pub fn luma(self) -> u8 {
        let y = 0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b);
        y.round().clamp(0.0, 255.0) as u8
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Straight-alpha RGBA8 pixel.
///
/// Also used as the Parley text brush, hence the transparent `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color from an [`Rgb`].
    pub fn opaque(c: Rgb) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }

    /// Same color with a replaced alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Convert straight-alpha RGBA8 bytes into premultiplied form, in place.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Convert premultiplied RGBA8 bytes back to straight alpha, in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
