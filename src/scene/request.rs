//! Request boundary model: generation requests, template configuration,
//! style ids.

use crate::branding::color::ColorPair;
use crate::foundation::core::Dimensions;
use crate::foundation::error::CrewframeResult;
use crate::roster::crew::Crew;
use serde::{Deserialize, Serialize};

/// Background treatment a variant should apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    /// Flat primary-color field behind the banner, white body.
    #[default]
    Solid,
    /// Vertical primary-to-secondary gradient.
    Gradient,
    /// Primary banner over a secondary-tinted body.
    Split,
}

/// How member entries are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameDisplay {
    /// Seat label and member name, e.g. "Stroke  A. Hartley".
    #[default]
    SeatAndName,
    /// Member name only.
    NameOnly,
}

/// Decorative boat element a variant may draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoatStyle {
    /// Hull outline along the lineup.
    #[default]
    Outline,
    /// Filled hull silhouette.
    Filled,
    /// No boat decoration.
    None,
}

/// Member-entry column arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextLayout {
    /// Balanced left/right columns, alternating by seat index.
    #[default]
    Columns,
    /// One column, top to bottom.
    SingleColumn,
}

/// Where the club icon is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    /// Centered inside the banner.
    #[default]
    TopCenter,
    /// Banner, leading edge.
    TopLeft,
    /// Banner, trailing edge.
    TopRight,
    /// Centered in the footer region.
    BottomCenter,
    /// Suppress the icon even when one is resolved.
    Hidden,
}

/// Template configuration: style ids, output size, optional explicit colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Background treatment.
    #[serde(default)]
    pub background: BackgroundStyle,
    /// Member-entry formatting.
    #[serde(default)]
    pub name_display: NameDisplay,
    /// Decorative boat element.
    #[serde(default)]
    pub boat_style: BoatStyle,
    /// Column arrangement.
    #[serde(default)]
    pub text_layout: TextLayout,
    /// Icon placement.
    #[serde(default)]
    pub logo: LogoPosition,
    /// Output size in pixels.
    pub dimensions: Dimensions,
    /// Explicit colors; omit to inherit from preset or template default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPair>,
}

impl TemplateConfig {
    /// Validate output dimensions (positive, within the surface cap).
    pub fn validate(&self) -> CrewframeResult<()> {
        self.dimensions.validate()
    }
}

/// Club icon as supplied on a request, before resolution.
///
/// Exactly one variant: an inline upload or a reference into the stored
/// club-logo collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClubIcon {
    /// Inline upload: raw image bytes plus the original filename.
    Upload {
        /// Raw image file bytes.
        #[serde(rename = "fileBytes")]
        file_bytes: Vec<u8>,
        /// Original filename, used in error messages.
        filename: String,
    },
    /// Reference to a stored club logo by filename.
    Preset {
        /// Stored logo filename.
        filename: String,
    },
}

/// One image-generation request, the engine's single entry shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// The crew to render.
    pub crew: Crew,
    /// Registered template variant id, e.g. `classic-lineup`.
    pub template_id: String,
    /// Layout, size, and color configuration.
    pub template_config: TemplateConfig,
    /// Club preset id supplying inherited colors and a default logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_preset: Option<String>,
    /// Club icon override for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_icon: Option<ClubIcon>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/request.rs"]
mod tests;
