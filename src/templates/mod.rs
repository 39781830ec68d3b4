//! Template variant registry.
//!
//! Each variant is one entry in a fixed strategy table keyed by template id:
//! a pure draw function over a [`Surface`](crate::render::surface::Surface)
//! and fully resolved inputs. Variants differ only in geometry, typography,
//! and decoration; seat labels and colors always arrive resolved.

pub(crate) mod layout;

mod classic;
mod minimal;
mod race_day;
mod regatta;

use crate::branding::color::ColorScheme;
use crate::foundation::core::Rgb;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::render::backend::RenderScene;
use crate::render::surface::Surface;

pub(crate) type DrawFn = fn(&mut Surface, &RenderScene<'_>) -> CrewframeResult<()>;

/// One registered template variant.
#[derive(Debug)]
pub struct TemplateVariant {
    /// Stable id used in requests.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Colors used when neither request nor preset supplies any.
    pub(crate) default_colors: ColorScheme,
    pub(crate) draw: DrawFn,
}

static REGISTRY: [TemplateVariant; 4] = [
    TemplateVariant {
        id: "classic-lineup",
        name: "Classic Lineup",
        default_colors: ColorScheme {
            primary: Rgb::new(0x1b, 0x3a, 0x5c),
            secondary: Rgb::new(0xc2, 0x9b, 0x40),
        },
        draw: classic::draw,
    },
    TemplateVariant {
        id: "race-day",
        name: "Race Day",
        default_colors: ColorScheme {
            primary: Rgb::new(0x8c, 0x1d, 0x2f),
            secondary: Rgb::new(0x2e, 0x2e, 0x2e),
        },
        draw: race_day::draw,
    },
    TemplateVariant {
        id: "regatta-poster",
        name: "Regatta Poster",
        default_colors: ColorScheme {
            primary: Rgb::new(0x0f, 0x5c, 0x49),
            secondary: Rgb::new(0x5c, 0x6b, 0x73),
        },
        draw: regatta::draw,
    },
    TemplateVariant {
        id: "minimal-card",
        name: "Minimal Card",
        default_colors: ColorScheme {
            primary: Rgb::new(0x22, 0x22, 0x22),
            secondary: Rgb::new(0x76, 0x76, 0x76),
        },
        draw: minimal::draw,
    },
];

/// All registered variants, in registry order.
pub fn all() -> &'static [TemplateVariant] {
    &REGISTRY
}

/// Look up a variant by id.
///
/// Unknown ids are a typed error, never a fallback substitution: a silent
/// default would mask configuration bugs.
pub fn find(id: &str) -> CrewframeResult<&'static TemplateVariant> {
    REGISTRY
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CrewframeError::TemplateNotFound(id.to_owned()))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/registry.rs"]
mod tests;
