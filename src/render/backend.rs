//! Render backend seam and the CPU compositor.

use crate::branding::color::ColorScheme;
use crate::branding::icon::ResolvedIcon;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::render::encode::encode_png;
use crate::render::font::FontSource;
use crate::render::surface::Surface;
use crate::roster::crew::Crew;
use crate::roster::seats::SeatAssignment;
use crate::scene::request::TemplateConfig;
use crate::templates::TemplateVariant;
use std::sync::Arc;

/// Fully resolved inputs for one render: everything a template variant needs,
/// nothing left for it to derive.
///
/// Seat labels and colors are resolved before this exists, so labeling and
/// branding bugs cannot diverge by variant.
pub struct RenderScene<'a> {
    /// Selected template variant.
    pub template: &'a TemplateVariant,
    /// Crew under render (read-only).
    pub crew: &'a Crew,
    /// Resolved, labeled lineup.
    pub seats: &'a SeatAssignment,
    /// Resolved color scheme (explicit > preset > template default).
    pub colors: ColorScheme,
    /// Resolved club icon, when any.
    pub icon: Option<&'a ResolvedIcon>,
    /// Style ids and output dimensions.
    pub config: &'a TemplateConfig,
}

/// A compositor that turns a [`RenderScene`] into encoded PNG bytes.
///
/// The trait seam exists so tests can substitute an instrumented double and
/// assert that validation failures never acquire a drawing surface.
pub trait RenderBackend: Send {
    /// Compose and encode one image.
    fn compose(&mut self, scene: &RenderScene<'_>) -> CrewframeResult<Vec<u8>>;
}

/// CPU compositor backed by `vello_cpu`.
///
/// Holds only immutable font bytes; every compose call acquires a fresh
/// scoped [`Surface`], so concurrent engines sharing nothing can run renders
/// independently.
#[derive(Debug)]
pub struct CpuBackend {
    font_bytes: Arc<Vec<u8>>,
}

impl CpuBackend {
    /// Create a backend, resolving and sanity-checking the font source.
    pub fn new(font: FontSource) -> CrewframeResult<Self> {
        let font_bytes = font.load()?;
        // Fail at construction, not mid-request, when the font is unusable.
        crate::render::text::TextPainter::new(font_bytes.clone())?;
        Ok(Self { font_bytes })
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(template = scene.template.id))]
    fn compose(&mut self, scene: &RenderScene<'_>) -> CrewframeResult<Vec<u8>> {
        let result = Surface::new(scene.config.dimensions, self.font_bytes.clone())
            .and_then(|mut surface| {
                (scene.template.draw)(&mut surface, scene)?;
                surface.finish()
            })
            .and_then(|(pixels, w, h)| encode_png(pixels, w, h));

        match result {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::error!(error = %e, template = scene.template.id, "render failed");
                Err(match e {
                    CrewframeError::Render(_) => e,
                    other => CrewframeError::render(anyhow::Error::new(other)),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
