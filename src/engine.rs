use crate::branding::color::resolve_colors;
use crate::branding::icon::resolve_icon;
use crate::branding::store::{LogoStore, PresetStore};
use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::render::backend::{RenderBackend, RenderScene};
use crate::roster::seats;
use crate::scene::request::{ClubIcon, GenerateRequest};
use crate::templates;
use std::sync::Arc;

/// The generation request handler: validates a request, resolves every input,
/// and drives the compositor.
///
/// Holds only injected collaborators; each call is independent, so one engine
/// can serve concurrent requests from independent execution contexts (the
/// backend is the only `&mut` piece, and it keeps no per-request state).
pub struct Engine {
    presets: Arc<dyn PresetStore>,
    logos: Arc<dyn LogoStore>,
    backend: Box<dyn RenderBackend>,
}

impl Engine {
    /// Wire an engine from its collaborators.
    pub fn new(
        presets: Arc<dyn PresetStore>,
        logos: Arc<dyn LogoStore>,
        backend: Box<dyn RenderBackend>,
    ) -> Self {
        Self {
            presets,
            logos,
            backend,
        }
    }

    /// Generate one lineup image, returning encoded PNG bytes.
    ///
    /// The pipeline is linear and fail-fast: validate, resolve seats, resolve
    /// branding, select the template, compose. All validation completes
    /// before any drawing surface is acquired, and identical inputs always
    /// produce byte-identical output.
    #[tracing::instrument(
        skip_all,
        fields(template = %req.template_id, boat = %req.crew.boat_type.code)
    )]
    pub fn generate(&mut self, req: &GenerateRequest) -> CrewframeResult<Vec<u8>> {
        req.crew.validate()?;
        req.template_config.validate()?;
        let template = templates::find(&req.template_id)?;

        let assignment = seats::resolve(
            &req.crew.boat_type,
            &req.crew.member_names,
            req.crew.cox_name.as_deref(),
        )?;

        let preset = match &req.club_preset {
            Some(id) => Some(
                self.presets
                    .get(id)?
                    .ok_or_else(|| CrewframeError::PresetNotFound(id.clone()))?,
            ),
            None => None,
        };
        let colors = resolve_colors(
            req.template_config.colors,
            preset.as_ref(),
            template.default_colors,
        );

        // An explicit request icon wins; otherwise the preset's stored logo.
        let icon_req = req.club_icon.clone().or_else(|| {
            preset
                .as_ref()
                .and_then(|p| p.logo_filename.clone())
                .map(|filename| ClubIcon::Preset { filename })
        });
        let icon = resolve_icon(icon_req.as_ref(), self.logos.as_ref())?;

        tracing::debug!(
            entries = assignment.len(),
            has_icon = icon.is_some(),
            "inputs resolved"
        );

        let scene = RenderScene {
            template,
            crew: &req.crew,
            seats: &assignment,
            colors,
            icon: icon.as_ref(),
            config: &req.template_config,
        };
        self.backend.compose(&scene)
    }
}
