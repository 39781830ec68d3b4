use crate::foundation::core::Rgba8;
use crate::foundation::error::CrewframeResult;
use crate::render::backend::RenderScene;
use crate::render::surface::Surface;
use crate::render::text::TextAlign;
use crate::scene::request::TextLayout;
use crate::templates::layout;

/// `minimal-card`: undecorated card with a thin primary rule and hairline
/// border. Carries no ornamentation beyond the rule, so `boat_style` has no
/// effect here.
pub(crate) fn draw(surface: &mut Surface, scene: &RenderScene<'_>) -> CrewframeResult<()> {
    let w = surface.width();
    let h = surface.height();
    let min_edge = w.min(h);

    let rule = kurbo::Rect::new(0.0, 0.0, w, h * 0.014);
    layout::draw_background(surface, scene.config.background, scene.colors, rule)?;
    let ink = layout::body_text_color(scene.config.background, scene.colors);

    let header = kurbo::Rect::new(0.0, 0.0, w, h * 0.15);
    if let Some(icon) = scene.icon
        && let Some(rect) = layout::icon_rect(scene.config.logo, surface, header)
    {
        surface.draw_icon(icon, rect)?;
    }

    let left = w * 0.08;
    surface.draw_text(
        &scene.crew.club_name,
        (h * 0.045) as f32,
        ink,
        kurbo::Point::new(left, h * 0.055),
        TextAlign::Left,
        Some(w * 0.62),
    )?;
    surface.draw_text(
        &format!("{} · {}", scene.crew.race_name, scene.crew.name),
        (h * 0.026) as f32,
        Rgba8::opaque(scene.colors.secondary),
        kurbo::Point::new(left, h * 0.115),
        TextAlign::Left,
        Some(w * 0.7),
    )?;

    let lineup = kurbo::Rect::new(left, h * 0.21, w * 0.92, h * 0.90);
    let font = (h * 0.030) as f32;
    match scene.config.text_layout {
        TextLayout::Columns => layout::draw_lineup_columns(
            surface,
            scene.seats,
            scene.config.name_display,
            lineup,
            font,
            ink,
        )?,
        TextLayout::SingleColumn => layout::draw_lineup_single(
            surface,
            scene.seats,
            scene.config.name_display,
            lineup,
            font,
            ink,
            TextAlign::Left,
        )?,
    }

    if let Some(coach) = scene.crew.coach_name.as_deref().filter(|c| !c.trim().is_empty()) {
        surface.draw_text(
            &format!("Coach · {coach}"),
            (h * 0.020) as f32,
            Rgba8::opaque(scene.colors.secondary),
            kurbo::Point::new(left, h * 0.935),
            TextAlign::Left,
            Some(w * 0.7),
        )?;
    }

    let inset = min_edge * 0.02;
    surface.frame_rect(
        kurbo::Rect::new(inset, inset.max(h * 0.02), w - inset, h - inset),
        min_edge * 0.002,
        layout::INK.with_alpha(60),
    );
    Ok(())
}
