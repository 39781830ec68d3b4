use crate::foundation::core::Rgba8;
use crate::foundation::error::CrewframeResult;
use crate::render::backend::RenderScene;
use crate::render::surface::Surface;
use crate::render::text::TextAlign;
use crate::scene::request::TextLayout;
use crate::templates::layout;

/// `classic-lineup`: primary banner with the club icon, centered headings,
/// balanced two-column lineup, framed border.
pub(crate) fn draw(surface: &mut Surface, scene: &RenderScene<'_>) -> CrewframeResult<()> {
    let w = surface.width();
    let h = surface.height();
    let min_edge = w.min(h);

    let banner = kurbo::Rect::new(0.0, 0.0, w, h * 0.20);
    layout::draw_background(surface, scene.config.background, scene.colors, banner)?;
    let ink = layout::body_text_color(scene.config.background, scene.colors);

    if let Some(icon) = scene.icon
        && let Some(rect) = layout::icon_rect(scene.config.logo, surface, banner)
    {
        surface.draw_icon(icon, rect)?;
    }

    surface.draw_text(
        &scene.crew.club_name,
        (h * 0.050) as f32,
        ink,
        kurbo::Point::new(w / 2.0, h * 0.225),
        TextAlign::Center,
        Some(w * 0.86),
    )?;
    surface.draw_text(
        &scene.crew.race_name,
        (h * 0.030) as f32,
        Rgba8::opaque(scene.colors.secondary),
        kurbo::Point::new(w / 2.0, h * 0.290),
        TextAlign::Center,
        Some(w * 0.86),
    )?;
    let boat_line = format!(
        "{} · {} ({})",
        scene.crew.name, scene.crew.boat_type.name, scene.crew.boat_type.code
    );
    surface.draw_text(
        &boat_line,
        (h * 0.022) as f32,
        ink,
        kurbo::Point::new(w / 2.0, h * 0.335),
        TextAlign::Center,
        Some(w * 0.80),
    )?;

    let deco = kurbo::Rect::new(w * 0.22, h * 0.378, w * 0.78, h * 0.394);
    layout::draw_boat_decoration(
        surface,
        scene.config.boat_style,
        deco,
        Rgba8::opaque(scene.colors.secondary).with_alpha(170),
    );

    let lineup = kurbo::Rect::new(w * 0.08, h * 0.43, w * 0.92, h * 0.88);
    let font = (h * 0.034) as f32;
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
            TextAlign::Center,
        )?,
    }

    if let Some(coach) = scene.crew.coach_name.as_deref().filter(|c| !c.trim().is_empty()) {
        surface.draw_text(
            &format!("Coach · {coach}"),
            (h * 0.022) as f32,
            Rgba8::opaque(scene.colors.secondary),
            kurbo::Point::new(w / 2.0, h * 0.905),
            TextAlign::Center,
            Some(w * 0.7),
        )?;
    }

    let inset = min_edge * 0.025;
    surface.frame_rect(
        kurbo::Rect::new(inset, inset, w - inset, h - inset),
        min_edge * 0.005,
        Rgba8::opaque(scene.colors.primary),
    );
    Ok(())
}
