use crate::foundation::core::Rgba8;
use crate::foundation::error::CrewframeResult;
use crate::render::backend::RenderScene;
use crate::render::surface::Surface;
use crate::render::text::TextAlign;
use crate::scene::request::TextLayout;
use crate::templates::layout;

/// `race-day`: left accent bar, left-aligned header and lineup, compact.
pub(crate) fn draw(surface: &mut Surface, scene: &RenderScene<'_>) -> CrewframeResult<()> {
    let w = surface.width();
    let h = surface.height();

    // The primary band is the accent bar, not a top banner.
    let bar = kurbo::Rect::new(0.0, 0.0, w * 0.05, h);
    layout::draw_background(surface, scene.config.background, scene.colors, bar)?;
    let ink = layout::body_text_color(scene.config.background, scene.colors);
    surface.fill_rect(
        kurbo::Rect::new(w * 0.05, 0.0, w * 0.062, h),
        Rgba8::opaque(scene.colors.secondary),
    );

    // Icon placement keys off a header-sized band even though none is painted.
    let header = kurbo::Rect::new(0.0, 0.0, w, h * 0.17);
    if let Some(icon) = scene.icon
        && let Some(rect) = layout::icon_rect(scene.config.logo, surface, header)
    {
        surface.draw_icon(icon, rect)?;
    }

    let left = w * 0.11;
    surface.draw_text(
        &scene.crew.club_name,
        (h * 0.055) as f32,
        ink,
        kurbo::Point::new(left, h * 0.045),
        TextAlign::Left,
        Some(w * 0.66),
    )?;
    surface.draw_text(
        &scene.crew.race_name,
        (h * 0.028) as f32,
        Rgba8::opaque(scene.colors.secondary),
        kurbo::Point::new(left, h * 0.118),
        TextAlign::Left,
        Some(w * 0.66),
    )?;
    surface.fill_rect(
        kurbo::Rect::new(left, h * 0.168, w * 0.92, h * 0.171),
        Rgba8::opaque(scene.colors.secondary).with_alpha(180),
    );

    // Boat tag sits on a rounded chip sized to the measured text.
    let boat_line = format!("{} · {}", scene.crew.name, scene.crew.boat_type.code);
    let tag_font = (h * 0.024) as f32;
    let (tag_w, tag_h) = surface.measure_text(&boat_line, tag_font, Some(w * 0.8))?;
    let pad = h * 0.010;
    surface.fill_rounded_rect(
        kurbo::Rect::new(
            left - pad,
            h * 0.190 - pad,
            left + tag_w + pad,
            h * 0.190 + tag_h + pad,
        ),
        pad * 1.6,
        Rgba8::opaque(scene.colors.primary).with_alpha(36),
    );
    surface.draw_text(
        &boat_line,
        tag_font,
        ink,
        kurbo::Point::new(left, h * 0.190),
        TextAlign::Left,
        Some(w * 0.8),
    )?;

    let deco = kurbo::Rect::new(left, h * 0.238, w * 0.92, h * 0.252);
    layout::draw_boat_decoration(
        surface,
        scene.config.boat_style,
        deco,
        Rgba8::opaque(scene.colors.primary).with_alpha(150),
    );

    let lineup = kurbo::Rect::new(left, h * 0.28, w * 0.92, h * 0.90);
    let font = (h * 0.030) as f32;
    match scene.config.text_layout {
        TextLayout::SingleColumn => layout::draw_lineup_single(
            surface,
            scene.seats,
            scene.config.name_display,
            lineup,
            font,
            ink,
            TextAlign::Left,
        )?,
        TextLayout::Columns => layout::draw_lineup_columns(
            surface,
            scene.seats,
            scene.config.name_display,
            lineup,
            font,
            ink,
        )?,
    }

    if let Some(coach) = scene.crew.coach_name.as_deref().filter(|c| !c.trim().is_empty()) {
        surface.draw_text(
            &format!("Coach · {coach}"),
            (h * 0.022) as f32,
            Rgba8::opaque(scene.colors.secondary),
            kurbo::Point::new(left, h * 0.935),
            TextAlign::Left,
            Some(w * 0.7),
        )?;
    }
    Ok(())
}
