use crate::foundation::core::Rgba8;
use crate::foundation::error::CrewframeResult;
use crate::render::backend::RenderScene;
use crate::render::surface::Surface;
use crate::render::text::TextAlign;
use crate::scene::request::{LogoPosition, TextLayout};
use crate::templates::layout;

/// `regatta-poster`: poster-style centered composition with an emblem disc
/// behind the club icon and a decorative footer rule.
pub(crate) fn draw(surface: &mut Surface, scene: &RenderScene<'_>) -> CrewframeResult<()> {
    let w = surface.width();
    let h = surface.height();

    // No banner band; the emblem carries the branding instead.
    let no_banner = kurbo::Rect::new(0.0, 0.0, w, 0.0);
    layout::draw_background(surface, scene.config.background, scene.colors, no_banner)?;
    let ink = layout::body_text_color(scene.config.background, scene.colors);

    let emblem_center = kurbo::Point::new(w / 2.0, h * 0.145);
    let emblem_r = h * 0.095;
    if scene.config.logo != LogoPosition::Hidden {
        surface.fill_ellipse(
            emblem_center,
            emblem_r,
            emblem_r,
            Rgba8::opaque(scene.colors.primary),
        );
        surface.fill_ellipse(
            emblem_center,
            emblem_r * 0.92,
            emblem_r * 0.92,
            layout::WHITE,
        );
        if let Some(icon) = scene.icon {
            let side = emblem_r * 1.26;
            surface.draw_icon(
                icon,
                kurbo::Rect::new(
                    emblem_center.x - side / 2.0,
                    emblem_center.y - side / 2.0,
                    emblem_center.x + side / 2.0,
                    emblem_center.y + side / 2.0,
                ),
            )?;
        }
    }

    surface.draw_text(
        &scene.crew.club_name,
        (h * 0.062) as f32,
        ink,
        kurbo::Point::new(w / 2.0, h * 0.275),
        TextAlign::Center,
        Some(w * 0.88),
    )?;
    surface.draw_text(
        &scene.crew.race_name,
        (h * 0.032) as f32,
        Rgba8::opaque(scene.colors.primary),
        kurbo::Point::new(w / 2.0, h * 0.355),
        TextAlign::Center,
        Some(w * 0.80),
    )?;
    let boat_line = format!("{} · {}", scene.crew.name, scene.crew.boat_type.name);
    surface.draw_text(
        &boat_line,
        (h * 0.024) as f32,
        Rgba8::opaque(scene.colors.secondary),
        kurbo::Point::new(w / 2.0, h * 0.405),
        TextAlign::Center,
        Some(w * 0.76),
    )?;

    let lineup = kurbo::Rect::new(w * 0.14, h * 0.46, w * 0.86, h * 0.83);
    let font = (h * 0.032) as f32;
    match scene.config.text_layout {
        TextLayout::SingleColumn => layout::draw_lineup_single(
            surface,
            scene.seats,
            scene.config.name_display,
            lineup,
            font,
            ink,
            TextAlign::Center,
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

    let deco = kurbo::Rect::new(w * 0.30, h * 0.855, w * 0.70, h * 0.868);
    layout::draw_boat_decoration(
        surface,
        scene.config.boat_style,
        deco,
        Rgba8::opaque(scene.colors.primary).with_alpha(190),
    );

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

    surface.fill_rect(
        kurbo::Rect::new(w * 0.38, h * 0.955, w * 0.62, h * 0.958),
        Rgba8::opaque(scene.colors.primary),
    );
    Ok(())
}
