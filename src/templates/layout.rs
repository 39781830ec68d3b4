use crate::branding::color::ColorScheme;
use crate::branding::icon::PreparedBitmap;
use crate::foundation::core::{Rgb, Rgba8};
use crate::foundation::error::CrewframeResult;
use crate::render::surface::Surface;
use crate::render::text::TextAlign;
use crate::roster::seats::{Seat, SeatAssignment};
use crate::scene::request::{BackgroundStyle, BoatStyle, LogoPosition, NameDisplay};
use std::sync::Arc;

/// Near-black ink used for body text on light backgrounds.
pub(crate) const INK: Rgba8 = Rgba8 {
    r: 24,
    g: 28,
    b: 34,
    a: 255,
};

/// Plain white.
pub(crate) const WHITE: Rgba8 = Rgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Pick a readable text color for content drawn over `bg`.
pub(crate) fn text_color_on(bg: Rgb) -> Rgba8 {
    if bg.luma() < 150 { WHITE } else { INK }
}

/// Readable text color for the body fill that [`draw_background`] applies
/// for `style`. The mixes here mirror the fills there.
pub(crate) fn body_text_color(style: BackgroundStyle, colors: ColorScheme) -> Rgba8 {
    let body = match style {
        BackgroundStyle::Solid => Rgb::new(255, 255, 255),
        BackgroundStyle::Gradient => mix(colors.secondary, Rgb::new(255, 255, 255), 0.55),
        BackgroundStyle::Split => mix(colors.secondary, Rgb::new(255, 255, 255), 0.88),
    };
    text_color_on(body)
}

/// Linear mix of two colors, `t` in `0..=1` toward `b`.
pub(crate) fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

/// Format one member entry according to the name-display style.
pub(crate) fn entry_text(seat: &Seat, display: NameDisplay) -> String {
    match display {
        NameDisplay::SeatAndName => format!("{} · {}", seat.label, seat.name),
        NameDisplay::NameOnly => seat.name.clone(),
    }
}

/// Fill the whole surface plus the banner band per the background style.
pub(crate) fn draw_background(
    surface: &mut Surface,
    style: BackgroundStyle,
    colors: ColorScheme,
    banner: kurbo::Rect,
) -> CrewframeResult<()> {
    let full = kurbo::Rect::new(0.0, 0.0, surface.width(), surface.height());
    match style {
        BackgroundStyle::Solid => {
            surface.fill_rect(full, WHITE);
        }
        BackgroundStyle::Gradient => {
            let bmp = vertical_gradient_bitmap(
                full.width().ceil() as u32,
                full.height().ceil() as u32,
                mix(colors.primary, Rgb::new(255, 255, 255), 0.85),
                mix(colors.secondary, Rgb::new(255, 255, 255), 0.55),
            );
            surface.draw_bitmap(&bmp, full)?;
        }
        BackgroundStyle::Split => {
            let body_tint = mix(colors.secondary, Rgb::new(255, 255, 255), 0.88);
            surface.fill_rect(full, Rgba8::opaque(body_tint));
        }
    }
    surface.fill_rect(banner, Rgba8::opaque(colors.primary));
    Ok(())
}

/// Opaque top-to-bottom gradient as a premultiplied bitmap.
pub(crate) fn vertical_gradient_bitmap(w: u32, h: u32, top: Rgb, bottom: Rgb) -> PreparedBitmap {
    let w = w.max(1);
    let h = h.max(1);
    let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
    let h1 = (h.max(1) - 1) as f64;
    for y in 0..h {
        let t = if h1 <= 0.0 { 0.0 } else { f64::from(y) / h1 };
        let c = mix(top, bottom, t);
        // Fully opaque, so premultiplied equals straight.
        let row = [c.r, c.g, c.b, 255];
        for x in 0..w {
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&row);
        }
    }
    PreparedBitmap {
        width: w,
        height: h,
        rgba8_premul: Arc::new(bytes),
    }
}

/// Resolve where the club icon goes, relative to banner and surface.
///
/// Returns `None` for [`LogoPosition::Hidden`]. All offsets are proportional
/// to the output size, so the same template scales without clipping.
pub(crate) fn icon_rect(
    pos: LogoPosition,
    surface: &Surface,
    banner: kurbo::Rect,
) -> Option<kurbo::Rect> {
    let w = surface.width();
    let h = surface.height();
    let side = (banner.height() * 0.72).max(1.0);
    let pad = banner.height() * 0.14;
    let rect = match pos {
        LogoPosition::Hidden => return None,
        LogoPosition::TopCenter => kurbo::Rect::new(
            w / 2.0 - side / 2.0,
            banner.y0 + pad,
            w / 2.0 + side / 2.0,
            banner.y0 + pad + side,
        ),
        LogoPosition::TopLeft => kurbo::Rect::new(
            banner.x0 + pad,
            banner.y0 + pad,
            banner.x0 + pad + side,
            banner.y0 + pad + side,
        ),
        LogoPosition::TopRight => kurbo::Rect::new(
            banner.x1 - pad - side,
            banner.y0 + pad,
            banner.x1 - pad,
            banner.y0 + pad + side,
        ),
        LogoPosition::BottomCenter => {
            let side = (h * 0.09).max(1.0);
            kurbo::Rect::new(
                w / 2.0 - side / 2.0,
                h - side - h * 0.02,
                w / 2.0 + side / 2.0,
                h - h * 0.02,
            )
        }
    };
    Some(rect)
}

/// Lay out member entries in balanced left/right columns.
///
/// Seats alternate by index (Stroke left, 7 right, 6 left, ...), so an odd
/// count leaves the left column one longer. The cox, when present, gets a
/// centered row of its own under the columns. `font_px` is an upper bound;
/// each entry shrinks independently to its column width.
pub(crate) fn draw_lineup_columns(
    surface: &mut Surface,
    seats: &SeatAssignment,
    display: NameDisplay,
    region: kurbo::Rect,
    font_px: f32,
    color: Rgba8,
) -> CrewframeResult<()> {
    let rows = seats.seats.len().div_ceil(2) + usize::from(seats.cox.is_some());
    if rows == 0 {
        return Ok(());
    }
    let row_h = region.height() / rows as f64;
    let font = (font_px as f64).min(row_h * 0.62) as f32;
    let col_w = region.width() * 0.46;

    for (i, seat) in seats.seats.iter().enumerate() {
        let row = i / 2;
        let y = region.y0 + row as f64 * row_h + row_h * 0.18;
        let text = entry_text(seat, display);
        if i % 2 == 0 {
            surface.draw_text(
                &text,
                font,
                color,
                kurbo::Point::new(region.x0, y),
                TextAlign::Left,
                Some(col_w),
            )?;
        } else {
            surface.draw_text(
                &text,
                font,
                color,
                kurbo::Point::new(region.x1, y),
                TextAlign::Right,
                Some(col_w),
            )?;
        }
    }

    if let Some(cox) = &seats.cox {
        let y = region.y1 - row_h + row_h * 0.18;
        surface.draw_text(
            &entry_text(cox, display),
            font,
            color,
            kurbo::Point::new(region.center().x, y),
            TextAlign::Center,
            Some(region.width() * 0.9),
        )?;
    }
    Ok(())
}

/// Lay out member entries in one column, cox last.
pub(crate) fn draw_lineup_single(
    surface: &mut Surface,
    seats: &SeatAssignment,
    display: NameDisplay,
    region: kurbo::Rect,
    font_px: f32,
    color: Rgba8,
    align: TextAlign,
) -> CrewframeResult<()> {
    let rows = seats.len();
    if rows == 0 {
        return Ok(());
    }
    let row_h = region.height() / rows as f64;
    let font = (font_px as f64).min(row_h * 0.62) as f32;
    let anchor_x = match align {
        TextAlign::Left => region.x0,
        TextAlign::Center => region.center().x,
        TextAlign::Right => region.x1,
    };

    let entries = seats.seats.iter().chain(seats.cox.iter());
    for (row, seat) in entries.enumerate() {
        let y = region.y0 + row as f64 * row_h + row_h * 0.18;
        surface.draw_text(
            &entry_text(seat, display),
            font,
            color,
            kurbo::Point::new(anchor_x, y),
            align,
            Some(region.width()),
        )?;
    }
    Ok(())
}

/// Slender hull silhouette: a closed lens spanning `rect` horizontally.
fn lens_path(rect: kurbo::Rect, reversed: bool) -> kurbo::BezPath {
    let mut p = kurbo::BezPath::new();
    let left = kurbo::Point::new(rect.x0, rect.center().y);
    let right = kurbo::Point::new(rect.x1, rect.center().y);
    let top = kurbo::Point::new(rect.center().x, rect.y0);
    let bottom = kurbo::Point::new(rect.center().x, rect.y1);
    if reversed {
        p.move_to(left);
        p.quad_to(bottom, right);
        p.quad_to(top, left);
    } else {
        p.move_to(left);
        p.quad_to(top, right);
        p.quad_to(bottom, left);
    }
    p.close_path();
    p
}

/// Draw the decorative boat element for `style` inside `rect`.
///
/// `Outline` is a hull ring (outer lens minus an inset lens, via winding),
/// `Filled` a solid silhouette, `None` nothing.
pub(crate) fn draw_boat_decoration(
    surface: &mut Surface,
    style: BoatStyle,
    rect: kurbo::Rect,
    color: Rgba8,
) {
    match style {
        BoatStyle::None => {}
        BoatStyle::Filled => {
            surface.fill_path(&lens_path(rect, false), color);
        }
        BoatStyle::Outline => {
            let inset = rect.height() * 0.28;
            let inner = kurbo::Rect::new(
                rect.x0 + rect.width() * 0.04,
                rect.y0 + inset,
                rect.x1 - rect.width() * 0.04,
                rect.y1 - inset,
            );
            let mut ring = lens_path(rect, false);
            // Reversed inner subpath cancels under the nonzero fill rule.
            for el in lens_path(inner, true).elements() {
                ring.push(*el);
            }
            surface.fill_path(&ring, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/layout.rs"]
mod tests;
