//! Scoped per-request drawing surface over the CPU rasterizer.

use crate::branding::icon::{PreparedBitmap, ResolvedIcon};
use crate::foundation::core::{Dimensions, Rgba8};
use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::render::text::{TextAlign, TextPainter};
use kurbo::Shape;
use std::sync::Arc;

/// Flatness tolerance when lowering kurbo shapes to bezier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// One render request's drawing surface.
///
/// Acquired at the start of a compose call, consumed by [`Surface::finish`],
/// never reused: concurrent renders cannot observe each other's state.
/// Template variants draw exclusively through this type and never touch the
/// rasterizer directly.
pub struct Surface {
    ctx: vello_cpu::RenderContext,
    text: TextPainter,
    width: u32,
    height: u32,
}

impl Surface {
    /// Acquire a surface sized to `dims`, shaping text with `font_bytes`.
    pub(crate) fn new(dims: Dimensions, font_bytes: Arc<Vec<u8>>) -> CrewframeResult<Self> {
        dims.validate()?;
        let w: u16 = dims
            .width
            .try_into()
            .map_err(|_| CrewframeError::validation("surface width exceeds u16"))?;
        let h: u16 = dims
            .height
            .try_into()
            .map_err(|_| CrewframeError::validation("surface height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            text: TextPainter::new(font_bytes)?,
            width: dims.width,
            height: dims.height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn set_solid(&mut self, color: Rgba8) {
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: kurbo::Rect, color: Rgba8) {
        self.set_solid(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    /// Fill a rounded rectangle.
    pub fn fill_rounded_rect(&mut self, rect: kurbo::Rect, radius: f64, color: Rgba8) {
        let rr = kurbo::RoundedRect::new(rect.x0, rect.y0, rect.x1, rect.y1, radius);
        self.fill_kurbo_shape(&rr, color);
    }

    /// Fill an ellipse centered at `center` with radii `(rx, ry)`.
    pub fn fill_ellipse(&mut self, center: kurbo::Point, rx: f64, ry: f64, color: Rgba8) {
        let e = kurbo::Ellipse::new(center, (rx, ry), 0.0);
        self.fill_kurbo_shape(&e, color);
    }

    /// Fill an arbitrary bezier path.
    pub fn fill_path(&mut self, path: &kurbo::BezPath, color: Rgba8) {
        self.set_solid(color);
        let cpu_path = bezpath_to_cpu(path);
        self.ctx.fill_path(&cpu_path);
    }

    /// Stroke a rectangle as a frame of `thickness` drawn inside its bounds.
    pub fn frame_rect(&mut self, rect: kurbo::Rect, thickness: f64, color: Rgba8) {
        let t = thickness.max(0.0);
        if t <= 0.0 {
            return;
        }
        self.fill_rect(kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + t), color);
        self.fill_rect(kurbo::Rect::new(rect.x0, rect.y1 - t, rect.x1, rect.y1), color);
        self.fill_rect(kurbo::Rect::new(rect.x0, rect.y0 + t, rect.x0 + t, rect.y1 - t), color);
        self.fill_rect(kurbo::Rect::new(rect.x1 - t, rect.y0 + t, rect.x1, rect.y1 - t), color);
    }

    fn fill_kurbo_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        self.set_solid(color);
        let mut p = vello_cpu::kurbo::BezPath::new();
        for el in shape.path_elements(PATH_TOLERANCE) {
            p.push(pathel_to_cpu(el));
        }
        self.ctx.fill_path(&p);
    }

    /// Draw a resolved club icon scaled into `dst`, preserving aspect ratio.
    ///
    /// The icon is letterboxed inside `dst` rather than stretched.
    pub fn draw_icon(&mut self, icon: &ResolvedIcon, dst: kurbo::Rect) -> CrewframeResult<()> {
        let (iw, ih) = icon.intrinsic_size();
        if iw <= 0.0 || ih <= 0.0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
            return Err(CrewframeError::render(anyhow::anyhow!(
                "icon or destination rect has no area"
            )));
        }
        let scale = (dst.width() / iw).min(dst.height() / ih);
        let w = iw * scale;
        let h = ih * scale;
        let x = dst.x0 + (dst.width() - w) / 2.0;
        let y = dst.y0 + (dst.height() - h) / 2.0;
        let fitted = kurbo::Rect::new(x, y, x + w, y + h);

        match icon {
            ResolvedIcon::Bitmap(b) => self.draw_bitmap(b, fitted),
            ResolvedIcon::Svg(tree) => self.draw_svg(tree, fitted),
        }
    }

    /// Draw a premultiplied RGBA8 bitmap stretched into `dst`.
    pub fn draw_bitmap(&mut self, bmp: &PreparedBitmap, dst: kurbo::Rect) -> CrewframeResult<()> {
        let paint = rgba_premul_to_image(&bmp.rgba8_premul, bmp.width, bmp.height)?;
        let sx = dst.width() / f64::from(bmp.width);
        let sy = dst.height() / f64::from(bmp.height);
        let tr = kurbo::Affine::translate((dst.x0, dst.y0)) * kurbo::Affine::scale_non_uniform(sx, sy);

        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(bmp.width),
            f64::from(bmp.height),
        ));
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    /// Rasterize an SVG tree at the destination size and draw it into `dst`.
    pub fn draw_svg(&mut self, tree: &usvg::Tree, dst: kurbo::Rect) -> CrewframeResult<()> {
        let w = dst.width().ceil().max(1.0) as u32;
        let h = dst.height().ceil().max(1.0) as u32;
        let rgba = rasterize_svg_to_premul_rgba8(tree, w, h)?;
        let bmp = PreparedBitmap {
            width: w,
            height: h,
            rgba8_premul: Arc::new(rgba),
        };
        self.draw_bitmap(&bmp, kurbo::Rect::new(dst.x0, dst.y0, dst.x0 + f64::from(w), dst.y0 + f64::from(h)))
    }

    /// Draw one run of text anchored at `anchor`.
    ///
    /// `anchor.y` is the top of the text line. When `max_width` is given and
    /// the run would exceed it, the font size is shrunk proportionally (see
    /// the fit rule in `render::text`), never clipped. Returns the laid-out
    /// `(width, height)` actually drawn.
    pub fn draw_text(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
        anchor: kurbo::Point,
        align: TextAlign,
        max_width: Option<f64>,
    ) -> CrewframeResult<(f64, f64)> {
        if text.is_empty() {
            return Ok((0.0, 0.0));
        }
        let shaped = self.text.shape(text, size_px, color, max_width)?;
        let w = shaped.width();
        let h = shaped.height();
        let x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - w / 2.0,
            TextAlign::Right => anchor.x - w,
        };

        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(affine_to_cpu(kurbo::Affine::translate((x, anchor.y))));

        for line in shaped.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&self.text.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok((w, h))
    }

    /// Measure `text` at `size_px` without drawing, honoring the fit rule.
    pub fn measure_text(
        &mut self,
        text: &str,
        size_px: f32,
        max_width: Option<f64>,
    ) -> CrewframeResult<(f64, f64)> {
        if text.is_empty() {
            return Ok((0.0, 0.0));
        }
        let shaped = self
            .text
            .shape(text, size_px, Rgba8::default(), max_width)?;
        Ok((shaped.width(), shaped.height()))
    }

    /// Flush all drawing and read back premultiplied RGBA8 pixels.
    ///
    /// Consumes the surface: every exit path of a compose call releases it.
    pub(crate) fn finish(mut self) -> CrewframeResult<(Vec<u8>, u32, u32)> {
        let w: u16 = self.width as u16;
        let h: u16 = self.height as u16;
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok((pixmap.data_as_u8_slice().to_vec(), self.width, self.height))
    }
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pathel_to_cpu(el: kurbo::PathEl) -> vello_cpu::kurbo::PathEl {
    use kurbo::PathEl;
    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    match el {
        PathEl::MoveTo(p) => vello_cpu::kurbo::PathEl::MoveTo(pt(p)),
        PathEl::LineTo(p) => vello_cpu::kurbo::PathEl::LineTo(pt(p)),
        PathEl::QuadTo(p1, p2) => vello_cpu::kurbo::PathEl::QuadTo(pt(p1), pt(p2)),
        PathEl::CurveTo(p1, p2, p3) => vello_cpu::kurbo::PathEl::CurveTo(pt(p1), pt(p2), pt(p3)),
        PathEl::ClosePath => vello_cpu::kurbo::PathEl::ClosePath,
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        out.push(pathel_to_cpu(el));
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CrewframeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CrewframeError::render(anyhow::anyhow!("pixmap width exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CrewframeError::render(anyhow::anyhow!("pixmap height exceeds u16")))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CrewframeError::render(anyhow::anyhow!(
            "pixmap byte len mismatch"
        )));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> CrewframeResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> CrewframeResult<Vec<u8>> {
    let size = tree.size();
    if !(size.width() > 0.0) || !(size.height() > 0.0) {
        return Err(CrewframeError::render(anyhow::anyhow!(
            "svg has invalid width/height"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CrewframeError::render(anyhow::anyhow!("failed to allocate svg pixmap")))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
