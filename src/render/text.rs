//! Text shaping with a deterministic shrink-to-fit rule.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use std::sync::Arc;

/// Horizontal anchor for drawn text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the left edge of the text run.
    Left,
    /// Anchor is the horizontal center.
    Center,
    /// Anchor is the right edge.
    Right,
}

/// A shaped, single-style text layout ready to draw.
pub(crate) struct ShapedText {
    pub(crate) layout: parley::Layout<Rgba8>,
}

impl ShapedText {
    /// Advance width in pixels.
    pub(crate) fn width(&self) -> f64 {
        f64::from(self.layout.width())
    }

    /// Line height in pixels.
    pub(crate) fn height(&self) -> f64 {
        f64::from(self.layout.height())
    }
}

/// Parley-based shaping engine bound to one font file.
///
/// Constructed per render request from raw font bytes; holds no state shared
/// across requests.
pub(crate) struct TextPainter {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl TextPainter {
    /// Register `font_bytes` and resolve the family they provide.
    pub(crate) fn new(font_bytes: Arc<Vec<u8>>) -> CrewframeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.as_ref().clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CrewframeError::validation("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CrewframeError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.as_ref().clone()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    fn layout_at(
        &mut self,
        text: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> CrewframeResult<parley::Layout<Rgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CrewframeError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Shape `text` at `size_px`, shrinking the size proportionally when the
    /// advance width exceeds `max_width`.
    ///
    /// The fit rule is deterministic: one proportional shrink pass, then a
    /// small fixed number of corrective steps for metrics that do not scale
    /// perfectly linearly. Text is never clipped.
    pub(crate) fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        brush: Rgba8,
        max_width: Option<f64>,
    ) -> CrewframeResult<ShapedText> {
        let mut size = size_px;
        let mut layout = self.layout_at(text, size, brush)?;

        if let Some(max_w) = max_width {
            let max_w = max_w.max(1.0);
            for _ in 0..3 {
                let w = f64::from(layout.width());
                if w <= max_w || w <= 0.0 {
                    break;
                }
                size = (size * (max_w / w) as f32).max(1.0);
                layout = self.layout_at(text, size, brush)?;
            }
        }

        Ok(ShapedText { layout })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
