//! Club icon decoding and resolution into drawable form.

use crate::branding::store::LogoStore;
use crate::foundation::core::premultiply_rgba8_in_place;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::scene::request::ClubIcon;
use std::sync::Arc;

/// Decoded raster icon in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Club icon resolved into an in-memory drawable form.
#[derive(Clone, Debug)]
pub enum ResolvedIcon {
    /// Decoded raster image (PNG, JPEG, GIF, WebP uploads or stored logos).
    Bitmap(PreparedBitmap),
    /// Parsed SVG logo, rasterized at draw time for the target size.
    Svg(Arc<usvg::Tree>),
}

impl ResolvedIcon {
    /// Intrinsic size in logical pixels.
    pub fn intrinsic_size(&self) -> (f64, f64) {
        match self {
            Self::Bitmap(b) => (f64::from(b.width), f64::from(b.height)),
            Self::Svg(tree) => {
                let s = tree.size();
                (f64::from(s.width()), f64::from(s.height()))
            }
        }
    }
}

/// Resolve a request's club icon into drawable form.
///
/// Uploads are decoded from the supplied bytes; preset references are fetched
/// from the injected [`LogoStore`], and absence is [`CrewframeError::IconNotFound`],
/// never a silent blank.
pub fn resolve_icon(
    icon: Option<&ClubIcon>,
    logos: &dyn LogoStore,
) -> CrewframeResult<Option<ResolvedIcon>> {
    let Some(icon) = icon else {
        return Ok(None);
    };
    match icon {
        ClubIcon::Upload {
            file_bytes,
            filename,
        } => {
            if file_bytes.is_empty() {
                return Err(CrewframeError::UnsupportedIconFormat(format!(
                    "uploaded icon {filename:?} is empty"
                )));
            }
            decode_icon_bytes(file_bytes, filename).map(Some)
        }
        ClubIcon::Preset { filename } => {
            let bytes = logos
                .load(filename)?
                .ok_or_else(|| CrewframeError::IconNotFound(filename.clone()))?;
            decode_icon_bytes(&bytes, filename).map(Some)
        }
    }
}

/// Sniff and decode icon bytes into a [`ResolvedIcon`].
///
/// SVG is recognized by its leading markup; everything else goes through the
/// `image` crate's format detection. Undecodable bytes are
/// [`CrewframeError::UnsupportedIconFormat`].
pub fn decode_icon_bytes(bytes: &[u8], filename: &str) -> CrewframeResult<ResolvedIcon> {
    if looks_like_svg(bytes) {
        let tree = usvg::Tree::from_data(bytes, &usvg::Options::default()).map_err(|e| {
            CrewframeError::UnsupportedIconFormat(format!("icon {filename:?}: invalid svg: {e}"))
        })?;
        return Ok(ResolvedIcon::Svg(Arc::new(tree)));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        CrewframeError::UnsupportedIconFormat(format!(
            "icon {filename:?}: bytes are not a recognized image format"
        ))
    })?;
    let dyn_img = image::load_from_memory_with_format(bytes, format).map_err(|e| {
        CrewframeError::UnsupportedIconFormat(format!("icon {filename:?}: {e}"))
    })?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(ResolvedIcon::Bitmap(PreparedBitmap {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    }))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    let t = text.trim_start();
    t.starts_with("<svg") || (t.starts_with("<?xml") && text.contains("<svg"))
}

#[cfg(test)]
#[path = "../../tests/unit/branding/icon.rs"]
mod tests;
