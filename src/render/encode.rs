use crate::foundation::core::unpremultiply_rgba8_in_place;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use std::io::Cursor;

/// Encode premultiplied RGBA8 pixels to PNG bytes.
///
/// The encoder writes no timestamps or ancillary chunks that vary between
/// runs, so identical pixels give byte-identical output.
pub(crate) fn encode_png(
    mut rgba8_premul: Vec<u8>,
    width: u32,
    height: u32,
) -> CrewframeResult<Vec<u8>> {
    unpremultiply_rgba8_in_place(&mut rgba8_premul);
    let img = image::RgbaImage::from_raw(width, height, rgba8_premul)
        .ok_or_else(|| CrewframeError::render(anyhow::anyhow!("invalid rgba buffer size")))?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| CrewframeError::render(anyhow::Error::new(e).context("png encode")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
