use std::io::Cursor;

use crate::foundation::error::{IconError, IconResult};
use crate::render::raster::IconImage;

/// Encode `image` as an RGBA8 PNG.
///
/// The encoder runs with fixed settings, so equal images always produce equal bytes.
pub fn encode_png(image: &IconImage) -> IconResult<Vec<u8>> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .ok_or_else(|| {
            IconError::encode(format!(
                "buffer of {} bytes does not hold a {}x{} rgba8 image",
                image.data.len(),
                image.width,
                image.height
            ))
        })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| IconError::encode(format!("png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
