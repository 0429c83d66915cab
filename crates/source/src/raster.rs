//! Draws encoded image bytes into a bitmap of the laid-out size.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use image::imageops::FilterType;
use std::io::Cursor;

/// What a zero-sized canvas serializes to.
pub const EMPTY_DATA_URL: &str = "data:,";

/// Decodes `data`, scales it to exactly `width`×`height` and returns it as a
/// base64 PNG `data:` URL.
pub fn to_data_url(data: &[u8], width: u32, height: u32) -> Result<String, String> {
    if width == 0 || height == 0 {
        return Ok(EMPTY_DATA_URL.to_string());
    }

    let decoded = image::load_from_memory(data).map_err(|e| e.to_string())?;
    let scaled = decoded.resize_exact(width, height, FilterType::Triangle);

    let mut png = Cursor::new(Vec::new());
    scaled
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    log::trace!(
        "Rasterized {}x{} image into {} PNG bytes",
        width,
        height,
        png.get_ref().len()
    );
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png.into_inner())
    ))
}
