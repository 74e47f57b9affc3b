use std::path::Path;

use image::GrayImage;

use crate::ConvertError;

/// Decodes the image at `path` and reduces it to 8-bit luminance.
///
/// Format detection and pixel decoding are delegated to the `image` crate;
/// multi-channel input is collapsed to a single luminance channel here so the
/// rest of the pipeline only ever sees grayscale intensities.
pub fn decode_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage, ConvertError> {
    let image = image::open(path)?;
    Ok(image.to_luma8())
}
