//! Converts raster images to ASCII art.
//!
//! The pipeline decodes an image, reduces it to 8-bit luminance, resizes it
//! to a character grid and maps every pixel onto a gradient character.

mod ascii;
mod image_pipeline;

use std::path::Path;

use image::{DynamicImage, GrayImage};

pub use ascii::{canvas::AsciiCanvas, gradient::Gradient, mapping::IntensityMapper};
pub use image_pipeline::{loader::decode_grayscale, resize::OutputGeometry};

use image_pipeline::resize;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has invalid dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Output width in character columns.
    pub width: u32,
    /// Vertical correction factor for non-square terminal cells.
    pub y_scale: f32,
    /// Flip the gradient so bright pixels map to dark characters.
    pub invert: bool,
    /// Character ramp used for the brightness mapping.
    pub gradient: Gradient,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { width: 100, y_scale: 0.5, invert: false, gradient: Gradient::standard() }
    }
}

#[derive(Default)]
pub struct Converter;

impl Converter {
    pub fn convert_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ConvertOptions,
    ) -> Result<AsciiCanvas, ConvertError> {
        let image = decode_grayscale(path)?;
        self.convert(&image, options)
    }

    /// Converts an already decoded image, reducing it to luminance first.
    pub fn convert_image(
        &self,
        image: &DynamicImage,
        options: &ConvertOptions,
    ) -> Result<AsciiCanvas, ConvertError> {
        self.convert(&image.to_luma8(), options)
    }

    /// Converts a decoded grayscale bitmap into an ASCII canvas.
    ///
    /// Pure function of the bitmap and options; the canvas is rectangular
    /// with `options.width` columns.
    pub fn convert(
        &self,
        image: &GrayImage,
        options: &ConvertOptions,
    ) -> Result<AsciiCanvas, ConvertError> {
        let gradient = if options.invert {
            options.gradient.reversed()
        } else {
            options.gradient.clone()
        };

        let geometry =
            OutputGeometry::derive(image.width(), image.height(), options.width, options.y_scale)?;

        let resized = resize::resample(image, geometry);

        let mapper = IntensityMapper::new(gradient);
        Ok(mapper.map(resized.as_raw(), geometry.columns, geometry.rows))
    }
}
