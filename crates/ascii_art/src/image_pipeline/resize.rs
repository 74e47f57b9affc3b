use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::ConvertError;

/// Output grid size derived from the source dimensions and the conversion
/// parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputGeometry {
    pub columns: u32,
    pub rows: u32,
}

impl OutputGeometry {
    /// Derives the output grid for a source bitmap.
    ///
    /// The row count preserves the source aspect ratio scaled by `y_scale`,
    /// floored, with a minimum of one row.
    pub fn derive(
        source_width: u32,
        source_height: u32,
        columns: u32,
        y_scale: f32,
    ) -> Result<Self, ConvertError> {
        if source_width == 0 || source_height == 0 {
            return Err(ConvertError::InvalidImage { width: source_width, height: source_height });
        }
        if columns == 0 {
            return Err(ConvertError::InvalidParameter("output width must be positive"));
        }
        if !y_scale.is_finite() || y_scale <= 0.0 {
            return Err(ConvertError::InvalidParameter("y-scale must be positive"));
        }

        let scale = columns as f32 / source_width as f32;
        let rows = (source_height as f32 * scale * y_scale).floor() as u32;

        Ok(Self { columns, rows: rows.max(1) })
    }
}

/// Resamples the grayscale bitmap to the derived grid, one pixel per cell.
pub fn resample(image: &GrayImage, geometry: OutputGeometry) -> GrayImage {
    imageops::resize(image, geometry.columns, geometry.rows, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_aspect_ratio_and_y_scale() {
        let geometry = OutputGeometry::derive(200, 100, 100, 0.5).unwrap();
        assert_eq!(geometry, OutputGeometry { columns: 100, rows: 25 });

        let geometry = OutputGeometry::derive(2, 2, 2, 1.0).unwrap();
        assert_eq!(geometry, OutputGeometry { columns: 2, rows: 2 });
    }

    #[test]
    fn row_count_is_floored() {
        // 3 * (100 / 1000) * 0.5 = 0.15 rows, clamped to 1.
        let geometry = OutputGeometry::derive(1000, 3, 100, 0.5).unwrap();
        assert_eq!(geometry.rows, 1);

        // 55 * (10 / 100) * 0.5 = 2.75 -> 2.
        let geometry = OutputGeometry::derive(100, 55, 10, 0.5).unwrap();
        assert_eq!(geometry.rows, 2);
    }

    #[test]
    fn zero_source_dimensions_are_invalid() {
        assert!(matches!(
            OutputGeometry::derive(0, 10, 100, 0.5),
            Err(ConvertError::InvalidImage { width: 0, height: 10 })
        ));
        assert!(matches!(
            OutputGeometry::derive(10, 0, 100, 0.5),
            Err(ConvertError::InvalidImage { width: 10, height: 0 })
        ));
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        assert!(matches!(
            OutputGeometry::derive(10, 10, 0, 0.5),
            Err(ConvertError::InvalidParameter(_))
        ));
        assert!(matches!(
            OutputGeometry::derive(10, 10, 100, 0.0),
            Err(ConvertError::InvalidParameter(_))
        ));
        assert!(matches!(
            OutputGeometry::derive(10, 10, 100, -1.0),
            Err(ConvertError::InvalidParameter(_))
        ));
        assert!(matches!(
            OutputGeometry::derive(10, 10, 100, f32::NAN),
            Err(ConvertError::InvalidParameter(_))
        ));
    }

    #[test]
    fn resample_produces_exact_geometry() {
        let image = GrayImage::from_pixel(64, 48, image::Luma([128]));
        let geometry = OutputGeometry::derive(64, 48, 32, 0.5).unwrap();
        let resized = resample(&image, geometry);
        assert_eq!((resized.width(), resized.height()), (geometry.columns, geometry.rows));
    }
}
