//! Screen capture through `xcap`.

use image::{imageops, RgbaImage};
use xcap::Monitor;

use super::{ReadingError, RegionCapture};
use crate::resolution::ScreenRegion;

/// Captures regions of the monitor containing them.
///
/// Region coordinates are absolute screen pixels; they are translated into
/// the monitor's own coordinate space before cropping.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenCapture;

impl ScreenCapture {
    /// Create a screen capture.
    pub fn new() -> Self {
        Self
    }
}

/// Crop `region` out of a monitor image whose top-left corner sits at
/// `origin` in screen coordinates.
pub(crate) fn crop_region(
    full: &RgbaImage,
    origin: (i32, i32),
    region: &ScreenRegion,
) -> Result<RgbaImage, ReadingError> {
    let out_of_bounds = || ReadingError::RegionOutOfBounds {
        region: *region,
        width: full.width(),
        height: full.height(),
    };

    let x = u32::try_from(i64::from(region.left) - i64::from(origin.0)).map_err(|_| out_of_bounds())?;
    let y = u32::try_from(i64::from(region.top) - i64::from(origin.1)).map_err(|_| out_of_bounds())?;
    let (width, height) = (region.width(), region.height());

    if width == 0 || height == 0 || x + width > full.width() || y + height > full.height() {
        return Err(out_of_bounds());
    }

    Ok(imageops::crop_imm(full, x, y, width, height).to_image())
}

impl RegionCapture for ScreenCapture {
    fn capture(&mut self, region: &ScreenRegion) -> Result<RgbaImage, ReadingError> {
        let capture_err = |e: xcap::XCapError| ReadingError::Capture(e.to_string());

        let monitor = Monitor::from_point(region.left as i32, region.top as i32).map_err(capture_err)?;
        let origin = (
            monitor.x().map_err(capture_err)?,
            monitor.y().map_err(capture_err)?,
        );
        let full = monitor.capture_image().map_err(capture_err)?;

        crop_region(&full, origin, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn marked_image() -> RgbaImage {
        let mut image = RgbaImage::new(100, 50);
        image.put_pixel(20, 10, Rgba([255, 0, 0, 255]));
        image
    }

    #[test]
    fn test_crop_at_origin() {
        let cropped = crop_region(&marked_image(), (0, 0), &ScreenRegion::new(20, 10, 30, 15)).unwrap();
        assert_eq!(cropped.dimensions(), (10, 5));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_crop_translates_monitor_origin() {
        // Second monitor placed to the right of a 1920px wide primary.
        let region = ScreenRegion::new(1940, 10, 1950, 15);
        let cropped = crop_region(&marked_image(), (1920, 0), &region).unwrap();
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_crop_outside_image_fails() {
        let err = crop_region(&marked_image(), (0, 0), &ScreenRegion::new(90, 40, 120, 60)).unwrap_err();
        assert!(matches!(err, ReadingError::RegionOutOfBounds { width: 100, height: 50, .. }));
    }

    #[test]
    fn test_crop_left_of_monitor_fails() {
        let err = crop_region(&marked_image(), (500, 0), &ScreenRegion::new(10, 0, 20, 5)).unwrap_err();
        assert!(matches!(err, ReadingError::RegionOutOfBounds { .. }));
    }

    #[test]
    fn test_empty_region_fails() {
        assert!(crop_region(&marked_image(), (0, 0), &ScreenRegion::new(5, 5, 5, 9)).is_err());
    }
}
