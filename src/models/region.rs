/// Pixel-space rectangle selecting the part of an image to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    /// Left edge in source pixels
    pub x: u32,
    /// Top edge in source pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True when either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check the region fits inside an image of the given size.
    ///
    /// Edges that overflow `u32` never fit.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        match (right, bottom) {
            (Some(r), Some(b)) => r <= image_width && b <= image_height,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region() {
        assert!(Region::new(0, 0, 0, 10).is_empty());
        assert!(Region::new(0, 0, 10, 0).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_fits_within() {
        let region = Region::new(10, 20, 30, 40);
        assert!(region.fits_within(40, 60));
        assert!(!region.fits_within(39, 60));
        assert!(!region.fits_within(40, 59));
        assert!(Region::full(8, 8).fits_within(8, 8));
    }

    #[test]
    fn test_overflowing_region_never_fits() {
        let region = Region::new(u32::MAX, 0, 2, 1);
        assert!(!region.fits_within(u32::MAX, u32::MAX));
    }
}
