use crate::config::ConfigError;

/// Drawable area in pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn radius_range(&self) -> RadiusRange {
        let max = self.shorter_side() / 3.0;
        RadiusRange { min: max / 2.0, max }
    }
}

/// Radii handed out to a circle set. Derived from the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadiusRange {
    pub min: f32,
    pub max: f32,
}

impl RadiusRange {
    pub fn marker_radius(&self) -> f32 {
        self.min / 20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_range_follows_shorter_side() {
        let vp = Viewport::new(900.0, 600.0).unwrap();
        let range = vp.radius_range();
        assert_eq!(range.max, 200.0);
        assert_eq!(range.min, 100.0);
        assert_eq!(range.marker_radius(), 5.0);

        let tall = Viewport::new(300.0, 1200.0).unwrap();
        assert_eq!(tall.radius_range().max, 100.0);
    }

    #[test]
    fn rejects_empty_viewport() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
    }
}
