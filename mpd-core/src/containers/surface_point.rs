use nalgebra::{Point2, Vector2};

/// A single sample of a scanned surface: the `height` (z) of the surface at the planar `position` (x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePoint {
    pub height: f64,
    pub position: Point2<f64>,
}

impl SurfacePoint {
    /// Creates a new `SurfacePoint` from a `(height, x, y)` triple, which is the column order of the scanner exports
    pub fn new(height: f64, x: f64, y: f64) -> Self {
        Self {
            height,
            position: Point2::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the planar offset of this point relative to `origin`
    pub fn offset_from(&self, origin: &Point2<f64>) -> Vector2<f64> {
        self.position - origin
    }

    /// Returns a copy of this point with `offset` added to its height
    pub fn with_height_offset(&self, offset: f64) -> Self {
        Self {
            height: self.height + offset,
            position: self.position,
        }
    }
}

impl Default for SurfacePoint {
    fn default() -> Self {
        Self {
            height: 0.0,
            position: Point2::origin(),
        }
    }
}

impl From<(f64, f64, f64)> for SurfacePoint {
    fn from((height, x, y): (f64, f64, f64)) -> Self {
        Self::new(height, x, y)
    }
}
