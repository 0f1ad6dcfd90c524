use nalgebra::{ClosedAdd, ClosedSub, Point2, Scalar, Vector2};

/// 2D axis-aligned bounding box in the horizontal plane of a surface scan
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB<T: Scalar + PartialOrd> {
    min: Point2<T>,
    max: Point2<T>,
}

impl<T: Scalar + ClosedSub + PartialOrd + Copy> AABB<T> {
    /// Creates a new AABB from the given minimum and maximum coordinates. Panics if the minimum position is
    /// not less than or equal to the maximum position
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max(nalgebra::Point2::new(0.0, 0.0), nalgebra::Point2::new(1.0, 1.0));
    /// ```
    pub fn from_min_max(min: Point2<T>, max: Point2<T>) -> Self {
        if min.x > max.x || min.y > max.y {
            panic!("AABB::from_min_max: Minimum position must be <= maximum position!");
        }
        Self { min, max }
    }

    /// Creates a new AABB from the given minimum and maximum coordinates. Similar to [from_min_max](AABB::from_min_max)
    /// but performs no checks that min <= max
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(0.0, 0.0), nalgebra::Point2::new(1.0, 1.0));
    /// ```
    pub fn from_min_max_unchecked(min: Point2<T>, max: Point2<T>) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate AABB that contains exactly the given point
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_point(nalgebra::Point2::new(2.0, 3.0));
    /// assert_eq!(bounds.min(), bounds.max());
    /// ```
    pub fn from_point(point: Point2<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns the minimum point of this AABB
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(-1.0, -1.0), nalgebra::Point2::new(1.0, 1.0));
    /// assert_eq!(*bounds.min(), nalgebra::Point2::new(-1.0, -1.0));
    /// ```
    pub fn min(&self) -> &Point2<T> {
        &self.min
    }

    /// Returns the maximum point of this AABB
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(-1.0, -1.0), nalgebra::Point2::new(1.0, 1.0));
    /// assert_eq!(*bounds.max(), nalgebra::Point2::new(1.0, 1.0));
    /// ```
    pub fn max(&self) -> &Point2<T> {
        &self.max
    }

    /// Returns the extent of this AABB. The extent is the size between the minimum and maximum position of this AABB
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(0.0, 0.0), nalgebra::Point2::new(1.0, 2.0));
    /// assert_eq!(bounds.extent(), nalgebra::Vector2::new(1.0, 2.0));
    /// ```
    pub fn extent(&self) -> Vector2<T> {
        self.max - self.min
    }
}

impl AABB<f64> {
    /// Returns the midpoint of this AABB, i.e. `((min.x + max.x) / 2, (min.y + max.y) / 2)`. This is the center
    /// of the box, not the centroid of the points that produced it
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(-1.0, 0.0), nalgebra::Point2::new(3.0, 1.0));
    /// assert_eq!(bounds.center(), nalgebra::Point2::new(1.0, 0.5));
    /// ```
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

impl<T: Scalar + ClosedAdd + ClosedSub + PartialOrd + Copy> AABB<T> {
    /// Returns the bounding box grown by `margin` on every side
    /// ```
    /// # use mpd_core::math::AABB;
    /// let bounds = AABB::from_min_max_unchecked(nalgebra::Point2::new(0.0, 0.0), nalgebra::Point2::new(1.0, 1.0));
    /// let padded = bounds.padded(0.5);
    /// assert_eq!(*padded.min(), nalgebra::Point2::new(-0.5, -0.5));
    /// assert_eq!(*padded.max(), nalgebra::Point2::new(1.5, 1.5));
    /// ```
    pub fn padded(&self, margin: T) -> Self {
        let offset = Vector2::new(margin, margin);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}
