use nalgebra::{Point2, Scalar, Vector2};

/// Helper trait for computing minimum and maximum values for types. This enables the same min/max
/// accumulation for scalar heights and for planar positions
pub trait MinMax {
    /// Computes the infimum of this value and `other`. For scalar types, the infimum is simply the
    /// minimum of the two values, for vector types, this is the component-wise minimum
    ///
    /// # Example
    /// ```
    /// use mpd_core::math::MinMax;
    /// # use mpd_core::nalgebra::Vector2;
    ///
    /// assert_eq!(5.0f64.infimum(&3.0), 3.0);
    /// assert_eq!(Vector2::new(1.0, 2.0).infimum(&Vector2::new(2.0, 1.0)), Vector2::new(1.0, 1.0));
    /// ```
    fn infimum(&self, other: &Self) -> Self;
    /// Computes the supremum of this value and `other`. For scalar types, the supremum is simply the
    /// maximum of the two values, for vector types, this is the component-wise maximum
    ///
    /// # Example
    /// ```
    /// use mpd_core::math::MinMax;
    /// # use mpd_core::nalgebra::Vector2;
    ///
    /// assert_eq!(5.0f64.supremum(&3.0), 5.0);
    /// assert_eq!(Vector2::new(1.0, 2.0).supremum(&Vector2::new(2.0, 1.0)), Vector2::new(2.0, 2.0));
    /// ```
    fn supremum(&self, other: &Self) -> Self;
}

macro_rules! impl_minmax_for_float_type {
    ($type:tt) => {
        impl MinMax for $type {
            fn infimum(&self, other: &Self) -> Self {
                if *self < *other {
                    *self
                } else {
                    *other
                }
            }

            fn supremum(&self, other: &Self) -> Self {
                if *self > *other {
                    *self
                } else {
                    *other
                }
            }
        }
    };
}

impl_minmax_for_float_type! {f32}
impl_minmax_for_float_type! {f64}

impl<T: MinMax + Scalar> MinMax for Vector2<T> {
    fn infimum(&self, other: &Self) -> Self {
        Vector2::new(self.x.infimum(&other.x), self.y.infimum(&other.y))
    }

    fn supremum(&self, other: &Self) -> Self {
        Vector2::new(self.x.supremum(&other.x), self.y.supremum(&other.y))
    }
}

impl<T: MinMax + Scalar> MinMax for Point2<T> {
    fn infimum(&self, other: &Self) -> Self {
        Point2::new(self.x.infimum(&other.x), self.y.infimum(&other.y))
    }

    fn supremum(&self, other: &Self) -> Self {
        Point2::new(self.x.supremum(&other.x), self.y.supremum(&other.y))
    }
}

/// Folds the given values into their `(min, max)` pair. Returns `None` for an empty iterator
/// ```
/// # use mpd_core::math::minmax;
/// assert_eq!(minmax([3.0, -1.0, 2.0].iter().copied()), Some((-1.0, 3.0)));
/// assert_eq!(minmax(std::iter::empty::<f64>()), None);
/// ```
pub fn minmax<T: MinMax + Copy, I: IntoIterator<Item = T>>(values: I) -> Option<(T, T)> {
    values.into_iter().fold(None, |acc, val| match acc {
        None => Some((val, val)),
        Some((old_min, old_max)) => Some((val.infimum(&old_min), val.supremum(&old_max))),
    })
}
