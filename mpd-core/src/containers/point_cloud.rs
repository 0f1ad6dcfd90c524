use std::iter::FromIterator;
use std::ops::Index;

use super::SurfacePoint;

/// An in-memory surface scan. The order of the points carries no meaning, all algorithms on a
/// `PointCloud` produce the same result for any permutation of its points
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointCloud {
    points: Vec<SurfacePoint>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point. Loaders use this while building the cloud, algorithms only ever read from a `PointCloud`
    pub fn push(&mut self, point: SurfacePoint) {
        self.points.push(point);
    }

    pub fn extend<I: IntoIterator<Item = SurfacePoint>>(&mut self, points: I) {
        self.points.extend(points);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SurfacePoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// Iterator over the heights of all points
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.height)
    }
}

impl From<Vec<SurfacePoint>> for PointCloud {
    fn from(points: Vec<SurfacePoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<SurfacePoint> for PointCloud {
    fn from_iter<I: IntoIterator<Item = SurfacePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a SurfacePoint;
    type IntoIter = std::slice::Iter<'a, SurfacePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Index<usize> for PointCloud {
    type Output = SurfacePoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_from_triples() {
        let cloud = [(0.0, -1.0, 0.0), (2.0, 1.0, 0.0)]
            .iter()
            .copied()
            .map(SurfacePoint::from)
            .collect::<PointCloud>();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[1].height, 2.0);
        assert_eq!(cloud[1].x(), 1.0);
        assert_eq!(cloud.heights().collect::<Vec<_>>(), vec![0.0, 2.0]);
    }

    #[test]
    fn test_height_offset_keeps_position() {
        let point = SurfacePoint::new(1.0, 2.0, 3.0);
        let shifted = point.with_height_offset(0.5);
        assert_eq!(shifted.height, 1.5);
        assert_eq!(shifted.position, point.position);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let cloud: PointCloud = vec![SurfacePoint::new(0.25, 1.0, -1.0)].into();
        let json = serde_json::to_string(&cloud).unwrap();
        let parsed: PointCloud = serde_json::from_str(&json).unwrap();
        assert_eq!(cloud, parsed);
    }
}
