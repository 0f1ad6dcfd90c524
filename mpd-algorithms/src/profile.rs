use std::f64::consts::PI;

use mpd_core::{
    containers::PointCloud,
    nalgebra::{Point2, Vector2},
};

/// Direction of one radial profile. Profiles are undirected lines through the center, so `profile_count`
/// profiles are evenly spaced over the half-open angle range `[0, π)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDirection {
    index: usize,
    angle: f64,
    direction: Vector2<f64>,
}

impl ProfileDirection {
    /// Creates the direction of the profile with the 0-based `index` out of `profile_count` profiles. The angle
    /// is `index * (π / profile_count)`
    ///
    /// # Panics
    ///
    /// If `profile_count` is zero or `index >= profile_count`
    pub fn new(index: usize, profile_count: usize) -> Self {
        if profile_count == 0 {
            panic!("profile_count must be at least 1");
        }
        if index >= profile_count {
            panic!(
                "Profile index {} out of range for {} profiles",
                index, profile_count
            );
        }
        let angle = index as f64 * (PI / profile_count as f64);
        Self {
            index,
            angle,
            direction: Vector2::new(angle.cos(), angle.sin()),
        }
    }

    /// 0-based index of this profile
    pub fn index(&self) -> usize {
        self.index
    }

    /// Angle of this profile in radians, measured from the x-axis
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit vector along this profile
    pub fn direction(&self) -> &Vector2<f64> {
        &self.direction
    }

    /// Distance of a point with the planar `offset` from the center to the centerline of this profile,
    /// `|vx * dy - vy * dx|`
    pub fn perpendicular_distance(&self, offset: &Vector2<f64>) -> f64 {
        (self.direction.x * offset.y - self.direction.y * offset.x).abs()
    }

    /// Signed position along this profile of a point with the planar `offset` from the center,
    /// `dx * vx + dy * vy`
    pub fn longitudinal_position(&self, offset: &Vector2<f64>) -> f64 {
        offset.x * self.direction.x + offset.y * self.direction.y
    }
}

/// A point of a profile, reduced to its height and its signed longitudinal position along the profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub position: f64,
    pub height: f64,
}

/// All points of the analysis region that lie within the tolerance band around one profile's centerline.
/// Profiles of different directions may share points
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    direction: ProfileDirection,
    points: Vec<ProfilePoint>,
}

impl Profile {
    pub fn new(direction: ProfileDirection, points: Vec<ProfilePoint>) -> Self {
        Self { direction, points }
    }

    pub fn direction(&self) -> &ProfileDirection {
        &self.direction
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.height)
    }

    /// Returns a profile with the same direction and positions but with heights replaced by `height_fn(point)`
    pub fn map_heights<F: Fn(&ProfilePoint) -> f64>(&self, height_fn: F) -> Self {
        Self {
            direction: self.direction,
            points: self
                .points
                .iter()
                .map(|p| ProfilePoint {
                    position: p.position,
                    height: height_fn(p),
                })
                .collect(),
        }
    }
}

/// Collects the profile along `direction` from the points of `circle`. A point belongs to the profile if its
/// perpendicular distance to the line through `center` along `direction` is less than or equal to `tolerance`.
/// The resulting profile can contain any number of points, including zero
pub fn assign_profile(
    circle: &PointCloud,
    center: &Point2<f64>,
    direction: ProfileDirection,
    tolerance: f64,
) -> Profile {
    let points = circle
        .iter()
        .filter_map(|point| {
            let offset = point.offset_from(center);
            if direction.perpendicular_distance(&offset) <= tolerance {
                Some(ProfilePoint {
                    position: direction.longitudinal_position(&offset),
                    height: point.height,
                })
            } else {
                None
            }
        })
        .collect();
    Profile::new(direction, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use mpd_core::containers::SurfacePoint;

    fn cross_cloud() -> PointCloud {
        vec![
            SurfacePoint::new(0.0, -1.0, 0.0),
            SurfacePoint::new(2.0, 1.0, 0.0),
            SurfacePoint::new(1.0, 0.0, -1.0),
            SurfacePoint::new(1.0, 0.0, 1.0),
        ]
        .into()
    }

    #[test]
    fn test_angles_cover_half_circle() {
        let angles = (0..4)
            .map(|i| ProfileDirection::new(i, 4).angle())
            .collect::<Vec<_>>();
        assert_eq!(angles[0], 0.0);
        assert_approx_eq!(angles[1], PI / 4.0);
        assert_approx_eq!(angles[2], PI / 2.0);
        assert_approx_eq!(angles[3], 3.0 * PI / 4.0);
        assert!(angles.iter().all(|a| *a < PI));
    }

    #[test]
    fn test_direction_is_unit_vector() {
        for i in 0..7 {
            let direction = ProfileDirection::new(i, 7);
            assert_approx_eq!(direction.direction().norm(), 1.0);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        ProfileDirection::new(3, 3);
    }

    #[test]
    fn test_horizontal_profile_picks_x_extremes() {
        let profile = assign_profile(
            &cross_cloud(),
            &Point2::new(0.0, 0.0),
            ProfileDirection::new(0, 2),
            0.01,
        );
        assert_eq!(
            profile.points(),
            &[
                ProfilePoint {
                    position: -1.0,
                    height: 0.0
                },
                ProfilePoint {
                    position: 1.0,
                    height: 2.0
                }
            ]
        );
    }

    #[test]
    fn test_vertical_profile_picks_y_extremes() {
        let profile = assign_profile(
            &cross_cloud(),
            &Point2::new(0.0, 0.0),
            ProfileDirection::new(1, 2),
            0.01,
        );
        assert_eq!(profile.len(), 2);
        let positions = profile.positions().collect::<Vec<_>>();
        assert_approx_eq!(positions[0], -1.0);
        assert_approx_eq!(positions[1], 1.0);
        assert!(profile.heights().all(|h| h == 1.0));
    }

    #[test]
    fn test_tolerance_band_is_inclusive() {
        let cloud: PointCloud = vec![
            SurfacePoint::new(0.0, 2.0, 0.5),
            SurfacePoint::new(0.0, 2.0, -0.5),
            SurfacePoint::new(0.0, 2.0, 0.75),
        ]
        .into();
        let profile = assign_profile(
            &cloud,
            &Point2::new(0.0, 0.0),
            ProfileDirection::new(0, 1),
            0.5,
        );
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn test_profiles_may_share_points() {
        let cloud: PointCloud = vec![SurfacePoint::new(1.0, 0.0, 0.0)].into();
        let center = Point2::new(0.0, 0.0);
        for i in 0..5 {
            let profile = assign_profile(&cloud, &center, ProfileDirection::new(i, 5), 0.0);
            assert_eq!(profile.len(), 1);
            assert_eq!(profile.points()[0].position, 0.0);
        }
    }

    #[test]
    fn test_diagonal_profile_uses_signed_projection() {
        let cloud: PointCloud = vec![
            SurfacePoint::new(0.0, 1.0, 1.0),
            SurfacePoint::new(0.0, -2.0, -2.0),
            SurfacePoint::new(0.0, 1.0, -1.0),
        ]
        .into();
        let profile = assign_profile(
            &cloud,
            &Point2::new(0.0, 0.0),
            ProfileDirection::new(1, 4),
            1e-9,
        );
        assert_eq!(profile.len(), 2);
        assert_approx_eq!(profile.points()[0].position, 2.0_f64.sqrt());
        assert_approx_eq!(profile.points()[1].position, -8.0_f64.sqrt());
    }
}
