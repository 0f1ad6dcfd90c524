use float_ord::FloatOrd;
use mpd_core::{
    config::MpdParameters,
    containers::PointCloud,
    error::{MpdError, Result},
    nalgebra::Point2,
};

use crate::{
    bounds::calculate_center,
    detrend::{level_profile, TrendLine},
    profile::{assign_profile, ProfileDirection},
    radius_filter::filter_by_radius,
};

/// One point of a [ProfileTrace]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    /// Signed longitudinal position along the profile
    pub position: f64,
    /// Height as read from the point cloud
    pub height: f64,
    /// Height of the trend line at `position`
    pub trend: f64,
    /// `height - trend`
    pub leveled: f64,
}

/// Per-point diagnostics of a single profile, sorted by longitudinal position
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTrace {
    pub direction: ProfileDirection,
    pub trend_line: TrendLine,
    pub samples: Vec<TraceSample>,
}

/// The analysis region of a run as seen from above
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOverview {
    pub center: Point2<f64>,
    pub radius: f64,
    pub points: PointCloud,
}

/// Computes the trace of the profile with the 0-based `profile_index` under `params`. In linear detrend mode the
/// trend is the fitted line, otherwise it is [TrendLine::ZERO] and the leveled heights equal the original heights.
/// Returns `None` if the profile has fewer than two points, since such profiles never enter the computation
///
/// # Errors
///
/// Returns an error if `params` are invalid, if `profile_index` is not less than `params.profile_count` or if
/// `cloud` is empty
pub fn trace_profile(
    cloud: &PointCloud,
    params: &MpdParameters,
    profile_index: usize,
) -> Result<Option<ProfileTrace>> {
    params.validate()?;
    if profile_index >= params.profile_count {
        return Err(MpdError::InvalidParameters {
            reason: format!(
                "profile index {} is out of range for {} profiles",
                profile_index, params.profile_count
            ),
        });
    }
    let center = calculate_center(cloud)?;
    let circle = filter_by_radius(cloud, &center, params.radius);
    let direction = ProfileDirection::new(profile_index, params.profile_count);
    let profile = assign_profile(&circle, &center, direction, params.tolerance);
    if profile.len() < 2 {
        return Ok(None);
    }

    let trend_line = if params.detrend.is_enabled() {
        match level_profile(&profile) {
            Some((trend, _)) => trend,
            None => return Ok(None),
        }
    } else {
        TrendLine::ZERO
    };

    let mut samples = profile
        .points()
        .iter()
        .map(|p| {
            let trend = trend_line.evaluate(p.position);
            TraceSample {
                position: p.position,
                height: p.height,
                trend,
                leveled: p.height - trend,
            }
        })
        .collect::<Vec<_>>();
    samples.sort_by_key(|s| FloatOrd(s.position));

    Ok(Some(ProfileTrace {
        direction,
        trend_line,
        samples,
    }))
}

/// Returns the center, radius and points of the circular analysis region of `cloud`
///
/// # Errors
///
/// Returns an error if `params` are invalid or if `cloud` is empty
pub fn surface_overview(cloud: &PointCloud, params: &MpdParameters) -> Result<SurfaceOverview> {
    params.validate()?;
    let center = calculate_center(cloud)?;
    Ok(SurfaceOverview {
        center,
        radius: params.radius,
        points: filter_by_radius(cloud, &center, params.radius),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::grid_cloud;
    use assert_approx_eq::assert_approx_eq;
    use mpd_core::config::DetrendMode;

    #[test]
    fn test_trace_without_detrend_keeps_heights() {
        let cloud = grid_cloud(5, 1.0, |x, _| 0.1 * x);
        let params = MpdParameters::new(5.0, 2, 1e-6, DetrendMode::None).unwrap();
        let trace = trace_profile(&cloud, &params, 0).unwrap().unwrap();
        assert_eq!(trace.trend_line, TrendLine::ZERO);
        assert_eq!(trace.samples.len(), 11);
        for sample in &trace.samples {
            assert_eq!(sample.trend, 0.0);
            assert_eq!(sample.leveled, sample.height);
        }
    }

    #[test]
    fn test_trace_with_detrend_levels_tilt() {
        let cloud = grid_cloud(5, 1.0, |x, _| 0.1 * x + 2.0);
        let params = MpdParameters::new(5.0, 2, 1e-6, DetrendMode::Linear).unwrap();
        let trace = trace_profile(&cloud, &params, 0).unwrap().unwrap();
        assert_approx_eq!(trace.trend_line.slope, 0.1);
        assert_approx_eq!(trace.trend_line.intercept, 2.0);
        for sample in &trace.samples {
            assert_approx_eq!(sample.leveled, 0.0, 1e-12);
            assert_approx_eq!(sample.trend, sample.height, 1e-12);
        }
        let positions = trace.samples.iter().map(|s| s.position).collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_trace_of_sparse_profile_is_none() {
        let cloud = grid_cloud(5, 1.0, |_, _| 0.0);
        // At 30° the line through the center hits no other grid point
        let params = MpdParameters::new(5.0, 6, 1e-6, DetrendMode::Linear).unwrap();
        assert!(trace_profile(&cloud, &params, 1).unwrap().is_none());
    }

    #[test]
    fn test_trace_index_out_of_range() {
        let cloud = grid_cloud(2, 1.0, |_, _| 0.0);
        let params = MpdParameters::new(5.0, 3, 0.1, DetrendMode::None).unwrap();
        assert!(matches!(
            trace_profile(&cloud, &params, 3),
            Err(MpdError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_surface_overview() {
        let cloud = grid_cloud(4, 1.0, |_, _| 0.0);
        let params = MpdParameters::new(2.0, 3, 0.1, DetrendMode::None).unwrap();
        let overview = surface_overview(&cloud, &params).unwrap();
        assert_eq!(overview.center, Point2::new(0.0, 0.0));
        assert_eq!(overview.radius, 2.0);
        // Grid points with x² + y² <= 4
        assert_eq!(overview.points.len(), 13);
        assert_eq!(
            surface_overview(&PointCloud::new(), &params),
            Err(MpdError::EmptyInput)
        );
    }
}
