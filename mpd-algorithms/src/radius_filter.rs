use mpd_core::{containers::PointCloud, nalgebra::Point2};

/// Returns all points of `cloud` whose planar distance to `center` is less than or equal to `radius`. The
/// result may be empty, which is a valid outcome and not an error
pub fn filter_by_radius(cloud: &PointCloud, center: &Point2<f64>, radius: f64) -> PointCloud {
    cloud
        .iter()
        .filter(|point| point.offset_from(center).norm() <= radius)
        .copied()
        .collect()
}
