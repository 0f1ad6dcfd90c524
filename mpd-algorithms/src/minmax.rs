use mpd_core::{containers::PointCloud, math::minmax, nalgebra::Point2};

/// Returns the minimum and maximum height within `cloud`. Returns `None` if `cloud` contains no points
pub fn minmax_height(cloud: &PointCloud) -> Option<(f64, f64)> {
    minmax(cloud.heights())
}

/// Returns the component-wise minimum and maximum planar position within `cloud`. Returns `None` if
/// `cloud` contains no points
pub fn minmax_position(cloud: &PointCloud) -> Option<(Point2<f64>, Point2<f64>)> {
    minmax(cloud.iter().map(|p| p.position))
}
