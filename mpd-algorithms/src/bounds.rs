use log::info;

use crate::minmax::minmax_position;
use mpd_core::{
    containers::PointCloud,
    error::{MpdError, Result},
    math::AABB,
    nalgebra::Point2,
};

/// Calculate the bounding box of the planar positions of the points in the given `cloud`. Returns `None` if the
/// cloud contains zero points
pub fn calculate_bounds(cloud: &PointCloud) -> Option<AABB<f64>> {
    let (pos_min, pos_max) = minmax_position(cloud)?;
    Some(AABB::from_min_max_unchecked(pos_min, pos_max))
}

/// Calculates the center of the given `cloud`. The center is the midpoint of the axis-aligned bounding box of
/// all points, independent of how the points are distributed within that box. It is always derived from the
/// full point cloud, before any filtering
///
/// # Errors
///
/// Returns `MpdError::EmptyInput` if `cloud` contains no points
pub fn calculate_center(cloud: &PointCloud) -> Result<Point2<f64>> {
    let bounds = calculate_bounds(cloud).ok_or(MpdError::EmptyInput)?;
    let center = bounds.center();
    info!("Center of the sample (X, Y): ({:.4}, {:.4})", center.x, center.y);
    Ok(center)
}
