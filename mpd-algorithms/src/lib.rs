#![warn(clippy::all)]
//! Algorithms for computing the Mean Profile Depth (MPD) of a scanned surface.
//!
//! The computation locates the center of the scan, keeps the points within a circular analysis region,
//! slices that region into radial profiles, optionally removes a linear trend from every profile and
//! finally aggregates the peak statistics of all profiles into a single MPD value. The entry points are
//! [calculate_mpd](crate::mpd::calculate_mpd) and [calculate_mpd_par](crate::mpd::calculate_mpd_par).

// Bounding box and center of a point cloud.
pub mod bounds;
// Linear trend removal along a profile.
pub mod detrend;
// Minimum and maximum heights and positions of a point cloud.
pub mod minmax;
// The MPD pipeline and the aggregation of profile statistics into the final result.
pub mod mpd;
// Assignment of points to radial profiles.
pub mod profile;
// Peak and mean statistics of a single profile.
pub mod profile_statistics;
// Selection of the circular analysis region.
pub mod radius_filter;
// Per-point diagnostics of a profile and of the analysis region, used for plotting.
pub mod trace;

#[cfg(test)]
pub(crate) mod test_utils;
