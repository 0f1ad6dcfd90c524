#![warn(clippy::all)]

//! Core data structures for computing the Mean Profile Depth (MPD) of scanned surfaces
//!
//! A surface scan is a cloud of points, each with a planar position and a height. This crate holds
//! the in-memory representation of such a scan ([PointCloud](crate::containers::PointCloud)), the
//! small amount of geometry the MPD computation needs ([AABB](crate::math::AABB)) and the parameters
//! of a computation ([MpdParameters](crate::config::MpdParameters)). The algorithms themselves live
//! in the `mpd-algorithms` crate.

pub extern crate nalgebra;

/// Parameters of an MPD computation
pub mod config;
/// Point cloud containers
pub mod containers;
/// Errors that abort an MPD computation
pub mod error;
/// Useful mathematical tools when working with surface point clouds
pub mod math;
