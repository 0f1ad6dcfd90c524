#![warn(clippy::all)]
//! Input and output for Mean Profile Depth computations.
//!
//! Point clouds are read from delimited text files through [AsciiReader](crate::ascii::AsciiReader), or through
//! [read_all](crate::base::read_all) which picks the reader from the file extension. Results of a computation are
//! written as delimited text reports with [ReportWriter](crate::report::ReportWriter).

/// Reading of point clouds from delimited text files
pub mod ascii;
/// Common reader trait and the file extension lookup
pub mod base;
/// Writing of MPD reports
pub mod report;
