use thiserror::Error;

/// Fatal errors of an MPD computation. Conditions that only degrade the result (no points within the
/// analysis radius, no computable profile) are not errors, they are reported as an advisory on the result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MpdError {
    /// The point cloud contains no points, so no center can be derived from it
    #[error("The point cloud contains no points")]
    EmptyInput,
    /// The parameters of the computation are out of their valid range
    #[error("Invalid MPD parameters: {reason}")]
    InvalidParameters { reason: String },
}

pub type Result<T> = std::result::Result<T, MpdError>;
