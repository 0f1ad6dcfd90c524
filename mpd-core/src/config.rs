use std::fmt::Display;

use crate::error::{MpdError, Result};

/// Default radius of the circular analysis region, in the units of the point cloud (usually mm)
pub const DEFAULT_RADIUS: f64 = 40.0;
/// Default number of radial profiles. Profiles are evenly spaced over 180°
pub const DEFAULT_PROFILE_COUNT: usize = 180;
/// Default maximum perpendicular distance of a point to the centerline of a profile
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Selects whether a linear trend (tilt) is removed from each profile before its statistics are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DetrendMode {
    /// Use the raw heights
    None,
    /// Fit a least-squares line of height over longitudinal position and subtract it
    Linear,
}

impl DetrendMode {
    pub fn is_enabled(&self) -> bool {
        matches!(self, DetrendMode::Linear)
    }
}

impl Default for DetrendMode {
    fn default() -> Self {
        DetrendMode::None
    }
}

impl From<bool> for DetrendMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            DetrendMode::Linear
        } else {
            DetrendMode::None
        }
    }
}

impl Display for DetrendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetrendMode::None => write!(f, "none"),
            DetrendMode::Linear => write!(f, "linear"),
        }
    }
}

/// All parameters of an MPD computation. This is passed explicitly into the computation, there is no
/// global configuration state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MpdParameters {
    /// Radius of the circular analysis region around the center of the point cloud. Must be finite and >= 0.
    /// A radius of zero only keeps points lying exactly on the center
    pub radius: f64,
    /// Number of radial profiles. Must be > 0
    pub profile_count: usize,
    /// Maximum perpendicular distance of a point to a profile's centerline. Must be finite and >= 0
    pub tolerance: f64,
    pub detrend: DetrendMode,
}

impl MpdParameters {
    /// Creates a new set of parameters and validates them
    ///
    /// # Errors
    ///
    /// Returns `MpdError::InvalidParameters` if one of the values is out of its valid range, see [validate](MpdParameters::validate)
    pub fn new(
        radius: f64,
        profile_count: usize,
        tolerance: f64,
        detrend: DetrendMode,
    ) -> Result<Self> {
        let params = Self {
            radius,
            profile_count,
            tolerance,
            detrend,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that `radius` is finite and non-negative, `profile_count` is non-zero and `tolerance` is finite and
    /// non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(MpdError::InvalidParameters {
                reason: format!("radius must be a non-negative number, got {}", self.radius),
            });
        }
        if self.profile_count == 0 {
            return Err(MpdError::InvalidParameters {
                reason: "profile count must be at least 1".into(),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MpdError::InvalidParameters {
                reason: format!(
                    "tolerance must be a non-negative number, got {}",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }

    pub fn with_detrend(mut self, detrend: DetrendMode) -> Self {
        self.detrend = detrend;
        self
    }
}

impl Default for MpdParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            profile_count: DEFAULT_PROFILE_COUNT,
            tolerance: DEFAULT_TOLERANCE,
            detrend: DetrendMode::None,
        }
    }
}

impl Display for MpdParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "radius={} profiles={} tolerance={} detrend={}",
            self.radius, self.profile_count, self.tolerance, self.detrend
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = MpdParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.profile_count, 180);
        assert!(!params.detrend.is_enabled());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(MpdParameters::new(-1.0, 10, 0.1, DetrendMode::None).is_err());
        assert!(MpdParameters::new(f64::NAN, 10, 0.1, DetrendMode::None).is_err());
        assert!(MpdParameters::new(1.0, 0, 0.1, DetrendMode::None).is_err());
        assert!(MpdParameters::new(1.0, 10, -0.1, DetrendMode::None).is_err());
        assert!(MpdParameters::new(1.0, 10, f64::INFINITY, DetrendMode::None).is_err());
    }

    #[test]
    fn test_zero_radius_and_tolerance_are_valid() {
        assert!(MpdParameters::new(1.0, 1, 0.0, DetrendMode::Linear).is_ok());
        assert!(MpdParameters::new(0.0, 1, 0.1, DetrendMode::None).is_ok());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = MpdParameters::new(1.0, 0, 0.1, DetrendMode::None).unwrap_err();
        assert!(err.to_string().contains("profile count"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_partial_json() {
        let params: MpdParameters =
            serde_json::from_str(r#"{ "radius": 25.0, "detrend": "linear" }"#).unwrap();
        assert_eq!(params.radius, 25.0);
        assert_eq!(params.profile_count, DEFAULT_PROFILE_COUNT);
        assert_eq!(params.detrend, DetrendMode::Linear);
    }
}
