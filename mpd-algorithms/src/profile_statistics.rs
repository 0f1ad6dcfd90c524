use float_ord::FloatOrd;

use crate::profile::{Profile, ProfilePoint};

/// Statistics of a single valid profile. Heights are the leveled heights if detrending was enabled and the raw
/// heights otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileResult {
    /// 1-based index of the profile
    pub index: usize,
    /// Maximum height in the half with longitudinal position `>= 0`
    pub peak1: f64,
    /// Maximum height in the half with longitudinal position `< 0`
    pub peak2: f64,
    /// Mean height over the whole profile
    pub mean: f64,
    /// `(peak1 + peak2) / 2 - mean`
    pub mpd: f64,
}

/// The outcome of evaluating one profile index. Skipped profiles contribute nothing to the final MPD and produce
/// no report row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileOutcome {
    Computed(ProfileResult),
    /// The profile had fewer than two points
    SkippedTooFewPoints,
    /// All points of the profile lie on one side of the center
    SkippedEmptyHalf,
}

impl ProfileOutcome {
    pub fn result(&self) -> Option<&ProfileResult> {
        match self {
            ProfileOutcome::Computed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, ProfileOutcome::Computed(_))
    }
}

fn max_height<'a, I: Iterator<Item = &'a ProfilePoint>>(points: I) -> Option<f64> {
    points.map(|p| FloatOrd(p.height)).max().map(|h| h.0)
}

/// Computes the peak statistics of `profile`. The profile is split into two halves by the sign of the longitudinal
/// position, where a position of exactly zero belongs to the first half. The profile is skipped if it has fewer
/// than two points or if one of the halves is empty
pub fn evaluate_profile(profile: &Profile) -> ProfileOutcome {
    if profile.len() < 2 {
        return ProfileOutcome::SkippedTooFewPoints;
    }

    let peak1 = max_height(profile.points().iter().filter(|p| p.position >= 0.0));
    let peak2 = max_height(profile.points().iter().filter(|p| p.position < 0.0));
    let (peak1, peak2) = match (peak1, peak2) {
        (Some(peak1), Some(peak2)) => (peak1, peak2),
        _ => return ProfileOutcome::SkippedEmptyHalf,
    };

    let mean = profile.heights().sum::<f64>() / profile.len() as f64;
    ProfileOutcome::Computed(ProfileResult {
        index: profile.direction().index() + 1,
        peak1,
        peak2,
        mean,
        mpd: (peak1 + peak2) / 2.0 - mean,
    })
}
