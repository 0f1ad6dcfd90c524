use std::fmt::Display;

use log::{debug, info, warn};
use mpd_core::{
    config::{DetrendMode, MpdParameters},
    containers::PointCloud,
    error::Result,
    nalgebra::Point2,
};
use rayon::prelude::*;

use crate::{
    bounds::calculate_center,
    detrend::level_profile,
    profile::{assign_profile, ProfileDirection},
    profile_statistics::{evaluate_profile, ProfileOutcome, ProfileResult},
    radius_filter::filter_by_radius,
};

/// Non-fatal conditions under which the final MPD is the `0.0` sentinel instead of a computed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpdAdvisory {
    /// No point lies within the radius around the center
    NoPointsInRadius,
    /// Every profile was skipped
    NoValidProfiles,
}

impl Display for MpdAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MpdAdvisory::NoPointsInRadius => write!(f, "no points in radius"),
            MpdAdvisory::NoValidProfiles => write!(f, "no valid profiles"),
        }
    }
}

/// Result of a complete MPD run: the outcome of every profile index in ascending order and the final MPD
#[derive(Debug, Clone, PartialEq)]
pub struct MpdReport {
    parameters: MpdParameters,
    center: Point2<f64>,
    points_in_radius: usize,
    outcomes: Vec<ProfileOutcome>,
    final_mpd: f64,
    advisory: Option<MpdAdvisory>,
}

impl MpdReport {
    /// Creates a report from the outcomes of all profile indices. `outcomes[i]` must be the outcome of the
    /// profile with the 0-based index `i`. The final MPD is aggregated from the computed outcomes
    pub fn new(
        parameters: MpdParameters,
        center: Point2<f64>,
        points_in_radius: usize,
        outcomes: Vec<ProfileOutcome>,
    ) -> Self {
        let (final_mpd, advisory) =
            match aggregate(outcomes.iter().filter_map(ProfileOutcome::result)) {
                Some(mpd) => (mpd, None),
                None => (0.0, Some(MpdAdvisory::NoValidProfiles)),
            };
        Self {
            parameters,
            center,
            points_in_radius,
            outcomes,
            final_mpd,
            advisory,
        }
    }

    /// Creates the degenerate report for an empty analysis region. It has no profile outcomes at all
    pub fn no_points_in_radius(parameters: MpdParameters, center: Point2<f64>) -> Self {
        Self {
            parameters,
            center,
            points_in_radius: 0,
            outcomes: vec![],
            final_mpd: 0.0,
            advisory: Some(MpdAdvisory::NoPointsInRadius),
        }
    }

    pub fn parameters(&self) -> &MpdParameters {
        &self.parameters
    }

    /// Bounding box center of the full point cloud
    pub fn center(&self) -> &Point2<f64> {
        &self.center
    }

    /// Number of points in the circular analysis region
    pub fn points_in_radius(&self) -> usize {
        self.points_in_radius
    }

    /// The outcome of every evaluated profile index, in ascending index order
    pub fn outcomes(&self) -> &[ProfileOutcome] {
        &self.outcomes
    }

    /// The statistics of all valid profiles, in ascending index order. These are the rows of the report
    pub fn rows(&self) -> impl Iterator<Item = &ProfileResult> + '_ {
        self.outcomes.iter().filter_map(ProfileOutcome::result)
    }

    pub fn valid_profile_count(&self) -> usize {
        self.rows().count()
    }

    /// The mean MPD over all valid profiles, or `0.0` if there are none. Check [advisory](MpdReport::advisory)
    /// to tell a computed `0.0` from the sentinel
    pub fn final_mpd(&self) -> f64 {
        self.final_mpd
    }

    pub fn advisory(&self) -> Option<MpdAdvisory> {
        self.advisory
    }

    pub fn has_valid_profiles(&self) -> bool {
        self.advisory.is_none()
    }
}

/// Arithmetic mean of the `mpd` values of `results`. Returns `None` if `results` is empty
pub fn aggregate<'a, I: IntoIterator<Item = &'a ProfileResult>>(results: I) -> Option<f64> {
    let (sum, count) = results
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), result| {
            (sum + result.mpd, count + 1)
        });
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Runs the stages for a single profile index: assignment, optional leveling and statistics
fn evaluate_profile_index(
    circle: &PointCloud,
    center: &Point2<f64>,
    params: &MpdParameters,
    index: usize,
) -> ProfileOutcome {
    let direction = ProfileDirection::new(index, params.profile_count);
    let profile = assign_profile(circle, center, direction, params.tolerance);

    let outcome = if profile.len() < 2 {
        ProfileOutcome::SkippedTooFewPoints
    } else {
        match params.detrend {
            DetrendMode::None => evaluate_profile(&profile),
            DetrendMode::Linear => match level_profile(&profile) {
                Some((_, leveled)) => evaluate_profile(&leveled),
                None => ProfileOutcome::SkippedTooFewPoints,
            },
        }
    };

    match outcome {
        ProfileOutcome::SkippedTooFewPoints => debug!(
            "Profile {}: skipped, {} point(s) within tolerance",
            index + 1,
            profile.len()
        ),
        ProfileOutcome::SkippedEmptyHalf => {
            debug!("Profile {}: skipped, one half is empty", index + 1)
        }
        ProfileOutcome::Computed(_) => {}
    }
    outcome
}

/// Validates `params`, locates the center of `cloud` and selects the analysis region
fn prepare_region(
    cloud: &PointCloud,
    params: &MpdParameters,
) -> Result<(Point2<f64>, PointCloud)> {
    params.validate()?;
    let center = calculate_center(cloud)?;
    let circle = filter_by_radius(cloud, &center, params.radius);
    info!("Points within radius {}: {}", params.radius, circle.len());
    Ok((center, circle))
}

fn finish_report(report: MpdReport) -> MpdReport {
    match report.advisory() {
        Some(MpdAdvisory::NoPointsInRadius) => warn!(
            "No points found within radius {} of the center",
            report.parameters().radius
        ),
        Some(MpdAdvisory::NoValidProfiles) => {
            warn!("No valid profile found with the current parameters")
        }
        None => info!(
            "Final MPD: {:.6} ({} of {} profiles valid)",
            report.final_mpd(),
            report.valid_profile_count(),
            report.parameters().profile_count
        ),
    }
    report
}

/// Computes the Mean Profile Depth of `cloud`. This is the serial reference implementation, see
/// [calculate_mpd_par] for a parallel version that produces identical results.
///
/// The center is the bounding box midpoint of the full cloud. All points within `params.radius` of it form the
/// analysis region, which is sliced into `params.profile_count` profiles evenly spaced over 180°. An empty
/// analysis region or a run without any valid profile is not an error; the report then carries the `0.0`
/// sentinel together with an [MpdAdvisory].
///
/// # Errors
///
/// Returns `MpdError::InvalidParameters` if `params` fails validation and `MpdError::EmptyInput` if `cloud`
/// contains no points
pub fn calculate_mpd(cloud: &PointCloud, params: &MpdParameters) -> Result<MpdReport> {
    let (center, circle) = prepare_region(cloud, params)?;
    if circle.is_empty() {
        return Ok(finish_report(MpdReport::no_points_in_radius(
            params.clone(),
            center,
        )));
    }

    let outcomes = (0..params.profile_count)
        .map(|index| evaluate_profile_index(&circle, &center, params, index))
        .collect();
    Ok(finish_report(MpdReport::new(
        params.clone(),
        center,
        circle.len(),
        outcomes,
    )))
}

/// Computes the Mean Profile Depth of `cloud` in parallel. Profiles are evaluated concurrently and collected in
/// ascending index order, the final aggregation is serial. The result is identical to [calculate_mpd].
///
/// # Errors
///
/// Same as [calculate_mpd]
pub fn calculate_mpd_par(cloud: &PointCloud, params: &MpdParameters) -> Result<MpdReport> {
    let (center, circle) = prepare_region(cloud, params)?;
    if circle.is_empty() {
        return Ok(finish_report(MpdReport::no_points_in_radius(
            params.clone(),
            center,
        )));
    }

    let outcomes = (0..params.profile_count)
        .into_par_iter()
        .map(|index| evaluate_profile_index(&circle, &center, params, index))
        .collect::<Vec<_>>();
    Ok(finish_report(MpdReport::new(
        params.clone(),
        center,
        circle.len(),
        outcomes,
    )))
}
