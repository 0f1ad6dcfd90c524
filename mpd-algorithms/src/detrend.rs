use log::debug;
use mpd_core::math::minmax;

use crate::profile::Profile;

/// A straight line `height = slope * position + intercept` along a profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// The horizontal line at height zero. Subtracting it leaves all heights unchanged
    pub const ZERO: TrendLine = TrendLine {
        slope: 0.0,
        intercept: 0.0,
    };

    /// Ordinary least-squares fit of a degree-1 polynomial to the points `(positions[i], heights[i])`,
    /// minimizing the sum of squared vertical residuals.
    ///
    /// If all positions are identical the slope is undefined. In that case the fit falls back to a horizontal
    /// line through the mean height (`slope = 0`, `intercept = mean(heights)`). Returns `None` if there are no
    /// points at all.
    ///
    /// # Panics
    ///
    /// If `positions` and `heights` have different lengths
    pub fn fit(positions: &[f64], heights: &[f64]) -> Option<Self> {
        if positions.len() != heights.len() {
            panic!(
                "Got {} positions but {} heights",
                positions.len(),
                heights.len()
            );
        }
        if positions.is_empty() {
            return None;
        }

        let count = positions.len() as f64;
        let mean_position = positions.iter().sum::<f64>() / count;
        let mean_height = heights.iter().sum::<f64>() / count;

        let (min_position, max_position) = minmax(positions.iter().copied())?;
        if min_position == max_position {
            return Some(Self {
                slope: 0.0,
                intercept: mean_height,
            });
        }

        let (covariance, variance) = positions.iter().zip(heights.iter()).fold(
            (0.0, 0.0),
            |(covariance, variance), (position, height)| {
                let dp = position - mean_position;
                (
                    covariance + dp * (height - mean_height),
                    variance + dp * dp,
                )
            },
        );
        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: mean_height - slope * mean_position,
        })
    }

    /// Height of this line at `position`
    pub fn evaluate(&self, position: f64) -> f64 {
        self.slope * position + self.intercept
    }

    /// Height of `height` above this line at `position`
    pub fn level(&self, position: f64, height: f64) -> f64 {
        height - self.evaluate(position)
    }
}

/// Fits a [TrendLine] to the heights of `profile` over their longitudinal positions and returns the line together
/// with the leveled profile, in which every height is replaced by its residual to the line. Returns `None` for an
/// empty profile
pub fn level_profile(profile: &Profile) -> Option<(TrendLine, Profile)> {
    let positions = profile.positions().collect::<Vec<_>>();
    let heights = profile.heights().collect::<Vec<_>>();
    let trend = TrendLine::fit(&positions, &heights)?;
    debug!(
        "Profile {}: trend slope={:.6} intercept={:.6}",
        profile.direction().index() + 1,
        trend.slope,
        trend.intercept
    );
    let leveled = profile.map_heights(|p| trend.level(p.position, p.height));
    Some((trend, leveled))
}
