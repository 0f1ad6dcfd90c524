use mpd_core::containers::{PointCloud, SurfacePoint};
use rand::{distributions::Uniform, seq::SliceRandom, Rng};

/// Random surface with positions uniformly distributed in `[-extent, extent]²` and heights in `[-1, 1]`
pub(crate) fn random_cloud<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f64) -> PointCloud {
    let position_distribution = Uniform::new_inclusive(-extent, extent);
    let height_distribution = Uniform::new_inclusive(-1.0, 1.0);
    (0..count)
        .map(|_| {
            SurfacePoint::new(
                rng.sample(height_distribution),
                rng.sample(position_distribution),
                rng.sample(position_distribution),
            )
        })
        .collect()
}

/// Dense grid of `(2 * half_size + 1)²` points with spacing `step`, centered at the origin, with heights
/// given by `height_fn(x, y)`
pub(crate) fn grid_cloud<F: Fn(f64, f64) -> f64>(
    half_size: i32,
    step: f64,
    height_fn: F,
) -> PointCloud {
    let mut cloud = PointCloud::new();
    for ix in -half_size..=half_size {
        for iy in -half_size..=half_size {
            let x = ix as f64 * step;
            let y = iy as f64 * step;
            cloud.push(SurfacePoint::new(height_fn(x, y), x, y));
        }
    }
    cloud
}

pub(crate) fn shuffled<R: Rng + ?Sized>(cloud: &PointCloud, rng: &mut R) -> PointCloud {
    let mut points = cloud.points().to_vec();
    points.shuffle(rng);
    points.into()
}

pub(crate) fn with_height_offset(cloud: &PointCloud, offset: f64) -> PointCloud {
    cloud.iter().map(|p| p.with_height_offset(offset)).collect()
}
