use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{value_t, App, Arg};
use log::info;
use mpd_core::containers::SurfacePoint;
use rand::{distributions::Uniform, rngs::SmallRng, Rng, SeedableRng};

struct Args {
    pub output_file: PathBuf,
    pub count: usize,
    pub extent: f64,
    pub tilt: f64,
    pub seed: u64,
}

fn get_args() -> Result<Args> {
    let matches = App::new("mpd gen_surface")
        .version("0.1")
        .about("Generates a synthetic textured surface scan in 'hxy' format")
        .arg(
            Arg::with_name("OUTPUT")
                .short("o")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Output point file")
                .required(true),
        )
        .arg(
            Arg::with_name("COUNT")
                .short("n")
                .takes_value(true)
                .value_name("COUNT")
                .help("Number of points")
                .default_value("200000"),
        )
        .arg(
            Arg::with_name("EXTENT")
                .long("extent")
                .takes_value(true)
                .value_name("EXTENT")
                .help("Side length of the square scan area in mm")
                .default_value("100"),
        )
        .arg(
            Arg::with_name("TILT")
                .long("tilt")
                .takes_value(true)
                .value_name("TILT")
                .help("Slope of a planar tilt along the x axis, in mm per mm")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("SEED")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("Seed of the random number generator")
                .default_value("14823937"),
        )
        .get_matches();

    Ok(Args {
        output_file: PathBuf::from(matches.value_of("OUTPUT").unwrap()),
        count: value_t!(matches, "COUNT", usize)?,
        extent: validate_extent(value_t!(matches, "EXTENT", f64)?)?,
        tilt: value_t!(matches, "TILT", f64)?,
        seed: value_t!(matches, "SEED", u64)?,
    })
}

fn validate_extent(extent: f64) -> Result<f64> {
    if !extent.is_finite() || extent <= 0.0 {
        bail!("Extent must be a positive number, got {}", extent);
    }
    Ok(extent)
}

/// A round aggregate protruding from the surface
struct Aggregate {
    x: f64,
    y: f64,
    radius: f64,
    height: f64,
}

impl Aggregate {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        let d2 = (x - self.x).powi(2) + (y - self.y).powi(2);
        let r2 = self.radius * self.radius;
        if d2 >= r2 {
            0.0
        } else {
            self.height * (1.0 - d2 / r2).sqrt()
        }
    }
}

fn gen_surface<R: Rng>(rng: &mut R, args: &Args) -> Vec<SurfacePoint> {
    let position_distribution = Uniform::new(0.0, args.extent);
    let radius_distribution = Uniform::new(1.0, 4.0);
    let height_distribution = Uniform::new(0.2, 1.5);
    let noise_distribution = Uniform::new(-0.02, 0.02);

    let aggregate_count = ((args.extent * args.extent) / 20.0) as usize;
    let aggregates = (0..aggregate_count)
        .map(|_| Aggregate {
            x: rng.sample(position_distribution),
            y: rng.sample(position_distribution),
            radius: rng.sample(radius_distribution),
            height: rng.sample(height_distribution),
        })
        .collect::<Vec<_>>();

    (0..args.count)
        .map(|_| {
            let x = rng.sample(position_distribution);
            let y = rng.sample(position_distribution);
            let texture = aggregates
                .iter()
                .map(|a| a.height_at(x, y))
                .fold(0.0, f64::max);
            let height = texture + rng.sample(noise_distribution) + args.tilt * x;
            SurfacePoint::new(height, x, y)
        })
        .collect()
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let points = gen_surface(&mut rng, &args);

    let file = File::create(&args.output_file).with_context(|| {
        format!("Could not open file {} for writing", args.output_file.display())
    })?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "# height x y")?;
    for point in &points {
        writeln!(writer, "{:.6} {:.6} {:.6}", point.height, point.x(), point.y())?;
    }
    writer.flush()?;

    info!(
        "Wrote {} points to {}",
        points.len(),
        args.output_file.display()
    );
    Ok(())
}
