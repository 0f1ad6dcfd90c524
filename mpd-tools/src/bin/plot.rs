use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{value_t, App, Arg};
use log::{info, warn};
use mpd_algorithms::{
    minmax::minmax_height,
    trace::{surface_overview, trace_profile, ProfileTrace, SurfaceOverview},
};
use mpd_core::{
    config::{DetrendMode, MpdParameters, DEFAULT_PROFILE_COUNT, DEFAULT_RADIUS, DEFAULT_TOLERANCE},
    math::{minmax, AABB},
};
use mpd_io::{ascii::DEFAULT_FORMAT, base::read_all_with_format};
use plotters::prelude::*;

const PLOT_SIZE: (u32, u32) = (1024, 768);
const SURFACE_PLOT_SIZE: (u32, u32) = (1600, 768);

struct Args {
    pub input_file: PathBuf,
    pub format: String,
    pub params: MpdParameters,
    pub profile_index: usize,
    pub surface_plot: Option<PathBuf>,
    pub profile_plot: Option<PathBuf>,
}

fn get_args() -> Result<Args> {
    let default_radius = DEFAULT_RADIUS.to_string();
    let default_profile_count = DEFAULT_PROFILE_COUNT.to_string();
    let default_tolerance = DEFAULT_TOLERANCE.to_string();

    let matches = App::new("mpd plot")
        .version("0.1")
        .about("Plots the analysis region of a surface scan and the trace of a single profile")
        .arg(
            Arg::with_name("INPUT")
                .short("i")
                .takes_value(true)
                .value_name("INPUT")
                .help("Input point file")
                .required(true),
        )
        .arg(
            Arg::with_name("PROFILE")
                .short("p")
                .long("profile")
                .takes_value(true)
                .value_name("PROFILE")
                .help("0-based index of the profile to plot")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("SURFACE_PLOT")
                .long("surface")
                .takes_value(true)
                .value_name("SURFACE_PLOT")
                .help("Output PNG file with a top view and a 3D view of the analysis region"),
        )
        .arg(
            Arg::with_name("PROFILE_PLOT")
                .long("profile-plot")
                .takes_value(true)
                .value_name("PROFILE_PLOT")
                .help("Output PNG file for the profile trace"),
        )
        .arg(
            Arg::with_name("RADIUS")
                .short("r")
                .long("radius")
                .takes_value(true)
                .default_value(&default_radius),
        )
        .arg(
            Arg::with_name("PROFILES")
                .short("n")
                .long("profiles")
                .takes_value(true)
                .default_value(&default_profile_count),
        )
        .arg(
            Arg::with_name("TOLERANCE")
                .short("t")
                .long("tolerance")
                .takes_value(true)
                .default_value(&default_tolerance),
        )
        .arg(Arg::with_name("DETREND").long("detrend"))
        .arg(
            Arg::with_name("FORMAT")
                .long("format")
                .takes_value(true)
                .default_value(DEFAULT_FORMAT),
        )
        .get_matches();

    let params = MpdParameters::new(
        value_t!(matches, "RADIUS", f64)?,
        value_t!(matches, "PROFILES", usize)?,
        value_t!(matches, "TOLERANCE", f64)?,
        DetrendMode::from(matches.is_present("DETREND")),
    )?;

    Ok(Args {
        input_file: PathBuf::from(matches.value_of("INPUT").unwrap()),
        format: matches.value_of("FORMAT").unwrap().to_string(),
        params,
        profile_index: value_t!(matches, "PROFILE", usize)?,
        surface_plot: matches.value_of("SURFACE_PLOT").map(PathBuf::from),
        profile_plot: matches.value_of("PROFILE_PLOT").map(PathBuf::from),
    })
}

/// Maps `t` in `[0, 1]` from blue (low) to red (high)
fn height_color(t: f64) -> HSLColor {
    HSLColor(0.66 * (1.0 - t.max(0.0).min(1.0)), 0.85, 0.5)
}

/// Axis ranges shared by the top view and the 3D view of the analysis region
struct SurfaceExtent {
    region: AABB<f64>,
    min_height: f64,
    max_height: f64,
}

impl SurfaceExtent {
    fn of(overview: &SurfaceOverview) -> Self {
        let (min_height, max_height) = minmax_height(&overview.points).unwrap_or((0.0, 0.0));
        Self {
            region: AABB::from_point(overview.center).padded(overview.radius * 1.05 + 1e-3),
            min_height,
            max_height,
        }
    }

    /// Height span used for coloring, never zero
    fn height_range(&self) -> f64 {
        if self.max_height > self.min_height {
            self.max_height - self.min_height
        } else {
            1.0
        }
    }

    fn height_axis(&self) -> std::ops::Range<f64> {
        let margin = self.height_range() * 0.05 + 1e-3;
        self.min_height - margin..self.max_height + margin
    }
}

fn draw_surface(overview: &SurfaceOverview, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, SURFACE_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Analysis surface", ("sans-serif", 28))?;
    let (top_view, perspective) = root.split_horizontally((SURFACE_PLOT_SIZE.0 / 2) as i32);

    let extent = SurfaceExtent::of(overview);
    let height_range = extent.height_range();
    let color_of = |height: f64| height_color((height - extent.min_height) / height_range);

    let (cx, cy) = (overview.center.x, overview.center.y);
    let region = &extent.region;
    let mut chart = ChartBuilder::on(&top_view)
        .caption("Top view (2D)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            region.min().x..region.max().x,
            region.min().y..region.max().y,
        )?;
    chart
        .configure_mesh()
        .x_desc("X (mm)")
        .y_desc("Y (mm)")
        .draw()?;

    chart.draw_series(
        overview
            .points
            .iter()
            .map(|p| Circle::new((p.x(), p.y()), 2, color_of(p.height).filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            (0..=360).map(|deg| {
                let angle = (deg as f64).to_radians();
                (
                    cx + overview.radius * angle.cos(),
                    cy + overview.radius * angle.sin(),
                )
            }),
            RED.stroke_width(2),
        ))?
        .label(format!("Analysis radius ({} mm)", overview.radius))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart
        .draw_series(std::iter::once(Cross::new((cx, cy), 8, RED.stroke_width(2))))?
        .label("Center")
        .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    // The vertical axis of a 3D chart is its second coordinate, so heights go in the middle
    let mut chart = ChartBuilder::on(&perspective)
        .caption("Surface (3D)", ("sans-serif", 24))
        .margin(10)
        .build_cartesian_3d(
            region.min().x..region.max().x,
            extent.height_axis(),
            region.min().y..region.max().y,
        )?;
    chart.with_projection(|mut projection| {
        projection.pitch = 0.5;
        projection.yaw = 0.6;
        projection.scale = 0.8;
        projection.into_matrix()
    });
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()?;
    chart.draw_series(
        overview
            .points
            .iter()
            .map(|p| Circle::new((p.x(), p.height, p.y()), 1, color_of(p.height).filled())),
    )?;

    root.present()?;
    Ok(())
}

fn draw_profile(trace: &ProfileTrace, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (min_position, max_position) =
        minmax(trace.samples.iter().map(|s| s.position)).unwrap_or((-1.0, 1.0));
    let (min_height, max_height) = minmax(
        trace
            .samples
            .iter()
            .flat_map(|s| vec![s.height, s.trend, s.leveled])
            .chain(std::iter::once(0.0)),
    )
    .unwrap_or((-1.0, 1.0));
    let position_margin = (max_position - min_position) * 0.02 + 1e-3;
    let height_margin = (max_height - min_height) * 0.05 + 1e-3;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Profile no. {}", trace.direction.index()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            min_position - position_margin..max_position + position_margin,
            min_height - height_margin..max_height + height_margin,
        )?;
    chart
        .configure_mesh()
        .x_desc("Distance along the profile (mm)")
        .y_desc("Height (mm)")
        .draw()?;

    chart
        .draw_series(
            trace
                .samples
                .iter()
                .map(|s| Circle::new((s.position, s.height), 4, BLUE.stroke_width(1))),
        )?
        .label("Original heights")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.stroke_width(1)));
    chart
        .draw_series(LineSeries::new(
            trace.samples.iter().map(|s| (s.position, s.trend)),
            RED.stroke_width(2),
        ))?
        .label("Trend line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart
        .draw_series(
            trace
                .samples
                .iter()
                .map(|s| Circle::new((s.position, s.leveled), 3, GREEN.filled())),
        )?
        .label("Leveled heights")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.filled()));
    chart
        .draw_series(LineSeries::new(
            vec![(min_position, 0.0), (max_position, 0.0)],
            &BLACK,
        ))?
        .label("Zero reference")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    if args.surface_plot.is_none() && args.profile_plot.is_none() {
        warn!("Neither --surface nor --profile-plot given, nothing to plot");
        return Ok(());
    }

    let cloud = read_all_with_format(&args.input_file, &args.format)?;

    if let Some(path) = &args.surface_plot {
        let overview = surface_overview(&cloud, &args.params)?;
        draw_surface(&overview, path).map_err(|e| anyhow!("Could not draw surface plot: {}", e))?;
        info!("Wrote surface plot {}", path.display());
    }

    if let Some(path) = &args.profile_plot {
        match trace_profile(&cloud, &args.params, args.profile_index)? {
            Some(trace) => {
                draw_profile(&trace, path)
                    .map_err(|e| anyhow!("Could not draw profile plot: {}", e))?;
                info!("Wrote profile plot {}", path.display());
            }
            None => warn!(
                "Profile {} has fewer than two points, no profile plot was written",
                args.profile_index
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpd_core::{containers::SurfacePoint, nalgebra::Point2};

    fn overview(heights: &[f64]) -> SurfaceOverview {
        SurfaceOverview {
            center: Point2::new(10.0, -5.0),
            radius: 4.0,
            points: heights
                .iter()
                .enumerate()
                .map(|(i, h)| SurfacePoint::new(*h, 10.0 + i as f64, -5.0 - i as f64))
                .collect(),
        }
    }

    #[test]
    fn test_surface_extent_covers_region_and_heights() {
        let overview = overview(&[0.5, -1.5, 2.0, 0.0]);
        let extent = SurfaceExtent::of(&overview);
        assert_eq!(extent.height_range(), 3.5);
        let axis = extent.height_axis();
        assert!(overview.points.heights().all(|h| axis.contains(&h)));
        assert!(overview.points.iter().all(|p| {
            p.x() >= extent.region.min().x
                && p.x() <= extent.region.max().x
                && p.y() >= extent.region.min().y
                && p.y() <= extent.region.max().y
        }));
    }

    #[test]
    fn test_surface_extent_of_flat_surface() {
        let extent = SurfaceExtent::of(&overview(&[1.0, 1.0]));
        assert_eq!(extent.height_range(), 1.0);
        let axis = extent.height_axis();
        assert!(axis.start < 1.0 && axis.end > 1.0);
    }
}
