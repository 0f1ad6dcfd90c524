use std::{fs::File, io::BufReader, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{value_t, App, Arg};
use log::info;
use mpd_algorithms::mpd::{calculate_mpd, calculate_mpd_par, MpdReport};
use mpd_core::config::{
    DetrendMode, MpdParameters, DEFAULT_PROFILE_COUNT, DEFAULT_RADIUS, DEFAULT_TOLERANCE,
};
use mpd_io::{ascii::DEFAULT_FORMAT, base::read_all_with_format, report::write_report};

struct Args {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub params: MpdParameters,
    pub format: String,
    pub parallel: bool,
}

fn load_params(path: &str) -> Result<MpdParameters> {
    let file = File::open(path).with_context(|| format!("Could not open parameter file {}", path))?;
    let params: MpdParameters = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse parameter file {}", path))?;
    params.validate()?;
    Ok(params)
}

fn get_args() -> Result<Args> {
    let default_radius = DEFAULT_RADIUS.to_string();
    let default_profile_count = DEFAULT_PROFILE_COUNT.to_string();
    let default_tolerance = DEFAULT_TOLERANCE.to_string();

    let matches = App::new("mpd")
        .version("0.1")
        .about("Computes the Mean Profile Depth (MPD) of a scanned surface from radial profiles around its center")
        .arg(
            Arg::with_name("INPUT")
                .short("i")
                .takes_value(true)
                .value_name("INPUT")
                .help("Input point file (.xyz, .txt, .asc or .csv)")
                .required(true),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .short("o")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Report file with the statistics of every valid profile and the final MPD")
                .default_value("resultados_mpd.txt"),
        )
        .arg(
            Arg::with_name("RADIUS")
                .short("r")
                .long("radius")
                .takes_value(true)
                .value_name("RADIUS")
                .help("Radius of the circular analysis region around the center")
                .default_value(&default_radius),
        )
        .arg(
            Arg::with_name("PROFILES")
                .short("n")
                .long("profiles")
                .takes_value(true)
                .value_name("PROFILES")
                .help("Number of radial profiles, evenly spaced over 180 degrees")
                .default_value(&default_profile_count),
        )
        .arg(
            Arg::with_name("TOLERANCE")
                .short("t")
                .long("tolerance")
                .takes_value(true)
                .value_name("TOLERANCE")
                .help("Maximum distance of a point to the centerline of a profile")
                .default_value(&default_tolerance),
        )
        .arg(
            Arg::with_name("DETREND")
                .long("detrend")
                .help("Remove a linear trend (tilt) from every profile before computing its statistics"),
        )
        .arg(
            Arg::with_name("PARALLEL")
                .long("parallel")
                .help("Evaluate the profiles in parallel"),
        )
        .arg(
            Arg::with_name("PARAMS")
                .long("params")
                .takes_value(true)
                .value_name("PARAMS")
                .help("JSON file with the parameters. Replaces --radius, --profiles and --tolerance"),
        )
        .arg(
            Arg::with_name("FORMAT")
                .long("format")
                .takes_value(true)
                .value_name("FORMAT")
                .help("Column format of the input file (h = height, x, y, s = skip)")
                .default_value(DEFAULT_FORMAT),
        )
        .get_matches();

    let input_file = PathBuf::from(matches.value_of("INPUT").unwrap());
    let output_file = PathBuf::from(matches.value_of("OUTPUT").unwrap());
    let detrend = matches.is_present("DETREND");

    let params = match matches.value_of("PARAMS") {
        Some(path) => {
            let params = load_params(path)?;
            if detrend {
                params.with_detrend(DetrendMode::Linear)
            } else {
                params
            }
        }
        None => MpdParameters::new(
            value_t!(matches, "RADIUS", f64)?,
            value_t!(matches, "PROFILES", usize)?,
            value_t!(matches, "TOLERANCE", f64)?,
            DetrendMode::from(detrend),
        )?,
    };

    Ok(Args {
        input_file,
        output_file,
        params,
        format: matches.value_of("FORMAT").unwrap().to_string(),
        parallel: matches.is_present("PARALLEL"),
    })
}

fn print_summary(report: &MpdReport) {
    let center = report.center();
    println!("Center of the sample (X, Y): ({:.4}, {:.4})", center.x, center.y);
    println!(
        "{} points are within the radius of the analysis",
        report.points_in_radius()
    );
    println!(
        "{} of {} profiles are valid",
        report.valid_profile_count(),
        report.parameters().profile_count
    );
    match report.advisory() {
        Some(advisory) => println!(
            "Warning: {}, MPD is reported as {:.6}",
            advisory,
            report.final_mpd()
        ),
        None if report.parameters().detrend.is_enabled() => {
            println!("Final MPD (with detrend): {:.6}", report.final_mpd())
        }
        None => println!("Final MPD: {:.6}", report.final_mpd()),
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    info!("Parameters: {}", args.params);

    let t_start = Instant::now();
    let cloud = read_all_with_format(&args.input_file, &args.format)?;
    let report = if args.parallel {
        calculate_mpd_par(&cloud, &args.params)
    } else {
        calculate_mpd(&cloud, &args.params)
    }
    .with_context(|| format!("Could not compute MPD of {}", args.input_file.display()))?;

    write_report(&args.output_file, &report)?;
    info!("Took {:.2}s", t_start.elapsed().as_secs_f64());

    print_summary(&report);
    println!("Detailed results were written to {}", args.output_file.display());
    Ok(())
}
