use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::{App, Arg};
use mpd_algorithms::{
    bounds::calculate_bounds,
    minmax::{minmax_height, minmax_position},
};
use mpd_io::{
    ascii::{print_format_literals, DEFAULT_FORMAT},
    base::read_all_with_format,
};

struct Args {
    pub input_file: PathBuf,
    pub format: String,
}

fn get_args() -> Result<Option<Args>> {
    let matches = App::new("mpd info")
        .version("0.1")
        .about("Prints information about the given surface point file")
        .arg(
            Arg::with_name("INPUT")
                .short("i")
                .takes_value(true)
                .value_name("INPUT")
                .help("Input point file")
                .required_unless("FORMAT_HELP"),
        )
        .arg(
            Arg::with_name("FORMAT")
                .long("format")
                .takes_value(true)
                .value_name("FORMAT")
                .help("Column format of the input file")
                .default_value(DEFAULT_FORMAT),
        )
        .arg(
            Arg::with_name("FORMAT_HELP")
                .long("format-help")
                .help("Print the literals that can be used in the column format and exit"),
        )
        .get_matches();

    if matches.is_present("FORMAT_HELP") {
        print_format_literals();
        return Ok(None);
    }

    Ok(Some(Args {
        input_file: PathBuf::from(matches.value_of("INPUT").unwrap()),
        format: matches.value_of("FORMAT").unwrap().to_string(),
    }))
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let t_start = Instant::now();
    let cloud = read_all_with_format(&args.input_file, &args.format)?;

    println!("mpd info report for {}", args.input_file.display());
    println!("\tPoints:                 {}", cloud.len());
    if let Some((min, max)) = minmax_position(&cloud) {
        println!("\tX:                      {}  {}", min.x, max.x);
        println!("\tY:                      {}  {}", min.y, max.y);
    }
    if let Some((min, max)) = minmax_height(&cloud) {
        println!("\tHeight:                 {}  {}", min, max);
    }
    if let Some(bounds) = calculate_bounds(&cloud) {
        let center = bounds.center();
        let extent = bounds.extent();
        println!("\tCenter:                 {:.4}  {:.4}", center.x, center.y);
        println!(
            "\tLargest inscribed radius: {:.4}",
            extent.x.min(extent.y) / 2.0
        );
    }

    println!("Took {:.2}s", t_start.elapsed().as_secs_f64());
    Ok(())
}
