use anyhow::{Context, Result};
use log::info;
use mpd_core::containers::PointCloud;
use std::path::Path;

mod reader;
pub use self::reader::*;

mod io_factory;
pub use self::io_factory::*;

/// Try to read all points in the given point file. This function determines the file type from the file extension
/// of `path` and reads the columns in the default `hxy` order. Use `read_all_with_format` for other column orders.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    read_all_with_format(path, crate::ascii::DEFAULT_FORMAT)
}

/// Try to read all points in the given point file, interpreting its columns with the given `format` string.
/// Otherwise behaves exactly like `read_all`.
pub fn read_all_with_format<P: AsRef<Path>>(path: P, format: &str) -> Result<PointCloud> {
    let mut reader =
        GenericPointReader::open_file_with_format(path.as_ref(), format).context(format!(
            "Could not create appropriate reader for point file {}",
            path.as_ref().display()
        ))?;
    let cloud = reader.read_to_end().context(format!(
        "Could not read points from point file {}",
        path.as_ref().display()
    ))?;
    info!(
        "Read {} points from {}",
        cloud.len(),
        path.as_ref().display()
    );
    Ok(cloud)
}
