use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, bail, Result};
use mpd_core::containers::PointCloud;

use crate::ascii::AsciiReader;

use super::PointReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportedFileExtensions {
    WhitespaceSeparated,
    CommaSeparated,
}

impl SupportedFileExtensions {
    fn delimiter(&self) -> &'static str {
        match self {
            SupportedFileExtensions::WhitespaceSeparated => " ",
            SupportedFileExtensions::CommaSeparated => ",",
        }
    }
}

/// Returns a lookup value for the file extension of the given file path
fn get_extension_lookup(path: &Path) -> Result<Option<SupportedFileExtensions>> {
    let extension = match path.extension() {
        Some(ex) => ex,
        None => return Ok(None),
    };
    let extension_str = extension.to_str().ok_or_else(|| {
        anyhow!(
            "File extension of path {} is no valid Unicode string",
            path.display()
        )
    })?;
    match extension_str.to_lowercase().as_str() {
        "xyz" | "txt" | "asc" => Ok(Some(SupportedFileExtensions::WhitespaceSeparated)),
        "csv" => Ok(Some(SupportedFileExtensions::CommaSeparated)),
        _ => Ok(None),
    }
}

/// A `PointReader` for any supported point file, chosen by file extension
pub enum GenericPointReader {
    Ascii(AsciiReader<BufReader<File>>),
}

impl GenericPointReader {
    /// Opens the point file at `path`, interpreting its columns with the given `format` string
    pub fn open_file_with_format<P: AsRef<Path>>(path: P, format: &str) -> Result<Self> {
        let extension = get_extension_lookup(path.as_ref())?;
        match extension {
            Some(extension) => {
                let reader = AsciiReader::from_path(path, format, extension.delimiter())?;
                Ok(Self::Ascii(reader))
            }
            None => bail!(
                "Unsupported file format of file {}",
                path.as_ref().display()
            ),
        }
    }

    /// Checks whether the given `path` is a point file that can be read using a `GenericPointReader`. If yes,
    /// `Ok(true)` is returned, if not `Ok(false)` is returned. `Err` is returned only if there is an error accessing the
    /// file extension of `path`
    pub fn is_supported_file<P: AsRef<Path>>(path: P) -> Result<bool> {
        Ok(get_extension_lookup(path.as_ref())?.is_some())
    }
}

impl PointReader for GenericPointReader {
    fn read_into(&mut self, cloud: &mut PointCloud, count: usize) -> Result<usize> {
        match self {
            GenericPointReader::Ascii(reader) => reader.read_into(cloud, count),
        }
    }
}
