use anyhow::{bail, Context, Result};
use itertools::{EitherOrBoth::*, Itertools};
use mpd_core::containers::{PointCloud, SurfacePoint};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::PointDataType;
use crate::base::PointReader;

/// `PointReader` implementation for delimited text files with one point per line. The meaning of the columns is
/// given by a format string, see [print_format_literals](crate::ascii::print_format_literals). Columns beyond
/// the format string are ignored. Blank lines and lines starting with `#` are skipped.
pub struct AsciiReader<R: BufRead> {
    reader: R,
    // `None` splits at any run of whitespace
    delimiter: Option<String>,
    parse_layout: Vec<PointDataType>,
    line_number: usize,
}

impl<R: BufRead> AsciiReader<R> {
    /// Creates a reader for `read`. A `delimiter` consisting only of whitespace (or the empty string) splits the
    /// columns at any run of whitespace, any other delimiter splits at exactly that string and trims the values
    pub fn from_read(read: R, format: &str, delimiter: &str) -> Result<Self> {
        let parse_layout = PointDataType::get_parse_layout(format)?;
        let delimiter = if delimiter.trim().is_empty() {
            None
        } else {
            Some(delimiter.trim().to_string())
        };
        Ok(Self {
            reader: read,
            delimiter,
            parse_layout,
            line_number: 0,
        })
    }

    fn get_point(&self, line: &str) -> Result<SurfacePoint> {
        let values: Box<dyn Iterator<Item = &str> + '_> = match &self.delimiter {
            None => Box::new(line.split_whitespace()),
            Some(delimiter) => Box::new(line.split(delimiter.as_str()).map(str::trim)),
        };
        let mut point = SurfacePoint::default();
        for pair in values.zip_longest(self.parse_layout.iter()) {
            match pair {
                Both(value_str, data_type) => match data_type {
                    PointDataType::Skip => {}
                    PointDataType::Height => {
                        point.height = parse_f64(value_str)
                            .with_context(|| generate_parse_error(data_type))?;
                    }
                    PointDataType::CoordinateX => {
                        point.position.x = parse_f64(value_str)
                            .with_context(|| generate_parse_error(data_type))?;
                    }
                    PointDataType::CoordinateY => {
                        point.position.y = parse_f64(value_str)
                            .with_context(|| generate_parse_error(data_type))?;
                    }
                },
                Left(_) => break,
                Right(data_type) => bail!(
                    "Missing value for format literal '{}'.",
                    data_type.literal()
                ),
            }
        }
        Ok(point)
    }
}

impl AsciiReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P, format: &str, delimiter: &str) -> Result<Self> {
        let file = File::open(path.as_ref()).with_context(|| {
            format!("Could not open point file {}", path.as_ref().display())
        })?;
        Self::from_read(BufReader::new(file), format, delimiter)
    }
}

fn parse_f64(value_str: &str) -> Result<f64> {
    let value = value_str
        .parse::<f64>()
        .with_context(|| format!("'{}' is not a number", value_str))?;
    if !value.is_finite() {
        bail!("'{}' is not a finite number", value_str);
    }
    Ok(value)
}

fn generate_parse_error(data_type: &PointDataType) -> String {
    format!(
        "ParseError at parsing {} for format literal '{}'.",
        data_type,
        data_type.literal()
    )
}

impl<R: BufRead> PointReader for AsciiReader<R> {
    fn read_into(&mut self, cloud: &mut PointCloud, count: usize) -> Result<usize> {
        let mut points_read = 0;
        let mut line = String::new();
        while points_read < count {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            self.line_number += 1;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            let point = self
                .get_point(content)
                .with_context(|| format!("ReadError in line {}.", self.line_number))?;
            cloud.push(point);
            points_read += 1;
        }
        Ok(points_read)
    }
}

// Test cases:
//  - Reading whitespace separated files with comments, blank lines and tabs
//  - Reading with a custom delimiter, skipped and ignored columns
//  - Reading in chunks
//  - Errors
//      - Unrecognized format literal
//      - Float parsing error with line number
//      - Too few columns
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{get_test_file_path, test_data_points, DEFAULT_FORMAT};
    use std::io::Cursor;

    #[test]
    fn test_read() -> Result<()> {
        let path = get_test_file_path("10_points_hxy.xyz");
        let mut ascii_reader = AsciiReader::from_path(path, DEFAULT_FORMAT, " ")?;
        let cloud = ascii_reader.read_to_end()?;
        assert_eq!(cloud.points(), test_data_points().as_slice());
        Ok(())
    }

    #[test]
    fn test_read_with_delimiter_and_ignored_columns() -> Result<()> {
        let path = get_test_file_path("10_points_xyh.csv");
        let mut ascii_reader = AsciiReader::from_path(path, "xyh", ", ")?;
        let cloud = ascii_reader.read_to_end()?;
        assert_eq!(cloud.points(), test_data_points().as_slice());
        Ok(())
    }

    #[test]
    fn test_read_with_skip_literal() -> Result<()> {
        let data = "7;0.5;1.0;2.0\n8;0.25;-1.0;-2.0\n";
        let mut ascii_reader = AsciiReader::from_read(Cursor::new(data), "shxy", ";")?;
        let cloud = ascii_reader.read_to_end()?;
        assert_eq!(
            cloud.points(),
            &[
                SurfacePoint::new(0.5, 1.0, 2.0),
                SurfacePoint::new(0.25, -1.0, -2.0)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_read_in_chunks() -> Result<()> {
        let path = get_test_file_path("10_points_hxy.xyz");
        let mut ascii_reader = AsciiReader::from_path(path, DEFAULT_FORMAT, "")?;
        let mut cloud = PointCloud::new();
        assert_eq!(ascii_reader.read_into(&mut cloud, 4)?, 4);
        assert_eq!(ascii_reader.read_into(&mut cloud, 4)?, 4);
        assert_eq!(ascii_reader.read_into(&mut cloud, 4)?, 2);
        assert_eq!(ascii_reader.read_into(&mut cloud, 4)?, 0);
        assert_eq!(cloud.points(), test_data_points().as_slice());
        Ok(())
    }

    #[test]
    fn test_error_format_literal() {
        let result = AsciiReader::from_read(Cursor::new(""), "hxyz", " ");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_parse_float() -> Result<()> {
        let path = get_test_file_path("malformed.xyz");
        let mut ascii_reader = AsciiReader::from_path(path, DEFAULT_FORMAT, " ")?;
        let err = ascii_reader.read_to_end().unwrap_err();
        assert_eq!(err.to_string(), "ReadError in line 3.");
        let chain = err.chain().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(
            chain[1],
            "ParseError at parsing CoordinateX for format literal 'x'."
        );
        Ok(())
    }

    #[test]
    fn test_error_too_few_columns() -> Result<()> {
        let path = get_test_file_path("too_few_columns.xyz");
        let mut ascii_reader = AsciiReader::from_path(path, DEFAULT_FORMAT, " ")?;
        let err = ascii_reader.read_to_end().unwrap_err();
        assert_eq!(err.to_string(), "ReadError in line 2.");
        assert!(format!("{:#}", err).contains("format literal 'y'"));
        Ok(())
    }

    #[test]
    fn test_error_non_finite_value() -> Result<()> {
        let mut ascii_reader =
            AsciiReader::from_read(Cursor::new("nan 1.0 2.0\n"), DEFAULT_FORMAT, " ")?;
        assert!(ascii_reader.read_to_end().is_err());
        Ok(())
    }

    #[test]
    fn test_error_missing_file() {
        let path = get_test_file_path("does_not_exist.xyz");
        let result = AsciiReader::from_path(path, DEFAULT_FORMAT, " ");
        let err = result.err().unwrap();
        assert!(err.to_string().starts_with("Could not open point file"));
    }
}
