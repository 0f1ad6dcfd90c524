use anyhow::{bail, Result};

/// Default column layout of surface scans: height, x, y
pub const DEFAULT_FORMAT: &str = "hxy";

/// Prints the format literals that an [AsciiReader](crate::ascii::AsciiReader) can interpret
pub fn print_format_literals() {
    println!(
        "The following literals can be interpreted from the format string:
            h - height
            x - x coordinate
            y - y coordinate
            s - skip this column"
    );
}

// Maps the columns of an ascii file to the values of a surface point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointDataType {
    Skip,
    Height,
    CoordinateX,
    CoordinateY,
}

impl std::fmt::Display for PointDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PointDataType {
    //h - height
    //x - x coordinate
    //y - y coordinate
    //s - skip this column
    pub(crate) fn get_parse_layout(format: &str) -> Result<Vec<PointDataType>> {
        let mut parse_layout = Vec::<PointDataType>::new();
        for character in format.chars() {
            match character {
                's' => parse_layout.push(PointDataType::Skip),
                'h' => parse_layout.push(PointDataType::Height),
                'x' => parse_layout.push(PointDataType::CoordinateX),
                'y' => parse_layout.push(PointDataType::CoordinateY),
                _ => {
                    bail!(
                        "FormatError can't interpret format literal '{}' in format string '{}'.",
                        character,
                        format
                    );
                }
            }
        }

        for (required, literal) in [
            (PointDataType::Height, 'h'),
            (PointDataType::CoordinateX, 'x'),
            (PointDataType::CoordinateY, 'y'),
        ]
        .iter()
        {
            match parse_layout.iter().filter(|t| *t == required).count() {
                1 => {}
                0 => bail!(
                    "FormatError format string '{}' is missing the format literal '{}'.",
                    format,
                    literal
                ),
                _ => bail!(
                    "FormatError format literal '{}' appears more than once in format string '{}'.",
                    literal,
                    format
                ),
            }
        }
        Ok(parse_layout)
    }

    pub(crate) fn literal(&self) -> char {
        match self {
            PointDataType::Skip => 's',
            PointDataType::Height => 'h',
            PointDataType::CoordinateX => 'x',
            PointDataType::CoordinateY => 'y',
        }
    }
}
