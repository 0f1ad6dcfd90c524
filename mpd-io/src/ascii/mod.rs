mod ascii_format_util;
pub use self::ascii_format_util::{print_format_literals, DEFAULT_FORMAT};
pub(crate) use self::ascii_format_util::PointDataType;

mod ascii_reader;
pub use self::ascii_reader::*;

#[cfg(test)]
mod test_util;
#[cfg(test)]
pub(crate) use self::test_util::*;
