mod report_writer;
pub use self::report_writer::*;
