//! Reader for plain-text TLE catalogs: a caption line followed by
//! name / line 1 / line 2 groups.

pub use crate::parser::{count_lines, parse_records, ParseError};
pub use crate::reader::{parse_record_set, read_record_set, read_records, ReadError, RecordSet};
pub use crate::record::SatelliteRecord;

pub mod parser;
pub mod reader;
pub mod record;

/// Name line, element line 1, element line 2
pub const LINES_PER_RECORD: usize = 3;
