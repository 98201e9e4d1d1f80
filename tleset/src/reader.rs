use crate::{count_lines, parse_records, SatelliteRecord};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("TLE file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read TLE file '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TLE file. {0}")]
    Parse(String),
}

impl ReadError {
    fn from_io(path: &Path, e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound {
                path: path.to_owned(),
            }
        } else {
            ReadError::Unreadable {
                path: path.to_owned(),
                source: e,
            }
        }
    }
}

/// Records parsed from a catalog, plus how many lines of an incomplete
/// trailing group were dropped
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RecordSet {
    pub records: Vec<SatelliteRecord>,
    pub discarded_lines: usize,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn parse_record_set(catalog: &str) -> Result<RecordSet, ReadError> {
    // Turn the nom error into a string to drop the borrow of the input
    let (rest, records) = parse_records(catalog).map_err(|e| ReadError::Parse(e.to_string()))?;
    Ok(RecordSet {
        records,
        discarded_lines: count_lines(rest),
    })
}

pub fn read_record_set<P: AsRef<Path>>(path: P) -> Result<RecordSet, ReadError> {
    let path = path.as_ref();
    let catalog = fs::read_to_string(path).map_err(|e| ReadError::from_io(path, e))?;
    let set = parse_record_set(&catalog)?;

    if set.discarded_lines != 0 {
        warn!(
            path = %path.display(),
            discarded_lines = set.discarded_lines,
            "Dropping incomplete trailing TLE entry"
        );
    }
    debug!(path = %path.display(), records = set.len(), "Read TLE file");

    Ok(set)
}

/// Read every complete record from a TLE catalog file, in file order
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<SatelliteRecord>, ReadError> {
    read_record_set(path).map(|set| set.records)
}
