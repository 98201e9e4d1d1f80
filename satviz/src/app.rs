//! Catalog file in, page file out

use crate::{
    config::Config,
    page::{PageError, PageTemplate},
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
use std::{fmt, path::PathBuf};
use tleset::{read_record_set, ReadError};
use tracing::warn;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Use the bundled template when not set
    pub template: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.into(),
            output: DEFAULT_OUTPUT_PATH.into(),
            template: None,
        }
    }
}

impl Settings {
    /// Replace the values that `cfg` sets
    pub fn with_config(mut self, cfg: &Config) -> Self {
        if let Some(p) = &cfg.input {
            self.input = p.clone();
        }
        if let Some(p) = &cfg.output {
            self.output = p.clone();
        }
        if let Some(p) = &cfg.template {
            self.template = Some(p.clone());
        }
        self
    }
}

/// How a run ended. Only `Generated` writes anything.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Generated { output: PathBuf, sat_count: usize },
    InputNotFound { input: PathBuf },
    InputUnreadable { input: PathBuf, reason: String },
    NoRecords { input: PathBuf },
}

impl Outcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Outcome::Generated { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Generated { output, sat_count } => {
                writeln!(f, "Generated '{}'", output.display())?;
                writeln!(f, "Processed {sat_count} satellites.")?;
                write!(
                    f,
                    "Open '{}' in a web browser to view the visualization.",
                    output.display()
                )
            }
            Outcome::InputNotFound { input } => write!(
                f,
                "Error: can't find '{}'. Make sure it is in the current directory.",
                input.display()
            ),
            Outcome::InputUnreadable { input, reason } => {
                write!(f, "Error: can't read '{}'. {reason}", input.display())
            }
            Outcome::NoRecords { input } => write!(
                f,
                "Error: no valid TLE data was parsed from '{}'.",
                input.display()
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Page(#[from] PageError),
}

pub fn run(settings: &Settings) -> Result<Outcome, RunError> {
    let set = match read_record_set(&settings.input) {
        Ok(set) => set,
        Err(ReadError::NotFound { path }) => {
            warn!(input = %path.display(), "TLE file not found");
            return Ok(Outcome::InputNotFound { input: path });
        }
        Err(ReadError::Unreadable { path, source }) => {
            warn!(input = %path.display(), error = %source, "TLE file unreadable");
            return Ok(Outcome::InputUnreadable {
                input: path,
                reason: source.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if set.is_empty() {
        warn!(input = %settings.input.display(), "No TLE entries parsed");
        return Ok(Outcome::NoRecords {
            input: settings.input.clone(),
        });
    }

    let template = match &settings.template {
        Some(p) => PageTemplate::load(p)?,
        None => PageTemplate::builtin()?,
    };
    template.write(&set.records, &settings.output)?;

    Ok(Outcome::Generated {
        output: settings.output.clone(),
        sat_count: set.len(),
    })
}
