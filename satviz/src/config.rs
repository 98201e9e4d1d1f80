use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

/// Optional TOML configuration, every key falls back to the built-in
/// default when omitted.
///
/// ```toml
/// input = "catalogs/sat_tle.txt"
/// output = "out/satellites.html"
/// template = "my_page.html.tera"
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// TLE catalog to read
    pub input: Option<PathBuf>,
    /// HTML page to write
    pub output: Option<PathBuf>,
    /// Tera page template used instead of the bundled one
    pub template: Option<PathBuf>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_owned(),
            source: e,
        })?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
