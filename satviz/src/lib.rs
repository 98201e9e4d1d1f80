pub use tleset::SatelliteRecord;

pub mod app;
pub mod config;
pub mod page;

/// Catalog read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "tle.txt";

/// Page written when no output is given
pub const DEFAULT_OUTPUT_PATH: &str = "satellites_visualization.html";
