//! Self-contained HTML page that animates a set of TLE records over a
//! CesiumJS globe. Propagation happens in the browser with satellite.js,
//! this side only fills in the data.

use crate::SatelliteRecord;
use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tera::{Context, Tera};
use tracing::{debug, info};

const BUILTIN_TEMPLATE: &str = include_str!("../templates/satellites.html.tera");
const TEMPLATE_NAME: &str = "satellites.html";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to read page template '{}'", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Page template error")]
    Template(#[from] tera::Error),

    #[error("Failed to serialize satellite records")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write page to '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything a page template can substitute
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct PageContext {
    /// JSON array of records, safe to paste into a `<script>` element
    pub satellites_json: String,
    pub sat_count: usize,
}

impl PageContext {
    pub fn new(records: &[SatelliteRecord]) -> Result<Self, PageError> {
        Ok(Self {
            satellites_json: script_safe_json(records)?,
            sat_count: records.len(),
        })
    }
}

/// Serialize to JSON that can sit inside a `<script>` element.
///
/// `<`, `>` and `&` only ever show up inside JSON strings, so rewriting them
/// as `\u` escapes keeps the value identical while making `</script>` and
/// `<!--` impossible. U+2028/U+2029 are escaped for older JS engines.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}

pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    /// The bundled Cesium + satellite.js page
    pub fn builtin() -> Result<Self, PageError> {
        Self::from_source(BUILTIN_TEMPLATE)
    }

    /// A Tera template using `satellites_json` and `sat_count`
    pub fn from_source(source: &str) -> Result<Self, PageError> {
        let mut tera = Tera::default();
        // The JSON is escaped by script_safe_json, HTML escaping would corrupt it
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PageError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| PageError::TemplateRead {
            path: path.to_owned(),
            source: e,
        })?;
        debug!(template = %path.display(), "Loaded page template");
        Self::from_source(&source)
    }

    pub fn render(&self, records: &[SatelliteRecord]) -> Result<String, PageError> {
        let page = PageContext::new(records)?;
        let ctx = Context::from_serialize(&page)?;
        Ok(self.tera.render(TEMPLATE_NAME, &ctx)?)
    }

    /// Render and write the page, replacing whatever is at `output_path`
    pub fn write<P: AsRef<Path>>(
        &self,
        records: &[SatelliteRecord],
        output_path: P,
    ) -> Result<(), PageError> {
        let output_path = output_path.as_ref();
        let html = self.render(records)?;
        fs::write(output_path, html).map_err(|e| PageError::Write {
            path: output_path.to_owned(),
            source: e,
        })?;
        info!(
            output = %output_path.display(),
            sat_count = records.len(),
            "Wrote satellite page"
        );
        Ok(())
    }
}

/// Write the bundled page for `records` to `output_path`
pub fn generate_page<P: AsRef<Path>>(
    records: &[SatelliteRecord],
    output_path: P,
) -> Result<(), PageError> {
    PageTemplate::builtin()?.write(records, output_path)
}
