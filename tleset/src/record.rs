use serde::{Deserialize, Serialize};
use std::fmt;

/// Unstructured TLE with a display name
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// The element lines are carried as opaque text, no checksum or column
/// validation is done here.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct SatelliteRecord {
    pub name: String,
    #[serde(rename = "tle_line1")]
    pub line1: String,
    #[serde(rename = "tle_line2")]
    pub line2: String,
}

impl SatelliteRecord {
    pub fn new(name_line: &str, line1: &str, line2: &str) -> Self {
        Self {
            name: display_name(name_line),
            line1: line1.trim().to_owned(),
            line2: line2.trim().to_owned(),
        }
    }
}

impl fmt::Display for SatelliteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.name, self.line1, self.line2)
    }
}

/// Labels can't contain spaces in the page, so they become hyphens
fn display_name(name_line: &str) -> String {
    name_line.trim().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_spaces_become_hyphens() {
        let r = SatelliteRecord::new("1 ISS (ZARYA)", "", "");
        assert_eq!(r.name, "1-ISS-(ZARYA)");
    }

    #[test]
    fn name_only_replaces_spaces() {
        let r = SatelliteRecord::new("  STARLINK-1007\t", "", "");
        assert_eq!(r.name, "STARLINK-1007");

        let r = SatelliteRecord::new("A  B\tC", "", "");
        assert_eq!(r.name, "A--B\tC");
    }

    #[test]
    fn element_lines_are_trimmed_not_rewritten() {
        let r = SatelliteRecord::new(
            "GEO1",
            "  1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991 \r",
            "\t2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578  ",
        );
        assert_eq!(
            r.line1,
            "1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991"
        );
        assert_eq!(
            r.line2,
            "2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578"
        );
    }

    #[test]
    fn serialized_field_order() {
        let r = SatelliteRecord::new("GEO 1", "l1", "l2");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"GEO-1","tle_line1":"l1","tle_line2":"l2"}"#);
    }

    #[test]
    fn display_is_three_lines() {
        let r = SatelliteRecord::new("GEO 1", "l1", "l2");
        assert_eq!(r.to_string(), "GEO-1\nl1\nl2");
    }
}
