//! Read whole catalogs the way they come off disk

use tleset::*;

const CATALOG: &str = include_str!("../test_fixtures/sat_tle.txt");

fn synthetic_catalog(records: usize, extra_lines: usize) -> String {
    let mut s = String::from("caption line\n");
    for i in 0..records {
        s.push_str(&format!("{i} SAT {i}\n1 {i:05}U\n2 {i:05}\n"));
    }
    for i in 0..extra_lines {
        s.push_str(&format!("extra {i}\n"));
    }
    s
}

#[test]
fn fixture_catalog() {
    let set = parse_record_set(CATALOG).unwrap();
    assert_eq!(set.discarded_lines, 0);

    let names: Vec<&str> = set.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["1-ISS-(ZARYA)", "2-NOAA-19", "3-GEO1", "4-GEO2"]);

    let noaa = &set.records[1];
    assert_eq!(
        noaa.line1,
        "1 33591U 09005A   23190.12345678  .00000123  00000-0  91234-4 0  9997"
    );
    assert_eq!(
        noaa.line2,
        "2 33591  99.1906 187.4035 0014066 102.2514 258.0234 14.12571123745123"
    );
}

#[test]
fn record_count_follows_complete_groups() {
    for n in 0..6 {
        for k in 0..LINES_PER_RECORD {
            let set = parse_record_set(&synthetic_catalog(n, k)).unwrap();
            assert_eq!(set.len(), n, "n={n} k={k}");
            assert_eq!(set.discarded_lines, k, "n={n} k={k}");
            for (i, r) in set.records.iter().enumerate() {
                assert_eq!(r.name, format!("{i}-SAT-{i}"));
                assert_eq!(r.line1, format!("1 {i:05}U"));
            }
        }
    }
}

#[test]
fn read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("tle.txt");
    std::fs::write(&p, synthetic_catalog(3, 2)).unwrap();

    let records = read_records(&p).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2], SatelliteRecord::new("2 SAT 2", "1 00002U", "2 00002"));
}

#[test]
fn header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("tle.txt");
    std::fs::write(&p, "caption line\n").unwrap();
    assert!(read_records(&p).unwrap().is_empty());
}
