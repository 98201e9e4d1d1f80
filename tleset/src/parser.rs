//! A very simplistic parser for three-line TLE catalogs
//!
//! Lines are split like a universal-newline text reader: `\r\n`, `\n` and a
//! lone `\r` all terminate a line. Content is never inspected.

use crate::SatelliteRecord;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    combinator::{eof, not, opt},
    error::ErrorKind,
    multi::fold_many0,
};

pub type Result<I, O, E = ParseError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError<I> {
    #[error("Parse error ({1:?})")]
    Nom(I, ErrorKind),
}

/// Parse a catalog into its records.
///
/// The first line is a caption and is discarded. The remaining input holds
/// the lines of an incomplete trailing group, if any.
pub fn parse_records(catalog: &str) -> Result<&str, Vec<SatelliteRecord>> {
    let (s, _) = opt(line)(catalog)?;
    fold_many0(
        record,
        Vec::new,
        |mut records: Vec<SatelliteRecord>, record| {
            records.push(record);
            records
        },
    )(s)
}

/// Number of lines in `s`, using the same line splitting as the catalog
/// grammar
pub fn count_lines(s: &str) -> usize {
    let counted: Result<&str, usize> = fold_many0(line, || 0, |n: usize, _| n + 1)(s);
    counted.map(|(_, n)| n).unwrap_or_default()
}

fn record(s: &str) -> Result<&str, SatelliteRecord> {
    let (s, name) = line(s)?;
    let (s, line1) = line(s)?;
    let (s, line2) = line(s)?;
    Ok((s, SatelliteRecord::new(name, line1, line2)))
}

/// A single line without its terminator. The final line of the input
/// doesn't need one, but there must be something left to read.
fn line(s: &str) -> Result<&str, &str> {
    let (s, _) = not(eof)(s)?;
    let (s, text) = take_till(is_line_break)(s)?;
    let (s, _) = alt((tag("\r\n"), tag("\n"), tag("\r"), eof))(s)?;
    Ok((s, text))
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

impl<I> nom::error::ParseError<I> for ParseError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        ParseError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}
