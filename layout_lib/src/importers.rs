use crate::errors::Error;
use crate::times::Range;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Formats accepted for timestamps in text files, after ISO_FORMAT
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Separators between the start and end of a range, in text files.
/// A plain '-' can't be used since it also appears in dates.
const SEPARATORS: [&str; 4] = [",", ";", "–", " - "];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// One range per line, like "2018-01-01T20:00,2018-01-01T22:00".
    /// Empty lines and lines starting with '#' are ignored.
    #[default]
    Text,

    /// An array of [start, end] pairs
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::Str(format!("Unknown input format {}", s))),
        }
    }
}

/// Try each format in turn, reporting the error for the last one
fn parse_time(s: &str) -> Result<NaiveDateTime, Error> {
    let s = s.trim();
    let ts = DATE_FORMATS.iter().fold(
        NaiveDateTime::parse_from_str(s, ISO_FORMAT),
        |acc, fmt| acc.or_else(|_| NaiveDateTime::parse_from_str(s, fmt)),
    )?;
    Ok(ts)
}

/// Parse one line of a text file.  Returns None for comments and blank
/// lines.
fn parse_line(line: &str) -> Result<Option<Range<NaiveDateTime>>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (start, end) = SEPARATORS
        .iter()
        .find_map(|sep| line.split_once(sep))
        .ok_or_else(|| format!("expected START,END but got '{}'", line))?;

    let range = Range::new(
        parse_time(start).map_err(|e| format!("start '{}': {}", start, e))?,
        parse_time(end).map_err(|e| format!("end '{}': {}", end, e))?,
    );
    if range.is_inverted() {
        return Err(format!("range ends before it starts: {}", range));
    }
    Ok(Some(range))
}

/// Read all ranges from the reader, in the order they are found.
pub fn read_ranges(
    reader: impl BufRead,
    format: Format,
) -> Result<Vec<Range<NaiveDateTime>>, Error> {
    match format {
        Format::Text => {
            let mut ranges = Vec::new();
            for (idx, line) in reader.lines().enumerate() {
                let line = line?;
                if let Some(r) = parse_line(&line)
                    .map_err(|msg| Error::Syntax { line: idx + 1, msg })?
                {
                    ranges.push(r);
                }
            }
            Ok(ranges)
        }
        Format::Json => {
            let pairs: Vec<(NaiveDateTime, NaiveDateTime)> =
                serde_json::from_reader(reader)?;
            pairs
                .into_iter()
                .enumerate()
                .map(|(idx, pair)| {
                    let range = Range::from(pair);
                    if range.is_inverted() {
                        Err(Error::Element {
                            index: idx,
                            msg: format!(
                                "range ends before it starts: {}",
                                range
                            ),
                        })
                    } else {
                        Ok(range)
                    }
                })
                .collect()
        }
    }
}

/// Read all ranges from a file
pub fn read_file(
    path: &Path,
    format: Format,
) -> Result<Vec<Range<NaiveDateTime>>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open {}", path.display()))?;
    let ranges = read_ranges(BufReader::new(file), format)
        .with_context(|| format!("While reading {}", path.display()))?;
    log::info!("read {} ranges from {}", ranges.len(), path.display());
    Ok(ranges)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::samples;

    #[test]
    fn test_format() {
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("csv".parse::<Format>().is_err());
    }

    #[test]
    fn test_text() {
        let input = "\
# an evening
2018-01-01T20:00:00,2018-01-01T22:00:00
2018-01-01 22:00 – 2018-01-02 00:00

2018-01-01T20:30 ; 2018-01-01T22:30
2018-01-01 21:59 - 2018-01-02 00:14
2018-01-02T00:05,2018-01-02T00:07
2018-01-01 23:30:00,2018-01-02 00:00:00
";
        let ranges = read_ranges(input.as_bytes(), Format::Text).unwrap();
        assert_eq!(ranges, samples::canonical());
    }

    #[test]
    fn test_parse_time() {
        let expected = samples::canonical()
            .first()
            .map(|r| r.start)
            .unwrap();
        assert_eq!(parse_time("2018-01-01T20:00:00").unwrap(), expected);
        assert_eq!(parse_time(" 2018-01-01T20:00 ").unwrap(), expected);
        assert_eq!(parse_time("2018-01-01 20:00:00").unwrap(), expected);
        assert_eq!(parse_time("2018-01-01 20:00").unwrap(), expected);
        assert!(matches!(parse_time("20:00"), Err(Error::ChronoParse(_))));
        assert!(matches!(parse_time(""), Err(Error::ChronoParse(_))));
    }

    #[test]
    fn test_text_errors() {
        let err = read_ranges(
            "2018-01-01T20:00,2018-01-01T22:00\n2018-01-01T20:00\n".as_bytes(),
            Format::Text,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));

        let err = read_ranges(
            "2018-01-01T20:00,tomorrow\n".as_bytes(),
            Format::Text,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));

        let err = read_ranges(
            "\n2018-01-01T22:00,2018-01-01T20:00\n".as_bytes(),
            Format::Text,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_json() {
        let input = r#"[
            ["2018-01-01T20:00:00", "2018-01-01T22:00:00"],
            ["2018-01-01T22:00:00", "2018-01-02T00:00:00"],
            ["2018-01-01T20:30:00", "2018-01-01T22:30:00"],
            ["2018-01-01T21:59:00", "2018-01-02T00:14:00"],
            ["2018-01-02T00:05:00", "2018-01-02T00:07:00"],
            ["2018-01-01T23:30:00", "2018-01-02T00:00:00"]
        ]"#;
        let ranges = read_ranges(input.as_bytes(), Format::Json).unwrap();
        assert_eq!(ranges, samples::canonical());

        assert!(read_ranges("[]".as_bytes(), Format::Json)
            .unwrap()
            .is_empty());
        assert!(matches!(
            read_ranges("{}".as_bytes(), Format::Json),
            Err(Error::Json(_))
        ));
        let err = read_ranges(
            r#"[
                ["2018-01-01T20:00:00", "2018-01-01T22:00:00"],
                ["2018-01-01T22:00:00", "2018-01-02T00:00:00"],
                ["2018-01-02T00:00:00", "2018-01-01T00:00:00"]
            ]"#
            .as_bytes(),
            Format::Json,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Element { index: 2, .. }));
        assert!(err.to_string().starts_with("entry 2: "));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_file(Path::new("/no/such/file.txt"), Format::Text)
            .is_err());
    }
}
