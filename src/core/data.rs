//! Delimited-text table loader.
//!
//! Input looks like
//!
//! ```text
//! # optional comments
//! @ Boys,Girls
//! 2007,183.32,190.52
//! 2008,231.23,5.0
//! ```
//!
//! The first field of each data line is the record label, the rest are
//! numbers.  Without a `@` header line the value columns are named by their
//! position (`"1"`, `"2"`, ...).

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::PathBuf,
};

use tracing::debug;

use crate::core::{
    config::Config,
    constants::WHITESPACE_DELIMITER,
    error::{ChartError, ParseErrorKind, ParseTableError},
};

// --- Public Row Structs ---

/// One labelled record: a value per category, in header order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub values: Vec<f64>,
}

/// Rectangular table of records sharing one category list.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Every record must carry exactly one value per header.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Result<Self, ChartError> {
        if records.is_empty() {
            return Err(ChartError::EmptyData);
        }
        if let Some((i, r)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.values.len() != headers.len())
        {
            return Err(ChartError::RaggedRecord {
                record: i,
                label: r.label.clone(),
                expected: headers.len(),
                got: r.values.len(),
            });
        }
        Ok(Self { headers, records })
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Printed width of the longest record label.
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Smallest and largest value across all records.
    #[must_use]
    pub fn extrema(&self) -> (f64, f64) {
        self.records
            .iter()
            .flat_map(|r| r.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

// --- Dialect ---

/// How lines are split and which leading lines are special.
#[derive(Clone, Copy, Debug)]
pub struct Dialect<'a> {
    pub delimiter: &'a str,
    pub header_marker: &'a str,
    pub comment_marker: &'a str,
}

impl<'a> From<&'a Config> for Dialect<'a> {
    fn from(cfg: &'a Config) -> Self {
        Self {
            delimiter: &cfg.delimiter,
            header_marker: &cfg.header_marker,
            comment_marker: &cfg.comment_marker,
        }
    }
}

impl Dialect<'_> {
    fn split<'l>(&self, line: &'l str) -> Vec<&'l str> {
        if self.delimiter == WHITESPACE_DELIMITER {
            line.split_whitespace().collect()
        } else {
            line.split(self.delimiter).map(str::trim).collect()
        }
    }

    fn strip_comment<'l>(&self, line: &'l str) -> &'l str {
        line.find(self.comment_marker).map_or(line, |p| &line[..p])
    }
}

// --- Helpers ---

/// Replace U+2212 MINUS SIGN with ASCII `-`; borrows when there is none.
#[inline]
pub fn normalize_unicode_minus(text: &str) -> Cow<'_, str> {
    if text.contains('\u{2212}') {
        Cow::Owned(text.replace('\u{2212}', "-"))
    } else {
        Cow::Borrowed(text)
    }
}

#[inline]
fn parse_f64(text: &str, line: usize, column: usize) -> Result<f64, ParseTableError> {
    let bad = || ParseTableError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: text.to_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(normalize_unicode_minus(text).as_bytes())
        .map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Ingest ---
const BUF_CAP: usize = 64 * 1024;

pub fn read_table<R: Read>(src: R, dialect: Dialect<'_>) -> Result<Table, ChartError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::<Record>::new();
    let mut width: Option<usize> = None;
    let mut line_no = 0usize;
    let mut skipped = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseTableError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        let line = std::str::from_utf8(&buf).map_err(|_| ParseTableError {
            line: line_no,
            kind: ParseErrorKind::InvalidUtf8,
        })?;

        // header declarations only count before the first record
        if records.is_empty() && headers.is_none() {
            if let Some(rest) = line.strip_prefix(dialect.header_marker) {
                let names: Vec<String> = dialect
                    .split(rest.trim())
                    .into_iter()
                    .map(str::to_owned)
                    .collect();
                debug!(line = line_no, ?names, "header row");
                width = Some(names.len());
                headers = Some(names);
                skipped += 1;
                continue;
            }
        }

        let body = dialect.strip_comment(line);
        if body.trim().is_empty() {
            skipped += 1;
            continue;
        }

        let fields = dialect.split(body);
        let Some((label, cells)) = fields.split_first() else {
            skipped += 1;
            continue;
        };
        if cells.is_empty() {
            return Err(ParseTableError {
                line: line_no,
                kind: ParseErrorKind::MissingValues((*label).to_owned()),
            }
            .into());
        }

        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(ParseTableError {
                line: line_no,
                kind: ParseErrorKind::RaggedRow {
                    expected,
                    got: cells.len(),
                },
            }
            .into());
        }

        let values = cells
            .iter()
            .enumerate()
            .map(|(i, c)| parse_f64(c, line_no, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        records.push(Record {
            label: (*label).to_owned(),
            values,
        });
    }

    let headers =
        headers.unwrap_or_else(|| (1..=width.unwrap_or(0)).map(|i| i.to_string()).collect());
    debug!(
        rows = records.len(),
        categories = headers.len(),
        skipped,
        "table loaded"
    );
    Table::new(headers, records)
}

/// Open `path` (or stdin for `-`) just long enough to parse it.
pub fn read_table_from_path(path: &str, dialect: Dialect<'_>) -> Result<Table, ChartError> {
    if path == "-" {
        read_table(std::io::stdin().lock(), dialect)
    } else {
        let file = File::open(path).map_err(|source| ChartError::Open {
            path: PathBuf::from(path),
            source,
        })?;
        read_table(file, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str, delimiter: &str) -> Result<Table, ChartError> {
        read_table(
            text.as_bytes(),
            Dialect {
                delimiter,
                header_marker: "@",
                comment_marker: "#",
            },
        )
    }

    #[test]
    fn whitespace_delimited_without_header() {
        let t = load("2007 183.32\n2008   231.23\n", " ").unwrap();
        assert_eq!(t.headers(), ["1"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].label, "2007");
        assert_eq!(t.records()[1].values, vec![231.23]);
    }

    #[test]
    fn header_and_comments_are_excluded() {
        let src = "# Example data\n# more notes\n@ Boys,Girls\n2007,183.32,190.52\n2008,231.23,5.0\n";
        let t = load(src, ",").unwrap();
        assert_eq!(t.headers(), ["Boys", "Girls"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].values, vec![183.32, 190.52]);
    }

    #[test]
    fn blank_lines_and_inline_comments() {
        let t = load("\na,1 # first\n\r\nb,2\n", ",").unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].values, vec![1.0]);
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let t = load("x,\u{2212}3.5\n", ",").unwrap();
        assert_eq!(t.records()[0].values, vec![-3.5]);
    }

    #[test]
    fn bad_number_is_fatal() {
        let err = load("a,1\nb,oops\n", ",").unwrap_err();
        match err {
            ChartError::Parse(ParseTableError {
                line: 2,
                kind: ParseErrorKind::BadFloat { column: 1, ref text },
            }) => assert_eq!(text, "oops"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            load("a,NaN\n", ","),
            Err(ChartError::Parse(ParseTableError {
                kind: ParseErrorKind::BadFloat { .. },
                ..
            }))
        ));
    }

    #[test]
    fn ragged_rows_fail() {
        let err = load("a,1,2\nb,3\n", ",").unwrap_err();
        assert!(matches!(
            err,
            ChartError::Parse(ParseTableError {
                line: 2,
                kind: ParseErrorKind::RaggedRow {
                    expected: 2,
                    got: 1
                }
            })
        ));
    }

    #[test]
    fn header_length_must_match_rows() {
        assert!(matches!(
            load("@ one,two,three\na,1,2\n", ","),
            Err(ChartError::Parse(ParseTableError {
                kind: ParseErrorKind::RaggedRow { expected: 3, .. },
                ..
            }))
        ));
    }

    #[test]
    fn label_without_values_fails() {
        assert!(matches!(
            load("lonely\n", ","),
            Err(ChartError::Parse(ParseTableError {
                kind: ParseErrorKind::MissingValues(_),
                ..
            }))
        ));
    }

    #[test]
    fn empty_input_is_empty_data() {
        assert!(matches!(load("# nothing\n", ","), Err(ChartError::EmptyData)));
    }

    #[test]
    fn label_width_counts_chars() {
        let t = load("label,2\nlonglabel,3\nÅngström,4\n", ",").unwrap();
        assert_eq!(t.label_width(), 9);
    }

    #[test]
    fn extrema_span_all_categories() {
        let t = load("a,1,-4\nb,9,2\n", ",").unwrap();
        assert_eq!(t.extrema(), (-4.0, 9.0));
    }

    #[test]
    fn normalize_minus_only_copies_when_needed() {
        assert_eq!(normalize_unicode_minus("\u{2212}1.5"), "-1.5");
        assert!(matches!(normalize_unicode_minus("-1.5"), Cow::Borrowed(_)));
    }

    #[test]
    fn unicode_minus_survives_in_labels_and_headers() {
        let t = load("@ gain,\u{2212}loss
A\u{2212}B,1,\u{2212}2
", ",").unwrap();
        assert_eq!(t.headers(), ["gain", "\u{2212}loss"]);
        assert_eq!(t.records()[0].label, "A\u{2212}B");
        assert_eq!(t.records()[0].values, vec![1.0, -2.0]);
    }

    #[test]
    fn ragged_record_reports_record_index() {
        let err = Table::new(
            vec!["a".to_owned(), "b".to_owned()],
            vec![
                Record {
                    label: "ok".to_owned(),
                    values: vec![1.0, 2.0],
                },
                Record {
                    label: "short".to_owned(),
                    values: vec![3.0],
                },
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChartError::RaggedRecord {
                record: 1,
                expected: 2,
                got: 1,
                ..
            }
        ));
        assert!(err.to_string().contains("short"));
    }

    #[test]
    fn missing_file_names_path() {
        let cfg = Config::default();
        let err = read_table_from_path("/definitely/not/here.dat", (&cfg).into()).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.dat"));
    }
}
