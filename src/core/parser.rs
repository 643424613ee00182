//! Spec sheet parser
//!
//! Reads the ball CSV in two stages: the `csv` crate deserializes each row
//! into raw string fields, then each row is coerced into a typed
//! [`BallRecord`]. A row that fails coercion is dropped and counted; only
//! structural failures (unreadable input, missing required columns) abort
//! the whole load.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, trace, warn};

use super::records::BallRecord;

/// Raw CSV row before numeric coercion. Everything lands as an optional
/// string so a single bad cell cannot fail the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "RG")]
    rg: Option<String>,
    #[serde(rename = "Diff", alias = "Differential")]
    differential: Option<String>,
    #[serde(rename = "IntDiff", alias = "MassBias")]
    mass_bias: Option<String>,
    #[serde(rename = "Image", alias = "Icon")]
    icon: Option<String>,
}

/// Result of a successful load: the plottable records in input order plus
/// the number of rows dropped for missing/non-numeric RG or Diff.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<BallRecord>,
    pub skipped: usize,
}

/// Whole-file load failure. Rendered verbatim on the display surface.
#[derive(Debug)]
pub enum LoadError {
    /// The input is not structurally valid CSV.
    Csv(csv::Error),
    /// The header row lacks required columns.
    MissingColumns(Vec<&'static str>),
    /// The input has no header row at all.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Csv(e) => write!(f, "spec sheet is not readable as CSV: {e}"),
            LoadError::MissingColumns(columns) => {
                write!(f, "spec sheet is missing required columns: {}", columns.join(", "))
            }
            LoadError::Empty => write!(f, "spec sheet is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// Parse a spec sheet into plottable records.
///
/// Input row order is preserved. Rows with a blank name or a
/// missing/non-numeric RG or Diff are dropped and counted in
/// [`LoadOutcome::skipped`]; a blank IntDiff means a symmetric core and a
/// blank Image falls back to the default icon later.
pub fn parse_records(input: &str) -> Result<LoadOutcome, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    let header_names: Vec<&str> = headers.iter().collect();
    if header_names.iter().all(|h| h.is_empty()) {
        return Err(LoadError::Empty);
    }

    let mut missing = Vec::new();
    if !header_names.contains(&"Name") {
        missing.push("Name");
    }
    if !header_names.contains(&"RG") {
        missing.push("RG");
    }
    if !header_names.contains(&"Diff") && !header_names.contains(&"Differential") {
        missing.push("Diff");
    }
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "unreadable row dropped");
                skipped += 1;
                continue;
            }
        };
        match coerce(line, row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(records = records.len(), skipped, "spec sheet parsed");
    Ok(LoadOutcome { records, skipped })
}

/// Coerce a raw row into a typed record, or drop it.
fn coerce(line: usize, row: RawRow) -> Option<BallRecord> {
    let name = match row.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            warn!(line, "row without a ball name dropped");
            return None;
        }
    };

    let Some(rg) = parse_numeric(row.rg.as_deref()) else {
        warn!(line, name = %name, value = ?row.rg, "row without numeric RG dropped");
        return None;
    };
    let Some(differential) = parse_numeric(row.differential.as_deref()) else {
        warn!(line, name = %name, value = ?row.differential, "row without numeric Diff dropped");
        return None;
    };

    // Symmetric-core balls leave this blank; non-numeric text (some sheets
    // write "Symmetrical Ball" here) also means absent.
    let mass_bias_differential = parse_numeric(row.mass_bias.as_deref());

    let icon_path = row
        .icon
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from);

    trace!(name = %name, rg, differential, "record parsed");
    Some(BallRecord {
        name,
        rg,
        differential,
        mass_bias_differential,
        icon_path,
    })
}

/// Parse a cell as a finite float; blank or non-numeric yields `None`.
fn parse_numeric(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,RG,Diff,IntDiff,Image";

    #[test]
    fn parses_a_full_row() {
        let input = format!("{HEADER}\nTest Ball,2.5,0.045,0.02,icons/test.png\n");
        let outcome = parse_records(&input).unwrap();
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.name, "Test Ball");
        assert_eq!(record.rg, 2.5);
        assert_eq!(record.differential, 0.045);
        assert_eq!(record.mass_bias_differential, Some(0.02));
        assert_eq!(record.icon_path.as_deref(), Some("icons/test.png"));
    }

    #[test]
    fn blank_mass_bias_means_symmetric_core() {
        let input = format!("{HEADER}\nVaporize,2.51,0.047,,\n");
        let outcome = parse_records(&input).unwrap();
        let record = &outcome.records[0];
        assert_eq!(record.mass_bias_differential, None);
        assert_eq!(record.icon_path, None);
        assert!(!record.is_asymmetric());
    }

    #[test]
    fn non_numeric_mass_bias_means_symmetric_core() {
        let input = format!("{HEADER}\nVaporize,2.51,0.047,Symmetrical Ball,\n");
        let outcome = parse_records(&input).unwrap();
        assert_eq!(outcome.records[0].mass_bias_differential, None);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn rows_without_numeric_core_numbers_are_dropped() {
        let input = format!(
            "{HEADER}\n\
             Good Ball,2.49,0.047,,\n\
             Bad RG,abc,0.050,,\n\
             Missing Diff,2.50,,,\n\
             Also Good,2.51,0.054,0.016,\n"
        );
        let outcome = parse_records(&input).unwrap();
        // Row-count invariant: exactly the rows with numeric RG and Diff survive.
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped, 2);
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Good Ball", "Also Good"]);
    }

    #[test]
    fn nameless_rows_are_dropped() {
        let input = format!("{HEADER}\n,2.49,0.047,,\n");
        let outcome = parse_records(&input).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn non_finite_numbers_are_dropped() {
        let input = format!("{HEADER}\nWeird,NaN,0.047,,\nWeirder,2.49,inf,,\n");
        let outcome = parse_records(&input).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn header_only_sheet_yields_zero_records_without_errors() {
        let outcome = parse_records(&format!("{HEADER}\n")).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn input_order_is_preserved() {
        let input = format!("{HEADER}\nB,2.50,0.050,,\nA,2.49,0.047,,\nC,2.51,0.054,,\n");
        let outcome = parse_records(&input).unwrap();
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn differential_header_alias_is_accepted() {
        let input = "Name,RG,Differential\nTest Ball,2.5,0.045\n";
        let outcome = parse_records(input).unwrap();
        assert_eq!(outcome.records[0].differential, 0.045);
    }

    #[test]
    fn short_rows_parse_with_absent_trailing_fields() {
        let input = "Name,RG,Diff,IntDiff,Image\nShorty,2.48,0.046\n";
        let outcome = parse_records(input).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].mass_bias_differential, None);
        assert_eq!(outcome.records[0].icon_path, None);
    }

    #[test]
    fn missing_required_columns_fail_the_whole_load() {
        let err = parse_records("Name,Color\nBall,blue\n").unwrap_err();
        match err {
            LoadError::MissingColumns(columns) => {
                assert_eq!(columns, ["RG", "Diff"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_fails_the_whole_load() {
        assert!(matches!(parse_records(""), Err(LoadError::Empty)));
    }

    #[test]
    fn load_errors_render_a_user_message() {
        let message = LoadError::MissingColumns(vec!["RG"]).to_string();
        assert!(message.contains("RG"), "{message}");
    }
}
