use std::fs::File;
use std::io::Read;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::{Field, Record};

/// Minimum fields per row: x, y and the label.
pub const MIN_FIELDS: usize = 3;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading CSV row {row}")]
    Read {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: expected at least 3 fields, found {found}")]
    MissingFields { row: usize, found: usize },

    #[error("row {row}: {field} value '{value}' is not a valid number")]
    InvalidValue {
        row: usize,
        field: Field,
        value: String,
    },
}

impl LoadError {
    /// True for malformed row contents, false for I/O and CSV framing failures.
    pub fn is_value_parse(&self) -> bool {
        matches!(
            self,
            LoadError::MissingFields { .. } | LoadError::InvalidValue { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read every row of a headerless CSV file into memory.
///
/// The file is closed before this returns. A single malformed row fails the
/// whole load.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Parse rows of `x, y, ..., label` from any reader.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let fields = result.map_err(|source| LoadError::Read { row, source })?;
        records.push(parse_record(row, &fields)?);
    }
    Ok(records)
}

fn parse_record(row: usize, fields: &StringRecord) -> Result<Record, LoadError> {
    let found = fields.len();
    if found < MIN_FIELDS {
        return Err(LoadError::MissingFields { row, found });
    }

    let x = parse_field::<f64>(row, Field::X, &fields[0])?;
    let y = parse_field::<f64>(row, Field::Y, &fields[1])?;
    let label = parse_label(row, &fields[found - 1])?;

    Ok(Record::new(x, y, label))
}

/// Integers beyond `i64` saturate; they can never match a plotted label.
fn parse_label(row: usize, text: &str) -> Result<i64, LoadError> {
    match text.parse::<i64>() {
        Ok(label) => Ok(label),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(LoadError::InvalidValue {
                row,
                field: Field::Label,
                value: text.to_string(),
            }),
        },
    }
}

fn parse_field<T: std::str::FromStr>(row: usize, field: Field, text: &str) -> Result<T, LoadError> {
    text.parse::<T>().map_err(|_| LoadError::InvalidValue {
        row,
        field,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn read(text: &str) -> Result<Vec<Record>, LoadError> {
        read_records(text.as_bytes())
    }

    #[test]
    fn reads_first_two_and_last_fields() {
        let records = read("0.5,1.5,0\n2,3,99,-7,1\n").unwrap();
        assert_eq!(
            records,
            vec![Record::new(0.5, 1.5, 0), Record::new(2.0, 3.0, 1)]
        );
    }

    #[test]
    fn whitespace_around_fields_is_ignored() {
        let records = read(" 1.0 , -2.5 ,  3 \n").unwrap();
        assert_eq!(records, vec![Record::new(1.0, -2.5, 3)]);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn non_numeric_x_is_a_value_error() {
        let err = read("0,0,0\nabc,1,0\n").unwrap_err();
        assert!(err.is_value_parse());
        match err {
            LoadError::InvalidValue { row, field, value } => {
                assert_eq!(row, 1);
                assert_eq!(field, Field::X);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fractional_label_is_rejected() {
        let err = read("1,2,0.0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidValue { field: Field::Label, .. }
        ));
    }

    #[test]
    fn oversized_labels_saturate() {
        let records = read("0,0,0\n1,1,99999999999999999999\n2,2,-99999999999999999999\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].label, i64::MAX);
        assert_eq!(records[2].label, i64::MIN);
    }

    #[test]
    fn rows_need_three_fields() {
        let err = read("1,2,0\n3,4\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { row: 1, found: 2 }));
        assert!(err.is_value_parse());
    }

    #[test]
    fn bad_row_after_label_gap_still_fails() {
        // Label 7 would never be plotted, but the row is validated anyway.
        let err = read("0,0,0\n1,oops,7\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { field: Field::Y, .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(!err.is_value_parse());
        assert!(err.to_string().contains("data.csv"));
    }

    #[test]
    fn loads_records_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,0").unwrap();
        writeln!(file, "1,1,0").unwrap();
        writeln!(file, "5,5,1").unwrap();
        file.flush().unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::new(5.0, 5.0, 1));
    }
}
