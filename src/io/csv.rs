//! CSV column extraction.
//!
//! Sensor logs arrive as comma-separated rows, one channel per column. The
//! reader takes a single column by index and returns it as a sample
//! sequence. Rows too short to hold the column are skipped; fields that do
//! not parse as numbers read as `0.0`, so a header row shows up as one
//! leading zero unless [`CsvColumnReader::with_headers`] is set.

use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::error::Result;

/// Default cap on the number of samples read from one column.
pub const DEFAULT_MAX_SAMPLES: usize = 100_000;

/// A column pulled out of a CSV source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvColumn {
    /// Parsed samples, at most `max_samples` of them.
    pub values: Vec<f64>,
    /// Data rows seen in the source, including rows past the cap.
    pub total_rows: usize,
    /// Fields that did not parse and were read as `0.0`.
    pub unparsed: usize,
}

impl CsvColumn {
    /// Number of samples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no samples were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reader for a single CSV column.
///
/// # Example
///
/// ```
/// use imu_signals::io::CsvColumnReader;
///
/// let data = "t,ax\n0.00,0.5\n0.02,0.7\n";
/// let column = CsvColumnReader::new(1)
///     .with_headers(true)
///     .read(data.as_bytes())?;
/// assert_eq!(column.values, vec![0.5, 0.7]);
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvColumnReader {
    column: usize,
    max_samples: usize,
    has_headers: bool,
    delimiter: u8,
}

impl CsvColumnReader {
    /// Reader for the 0-based `column`, no header, comma-delimited.
    #[must_use]
    pub const fn new(column: usize) -> Self {
        Self {
            column,
            max_samples: DEFAULT_MAX_SAMPLES,
            has_headers: false,
            delimiter: b',',
        }
    }

    /// Stop collecting after `max_samples` values.
    #[must_use]
    pub const fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Treat the first row as a header and skip it.
    #[must_use]
    pub const fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Use a field delimiter other than `,`.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read the column from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a row is malformed
    /// (for example, invalid UTF-8 or an unterminated quote).
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<CsvColumn> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let column = self.read(file)?;
        info!(
            path = %path.display(),
            column = self.column,
            total_rows = column.total_rows,
            samples = column.len(),
            "read CSV column"
        );
        Ok(column)
    }

    /// Read the column from any byte source.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be decoded.
    pub fn read<R: Read>(&self, source: R) -> Result<CsvColumn> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut out = CsvColumn::default();
        for record in reader.records() {
            let record = record?;
            out.total_rows += 1;

            if out.values.len() >= self.max_samples {
                continue;
            }
            let Some(field) = record.get(self.column) else {
                debug!(row = out.total_rows, column = self.column, "row has no such column");
                continue;
            };
            let value = field.parse::<f64>().unwrap_or_else(|_| {
                out.unparsed += 1;
                0.0
            });
            out.values.push(value);
        }

        if out.unparsed > 0 {
            warn!(
                column = self.column,
                unparsed = out.unparsed,
                "non-numeric fields read as 0.0"
            );
        }
        Ok(out)
    }
}

/// Read the 0-based `column` of a headerless CSV file, keeping at most
/// `max_samples` values.
///
/// # Errors
///
/// See [`CsvColumnReader::read_path`].
pub fn read_csv_column(
    path: impl AsRef<Path>,
    column: usize,
    max_samples: usize,
) -> Result<CsvColumn> {
    CsvColumnReader::new(column)
        .with_max_samples(max_samples)
        .read_path(path)
}
