use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::model::{Dataframe, Dimensions, Row, Value};
use crate::error::{DfrError, Result};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How [`load_csv`] reads a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Zero-based row indices to drop, counted after blank lines are removed.
    pub ignore_rows: Vec<usize>,
    /// Zero-based column indices. Only applied when `apply_ignore_cols` is set.
    pub ignore_cols: Vec<usize>,
    /// Cell separator.
    pub delimiter: u8,
    pub apply_ignore_cols: bool,
    /// Report `filtered rows + 1` as the row count.
    pub legacy_row_count: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            ignore_rows: Vec::new(),
            ignore_cols: Vec::new(),
            delimiter: b',',
            apply_ignore_cols: false,
            legacy_row_count: false,
        }
    }
}

impl LoadOptions {
    pub fn with_ignore_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.ignore_rows = rows.into_iter().collect();
        self
    }

    pub fn with_ignore_cols(mut self, cols: impl IntoIterator<Item = usize>) -> Self {
        self.ignore_cols = cols.into_iter().collect();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_applied_ignore_cols(mut self, apply: bool) -> Self {
        self.apply_ignore_cols = apply;
        self
    }

    pub fn with_legacy_row_count(mut self, legacy: bool) -> Self {
        self.legacy_row_count = legacy;
        self
    }
}

// ---------------------------------------------------------------------------
// Loaded table
// ---------------------------------------------------------------------------

/// A loaded CSV file and its reported dimensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvTable {
    pub data: Dataframe,
    pub dims: Dimensions,
}

impl CsvTable {
    /// What a missing file loads as: no rows, undefined dimensions.
    pub fn missing() -> Self {
        Self {
            data: Vec::new(),
            dims: Dimensions::UNDEFINED,
        }
    }

    /// `(data, rows, cols)` with `-1` for undefined counts.
    pub fn into_parts(self) -> (Dataframe, i64, i64) {
        let [rows, cols] = self.dims.as_pair();
        (self.data, rows, cols)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Whether `path` names an existing file or directory.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Load a delimited text file into a dataframe of [`Value::Text`] cells.
///
/// Lines are split on `\n` only and blank or whitespace-only lines are
/// dropped before row indices are assigned. There is no quoting: a
/// delimiter inside quotes still splits the cell. Invalid UTF-8 is
/// replaced rather than reported.
///
/// A missing file is not an error and loads as [`CsvTable::missing`].
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<CsvTable> {
    let path = path.as_ref();
    if !file_exists(path) {
        log::debug!("{} does not exist, returning empty table", path.display());
        return Ok(CsvTable::missing());
    }

    let file = File::open(path).map_err(|e| DfrError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(options.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(file);

    let ignore_rows: BTreeSet<usize> = options.ignore_rows.iter().copied().collect();
    let ignore_cols: BTreeSet<usize> = if options.apply_ignore_cols {
        options.ignore_cols.iter().copied().collect()
    } else {
        if !options.ignore_cols.is_empty() {
            log::debug!(
                "ignore_cols {:?} accepted but not applied",
                options.ignore_cols
            );
        }
        BTreeSet::new()
    };

    let mut data = Dataframe::new();
    let mut kept_lines = 0usize;
    for result in reader.byte_records() {
        let record = result.map_err(|e| DfrError::csv(path, e))?;
        if is_blank(&record) {
            continue;
        }
        let row_index = kept_lines;
        kept_lines += 1;
        if ignore_rows.contains(&row_index) {
            continue;
        }
        data.push(to_row(&record, &ignore_cols));
    }

    if let Some(max) = ignore_rows.last().filter(|&&max| max >= kept_lines) {
        log::warn!(
            "{}: ignore_rows references row {max} but only {kept_lines} rows were read",
            path.display()
        );
    }

    let rows = if options.legacy_row_count {
        data.len() + 1
    } else {
        data.len()
    };
    let cols = data.first().map_or(0, Vec::len);
    log::debug!(
        "loaded {} rows ({} skipped) from {}",
        data.len(),
        kept_lines - data.len(),
        path.display()
    );

    Ok(CsvTable {
        data,
        dims: Dimensions::new(Some(rows), Some(cols)),
    })
}

/// Empty and whitespace-only lines carry a single blank field. Unicode
/// whitespace such as U+00A0 counts as blank.
fn is_blank(record: &csv::ByteRecord) -> bool {
    record.len() <= 1
        && record
            .iter()
            .all(|field| String::from_utf8_lossy(field).trim().is_empty())
}

fn to_row(record: &csv::ByteRecord, ignore_cols: &BTreeSet<usize>) -> Row {
    record
        .iter()
        .enumerate()
        .filter(|(i, _)| !ignore_cols.contains(i))
        .map(|(_, field)| Value::Text(String::from_utf8_lossy(field).into_owned()))
        .collect()
}
