use super::model::{frame_dimensions, Dataframe, Row, Value};

// ---------------------------------------------------------------------------
// Slice pattern: which rows survive
// ---------------------------------------------------------------------------

/// Row-selection rule for [`create_slice`].
#[derive(Debug, Clone, PartialEq)]
pub enum SlicePattern {
    /// Keep every row.
    Wildcard,
    /// Keep rows whose cell is strictly equal to this value.
    Equals(Value),
}

impl SlicePattern {
    /// Text used to request [`SlicePattern::Wildcard`].
    pub const WILDCARD: &'static str = "*";

    /// Whether a row passes.
    ///
    /// Equality is strict: `Number(1.0)` never matches `Text("1")`, NaN never
    /// matches anything, and a row missing the column never matches.
    pub fn matches(&self, row: &[Value], col: usize) -> bool {
        match self {
            SlicePattern::Wildcard => true,
            SlicePattern::Equals(expected) => row.get(col).is_some_and(|cell| cell == expected),
        }
    }
}

impl From<Value> for SlicePattern {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(s) if s == SlicePattern::WILDCARD => SlicePattern::Wildcard,
            other => SlicePattern::Equals(other),
        }
    }
}

impl From<&str> for SlicePattern {
    fn from(s: &str) -> Self {
        SlicePattern::from(Value::from(s))
    }
}

/// Rows matching `pattern` at column `col`, optionally projected.
///
/// With an empty `export_cols` the matching rows come back whole. Otherwise
/// each row becomes exactly the listed columns in the listed order, so
/// columns may be reordered or repeated. Cells a short row does not have
/// project to [`Value::Null`].
pub fn create_slice(
    frame: &[Row],
    col: usize,
    pattern: &SlicePattern,
    export_cols: &[usize],
) -> Dataframe {
    let matching = frame.iter().filter(|row| pattern.matches(row, col));

    let slice: Dataframe = if export_cols.is_empty() {
        matching.cloned().collect()
    } else {
        matching
            .map(|row| {
                export_cols
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    };

    log::debug!(
        "slice on column {col} kept {} of {} rows",
        slice.len(),
        frame.len()
    );
    slice
}

/// The single column of an `[n, 1]` dataframe as a flat dataset.
///
/// Any other shape, including an empty frame, flattens to nothing. Only the
/// first row decides the shape; a later empty row contributes `Null`.
pub fn flatten(frame: &[Row]) -> Vec<Value> {
    if frame_dimensions(frame).cols != Some(1) {
        return Vec::new();
    }
    frame
        .iter()
        .map(|row| row.first().cloned().unwrap_or_default())
        .collect()
}
