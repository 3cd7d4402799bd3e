use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Value – a single cell of a dataframe or entry of a dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
///
/// Cells read from CSV start life as [`Value::Text`] and become
/// [`Value::Number`] once coerced. Serialized untagged, so a JSON array of
/// arrays deserializes straight into a [`Dataframe`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent or undefined.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A nested sequence; a dataframe row seen as a plain value.
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// The nested sequence, if this value is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "<null>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(map) => write!(f, "<object with {} keys>", map.len()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dataframe – rows of cells, no row-length invariant
// ---------------------------------------------------------------------------

/// One dataframe row. Rows may differ in length.
pub type Row = Vec<Value>;

/// An ordered sequence of rows.
pub type Dataframe = Vec<Row>;

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// `[rows, cols]` of a value, `None` meaning undefined or inapplicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimensions {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
}

impl Dimensions {
    /// Shape of anything that is not a sequence.
    pub const UNDEFINED: Dimensions = Dimensions {
        rows: None,
        cols: None,
    };

    pub fn new(rows: Option<usize>, cols: Option<usize>) -> Self {
        Self { rows, cols }
    }

    /// Legacy `[rows, cols]` pair with `-1` standing in for undefined.
    pub fn as_pair(&self) -> [i64; 2] {
        let side = |n: Option<usize>| n.map_or(-1, |n| n as i64);
        [side(self.rows), side(self.cols)]
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [rows, cols] = self.as_pair();
        write!(f, "[{rows}, {cols}]")
    }
}

/// Shape of an arbitrary value.
///
/// * non-sequence (including `Null`) → `[-1, -1]`
/// * empty sequence → `[0, -1]`
/// * sequence of sequences → `[len, len of first]`, with an empty first row
///   reported as `-1`
/// * any other sequence → `[len, -1]`
///
/// Only the first inner sequence is measured; jagged rows pass silently.
pub fn data_dimensions(value: &Value) -> Dimensions {
    match value.as_list() {
        None => Dimensions::UNDEFINED,
        Some(items) => sequence_dimensions(items.len(), || {
            items
                .iter()
                .map(Value::as_list)
                .collect::<Option<Vec<_>>>()
                .map(|rows| rows.first().map_or(0, |r| r.len()))
        }),
    }
}

/// Shape of a typed dataframe. Every element is a row, so this is the
/// rectangular-candidate case of [`data_dimensions`].
pub fn frame_dimensions(frame: &[Row]) -> Dimensions {
    sequence_dimensions(frame.len(), || Some(frame.first().map_or(0, Vec::len)))
}

/// `first_row_len` returns `None` when the sequence is not made of sequences.
fn sequence_dimensions(len: usize, first_row_len: impl FnOnce() -> Option<usize>) -> Dimensions {
    if len == 0 {
        return Dimensions::new(Some(0), None);
    }
    let cols = first_row_len().filter(|&n| n > 0);
    Dimensions::new(Some(len), cols)
}
