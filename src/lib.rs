//! Lightweight dataframe helpers.
//!
//! A dataframe here is just `Vec<Vec<Value>>`: rows of dynamically-typed
//! cells with no row-length invariant. The crate loads such frames from
//! simple comma-separated files, reports their shape, coerces numeric-looking
//! text to numbers, computes mean/sum/median over flat datasets and slices
//! rows by an exact cell match.
//!
//! Degenerate input never panics or errors: it comes back as `None`, an
//! empty collection or undefined [`Dimensions`]. Only reading an existing
//! file can fail.

pub mod data;
pub mod error;

pub use data::loader::{file_exists, load_csv, CsvTable, LoadOptions};
pub use data::model::{data_dimensions, frame_dimensions, Dataframe, Dimensions, Row, Value};
pub use data::numeric::{convert_to_float, valid_number, valid_number_str};
pub use data::slice::{create_slice, flatten, SlicePattern};
pub use data::stats::{calculate_mean, calculate_median, find_total, numeric_values, Summary};
pub use error::{DfrError, Result};
