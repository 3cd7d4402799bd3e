//! End-to-end checks of the public helper surface.

use std::io::Write;

use dfr::{
    calculate_mean, calculate_median, convert_to_float, create_slice, data_dimensions,
    file_exists, find_total, flatten, load_csv, valid_number, Dataframe, LoadOptions,
    SlicePattern, Value,
};
use serde_json::json;
use tempfile::NamedTempFile;

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn dataset(json: serde_json::Value) -> Vec<Value> {
    match Value::from(json) {
        Value::List(items) => items,
        other => vec![other],
    }
}

fn frame(json: serde_json::Value) -> Dataframe {
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_valid_number_table() {
    for ok in [json!(-3), json!("4.5"), json!("-0.1"), json!(0)] {
        assert!(valid_number(&value(ok.clone())), "{ok} should be numeric");
    }
    for bad in [json!("1e5"), json!("1,000"), json!(" 5"), json!(true), json!(null), json!([])] {
        assert!(!valid_number(&value(bad.clone())), "{bad} should not be numeric");
    }
}

#[test]
fn test_data_dimensions_table() {
    assert_eq!(data_dimensions(&Value::Null).as_pair(), [-1, -1]);
    assert_eq!(data_dimensions(&value(json!([]))).as_pair(), [0, -1]);
    assert_eq!(data_dimensions(&value(json!([[1, 2], [3, 4]]))).as_pair(), [2, 2]);
    assert_eq!(data_dimensions(&value(json!([[], []]))).as_pair(), [2, -1]);
    assert_eq!(data_dimensions(&value(json!([1, 2, 3]))).as_pair(), [3, -1]);
}

#[test]
fn test_aggregates() {
    assert_eq!(calculate_mean(&dataset(json!([1, 2, "3", "x"]))), Some(2.0));
    assert_eq!(find_total(&dataset(json!([]))), None);
    assert_eq!(find_total(&dataset(json!([1, "2", 3]))), Some(6.0));
    assert_eq!(calculate_median(&dataset(json!([3, 1, 2]))), Some(2.0));
    assert_eq!(calculate_median(&dataset(json!([4, 1, 2, 3]))), Some(2.5));
}

#[test]
fn test_convert_to_float_is_idempotent() {
    let mut df = frame(json!([["1"], ["x"], ["2.5"]]));
    assert_eq!(convert_to_float(&mut df, 0), 2);
    assert_eq!(df, frame(json!([[1.0], ["x"], [2.5]])));
    assert_eq!(convert_to_float(&mut df, 0), 0);
}

#[test]
fn test_flatten() {
    assert_eq!(flatten(&frame(json!([[1], [2], [3]]))), dataset(json!([1, 2, 3])));
    assert!(flatten(&frame(json!([[1, 2], [3, 4]]))).is_empty());
}

#[test]
fn test_create_slice() {
    let df = frame(json!([
        ["a", "A", 1],
        ["b", "B", 2],
        ["c", "A", 3]
    ]));
    assert_eq!(create_slice(&df, 1, &SlicePattern::from("*"), &[]), df);
    assert_eq!(
        create_slice(&df, 1, &SlicePattern::from("A"), &[0, 2]),
        frame(json!([["a", 1], ["c", 3]]))
    );
}

#[test]
fn test_load_missing_csv() {
    assert!(!file_exists("missing.csv"));
    let table = load_csv("missing.csv", &LoadOptions::default()).unwrap();
    assert_eq!(table.into_parts(), (Vec::new(), -1, -1));
}

#[test]
fn test_load_then_summarise_column() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "site,count\nnorth,10\n\nsouth,n/a\neast,20\n  \nwest,30\n").unwrap();
    file.flush().unwrap();

    let options = LoadOptions::default().with_ignore_rows([0]);
    let table = load_csv(file.path(), &options).unwrap();
    assert_eq!(table.dims.as_pair(), [4, 2]);

    let mut df = table.data;
    assert_eq!(convert_to_float(&mut df, 1), 3);

    let counts = flatten(&create_slice(&df, 0, &SlicePattern::Wildcard, &[1]));
    assert_eq!(counts.len(), 4);
    assert_eq!(find_total(&counts), Some(60.0));
    assert_eq!(calculate_mean(&counts), Some(20.0));
    assert_eq!(calculate_median(&counts), Some(20.0));

    let south = create_slice(&df, 0, &SlicePattern::from("south"), &[1]);
    assert_eq!(south, frame(json!([["n/a"]])));
}
