use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Dataframe, Value};

/// Optional minus, ASCII digits, optional fraction. No exponent, no plus
/// sign, no separators, no surrounding whitespace.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Hard-coded regex pattern should be valid")
});

/// Whether a string is a plain decimal number.
pub fn valid_number_str(s: &str) -> bool {
    NUMBER_PATTERN.is_match(s)
}

/// Whether a value should be treated as numeric.
///
/// Numbers always pass, NaN and infinities included. Text passes when
/// [`valid_number_str`] accepts it. Everything else fails.
pub fn valid_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::Text(s) => valid_number_str(s),
        _ => false,
    }
}

impl Value {
    /// The numeric form of a value that passes [`valid_number`].
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(s) if valid_number_str(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Coerce numeric-looking text in column `col` to [`Value::Number`], in place.
///
/// Rows too short to have the column are skipped, as are cells that are
/// already numbers. Returns how many cells changed, so a second call on the
/// same column returns 0.
pub fn convert_to_float(frame: &mut Dataframe, col: usize) -> usize {
    let mut converted = 0;
    for cell in frame.iter_mut().filter_map(|row| row.get_mut(col)) {
        if cell.is_number() {
            continue;
        }
        if let Some(v) = cell.to_number() {
            *cell = Value::Number(v);
            converted += 1;
        }
    }
    log::debug!("converted {converted} cells in column {col} to numbers");
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        for s in ["0", "-3", "4.5", "-0.1", "007", "123456789012345678901234567890"] {
            assert!(valid_number_str(s), "{s} should be valid");
        }
        assert!(valid_number(&Value::Number(-3.0)));
        assert!(valid_number(&Value::Number(0.0)));
        assert!(valid_number(&Value::Number(f64::NAN)));
        assert!(valid_number(&Value::Number(f64::INFINITY)));
    }

    #[test]
    fn test_invalid_numbers() {
        for s in ["1e5", "1,000", " 5", "5 ", "+5", ".5", "5.", "1.2.3", "abc", "", "-", "٣"] {
            assert!(!valid_number_str(s), "{s:?} should be invalid");
        }
        assert!(!valid_number(&Value::Bool(true)));
        assert!(!valid_number(&Value::Null));
        assert!(!valid_number(&Value::List(vec![])));
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Value::from("-2.25").to_number(), Some(-2.25));
        assert_eq!(Value::from(7).to_number(), Some(7.0));
        assert_eq!(Value::from("x").to_number(), None);
        assert_eq!(Value::Bool(true).to_number(), None);
    }

    #[test]
    fn test_convert_to_float() {
        let mut frame: Dataframe = vec![vec!["1".into()], vec!["x".into()], vec!["2.5".into()]];
        assert_eq!(convert_to_float(&mut frame, 0), 2);
        assert_eq!(frame[0][0], Value::Number(1.0));
        assert_eq!(frame[1][0], Value::from("x"));
        assert_eq!(frame[2][0], Value::Number(2.5));
        assert_eq!(convert_to_float(&mut frame, 0), 0);
    }

    #[test]
    fn test_convert_skips_short_rows_and_other_columns() {
        let mut frame: Dataframe = vec![
            vec!["a".into(), "10".into()],
            vec!["b".into()],
            vec!["3".into(), 4.into()],
        ];
        assert_eq!(convert_to_float(&mut frame, 1), 1);
        assert_eq!(frame[0][1], Value::Number(10.0));
        assert_eq!(frame[2][0], Value::from("3"));
        assert_eq!(convert_to_float(&mut frame, 5), 0);
        assert_eq!(convert_to_float(&mut Vec::new(), 0), 0);
    }
}
