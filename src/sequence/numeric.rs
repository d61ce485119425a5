// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

use crate::errors::InvalidInputError;

/// A checked numeric value: the only thing a sequence ever stores.
///
/// Integers and floats compare by exact mathematical value across variants,
/// so `Int(3)` equals `Float(3.0)` and `Int(2^53 + 1)` is greater than
/// `Float(2^53)`. NaN is unordered against everything.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Check a dynamically typed value.
    ///
    /// Only JSON numbers are accepted. Booleans are rejected even though
    /// some languages treat them as integers.
    pub fn from_value(value: &Value, operation: &'static str) -> Result<Self, InvalidInputError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Numeric::Int(i))
                } else {
                    n.as_f64().map(Numeric::Float).ok_or_else(|| {
                        InvalidInputError::new(operation, value.to_string(), "number is out of range")
                    })
                }
            }
            other => Err(InvalidInputError::new(
                operation,
                other.to_string(),
                format!("expected a number, found {}", kind_of(other)),
            )),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(b)),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(b),
            (Numeric::Int(a), Numeric::Float(b)) => cmp_int_float(*a, *b),
            (Numeric::Float(a), Numeric::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
        }
    }
}

/// Compare without rounding the integer through `f64`.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63: the first float above every i64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    // In range, so the truncated float converts to i64 exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Numeric::Float(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_integers_and_floats() {
        assert_eq!(Numeric::from_value(&json!(4), "test").unwrap(), Numeric::Int(4));
        assert_eq!(Numeric::from_value(&json!(-2.5), "test").unwrap(), Numeric::Float(-2.5));
        assert!(matches!(
            Numeric::from_value(&json!(u64::MAX), "test").unwrap(),
            Numeric::Float(_)
        ));
    }

    #[test]
    fn test_from_value_rejects_non_numbers() {
        for value in [json!("3"), json!(true), json!(null), json!([1]), json!({"n": 1})] {
            let err = Numeric::from_value(&value, "ingest").unwrap_err();
            assert_eq!(err.operation, "ingest");
            assert_eq!(err.value, value.to_string());
        }
    }

    #[test]
    fn test_boolean_rejection_names_the_kind() {
        let err = Numeric::from_value(&json!(false), "ingest").unwrap_err();
        assert_eq!(err.reason, "expected a number, found a boolean");
    }

    #[test]
    fn test_cross_variant_comparison() {
        assert_eq!(Numeric::Int(3), Numeric::Float(3.0));
        assert!(Numeric::Float(3.5) > Numeric::Int(3));
        assert!(Numeric::Int(i64::MAX) > Numeric::Int(i64::MAX - 1));
        assert!(Numeric::Float(f64::NAN).partial_cmp(&Numeric::Int(0)).is_none());
    }

    #[test]
    fn test_int_float_comparison_is_exact_beyond_f64_precision() {
        let big = Numeric::Int(9_007_199_254_740_993);
        let nearest_float = Numeric::Float(9_007_199_254_740_992.0);

        assert!(big > nearest_float);
        assert!(nearest_float < big);
        assert_ne!(big, nearest_float);
        assert_eq!(Numeric::Int(9_007_199_254_740_992), nearest_float);
    }

    #[test]
    fn test_int_float_comparison_at_the_edges() {
        assert!(Numeric::Int(-3) > Numeric::Float(-3.5));
        assert!(Numeric::Int(-4) < Numeric::Float(-3.5));
        assert!(Numeric::Int(i64::MAX) < Numeric::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Numeric::Int(i64::MIN), Numeric::Float(-9_223_372_036_854_775_808.0));
        assert!(Numeric::Int(i64::MIN) > Numeric::Float(f64::NEG_INFINITY));
        assert!(Numeric::Int(i64::MAX) < Numeric::Float(f64::INFINITY));
    }

    #[test]
    fn test_display_keeps_float_marker() {
        assert_eq!(Numeric::Int(7).to_string(), "7");
        assert_eq!(Numeric::Float(7.0).to_string(), "7.0");
    }

    #[test]
    fn test_serializes_untagged() {
        let encoded = serde_json::to_string(&[Numeric::Int(1), Numeric::Float(2.5)]).unwrap();
        assert_eq!(encoded, "[1,2.5]");
    }
}
