// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::normalize::{normalize, FrequencyMap};
use crate::errors::InvalidInputError;
use crate::observability::messages::solver::InputRejected;
use crate::observability::messages::StructuredLog;

const FIND_FACTORS: &str = "find_factors";

/// True when the normalized text reads the same in both directions.
///
/// Text with no alphanumeric characters normalizes to "" and counts as a
/// palindrome, as does any single character.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = normalize(text).chars().collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// True when both texts use the same characters the same number of times.
///
/// If either side normalizes to nothing the answer is `false`, so two empty
/// strings are not anagrams of each other.
pub fn are_anagrams(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    FrequencyMap::from_normalized(&a) == FrequencyMap::from_normalized(&b)
}

/// Every divisor of `n` in ascending order.
///
/// Scans `1..=n`, which is fine for the small inputs this is meant for.
pub fn find_factors(n: i64) -> Result<Vec<i64>, InvalidInputError> {
    if n <= 0 {
        return Err(reject(n.to_string(), "must be positive"));
    }
    Ok((1..=n).filter(|i| n % i == 0).collect())
}

/// [`find_factors`] for a dynamically typed value.
///
/// Only JSON integers are accepted; `28.0`, `"28"` and `true` are refused
/// even though they look numeric.
pub fn find_factors_of_value(value: &Value) -> Result<Vec<i64>, InvalidInputError> {
    let n = value
        .as_i64()
        .ok_or_else(|| reject(value.to_string(), "must be an integer"))?;
    find_factors(n)
}

fn reject(value: String, reason: &str) -> InvalidInputError {
    InputRejected {
        operation: FIND_FACTORS,
        value: &value,
        reason,
    }
    .log();
    InvalidInputError::new(FIND_FACTORS, value, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome("Was it a car or a cat I saw?"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_is_palindrome_trivial_inputs() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!"));
        assert!(is_palindrome("x"));
    }

    #[test]
    fn test_are_anagrams() {
        assert!(are_anagrams("listen", "silent"));
        assert!(are_anagrams("Dormitory", "dirty room!"));
        assert!(!are_anagrams("listen", "listens"));
        assert!(!are_anagrams("abc", "abd"));
    }

    #[test]
    fn test_are_anagrams_empty_is_false() {
        assert!(!are_anagrams("", ""));
        assert!(!are_anagrams("   ", "abc"));
        assert!(!are_anagrams("abc", "?!"));
    }

    #[test]
    fn test_find_factors() {
        assert_eq!(find_factors(28).unwrap(), vec![1, 2, 4, 7, 14, 28]);
        assert_eq!(find_factors(1).unwrap(), vec![1]);
        assert_eq!(find_factors(13).unwrap(), vec![1, 13]);
    }

    #[test]
    fn test_find_factors_rejects_non_positive() {
        for n in [0, -3] {
            let err = find_factors(n).unwrap_err();
            assert_eq!(err.operation, "find_factors");
            assert_eq!(err.value, n.to_string());
            assert_eq!(err.reason, "must be positive");
        }
    }

    #[test]
    fn test_find_factors_of_value() {
        assert_eq!(find_factors_of_value(&json!(12)).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert!(find_factors_of_value(&json!(-3)).is_err());
    }

    #[test]
    fn test_find_factors_of_value_rejects_non_integers() {
        for value in [json!(28.0), json!("28"), json!(true), json!(null)] {
            let err = find_factors_of_value(&value).unwrap_err();
            assert_eq!(err.reason, "must be an integer", "value {}", value);
        }
    }
}
