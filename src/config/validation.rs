// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use serde_json::Value;

use crate::config::consts::THRESHOLD_OPTION;
use crate::config::{ExerciseConfig, WorkbenchConfig};
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateExerciseId, EmptyExerciseId, InvalidExerciseOption, ValidationCompleted,
    ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Check a configuration for problems that parsing alone cannot catch.
///
/// Collects every problem instead of stopping at the first, so a user can fix
/// a config file in one pass. Exercise inputs are not checked here: bad input
/// is reported by the exercise itself when it runs.
pub fn validate_config(config: &WorkbenchConfig) -> Result<(), Vec<ValidationError>> {
    ValidationStarted {
        exercise_count: config.exercises.len(),
    }
    .log();

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (position, exercise) in config.exercises.iter().enumerate() {
        if exercise.id.trim().is_empty() {
            EmptyExerciseId { position }.log();
            errors.push(ValidationError::EmptyExerciseId { position });
        } else if !seen.insert(exercise.id.as_str()) {
            DuplicateExerciseId {
                exercise_id: &exercise.id,
            }
            .log();
            errors.push(ValidationError::DuplicateExerciseId {
                exercise_id: exercise.id.clone(),
            });
        }

        errors.extend(validate_options(exercise));
    }

    ValidationCompleted {
        exercise_count: config.exercises.len(),
        error_count: errors.len(),
    }
    .log();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_options(exercise: &ExerciseConfig) -> Vec<ValidationError> {
    let supported = exercise.kind.supported_options();
    let mut keys: Vec<&String> = exercise.options.keys().collect();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| {
            let reason = if !supported.contains(&key.as_str()) {
                format!("not supported by '{}' exercises", exercise.kind.as_str())
            } else if key == THRESHOLD_OPTION
                && !matches!(exercise.options[key], Value::Number(_) | Value::Null)
            {
                format!("expected a number, found {}", exercise.options[key])
            } else {
                return None;
            };

            InvalidExerciseOption {
                exercise_id: &exercise.id,
                option: key,
                reason: &reason,
            }
            .log();

            Some(ValidationError::InvalidOption {
                exercise_id: exercise.id.clone(),
                option: key.clone(),
                reason,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config_str, ConfigFormat};

    fn validate_yaml(yaml: &str) -> Result<(), Vec<ValidationError>> {
        let cfg = parse_config_str(yaml, ConfigFormat::Yaml).unwrap();
        validate_config(&cfg)
    }

    #[test]
    fn test_valid_config() {
        let result = validate_yaml(
            r#"
exercises:
  - id: peaks
    kind: peak_finder
    input: [1, 2, 1]
    options: { threshold: 1.5 }
  - id: pal
    kind: palindrome
    input: "racecar"
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_null_threshold_means_no_threshold() {
        let result = validate_yaml(
            r#"
exercises:
  - id: peaks
    kind: peak_finder
    options: { threshold: null }
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let errors = validate_yaml(
            r#"
exercises:
  - id: x
    kind: factors
  - id: x
    kind: factors
  - id: "  "
    kind: factors
"#,
        )
        .unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateExerciseId {
                    exercise_id: "x".to_string()
                },
                ValidationError::EmptyExerciseId { position: 2 },
            ]
        );
    }

    #[test]
    fn test_non_numeric_threshold() {
        let errors = validate_yaml(
            r#"
exercises:
  - id: peaks
    kind: peak_finder
    options: { threshold: "high" }
"#,
        )
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("expected a number"));
    }

    #[test]
    fn test_unsupported_option() {
        let errors = validate_yaml(
            r#"
exercises:
  - id: pal
    kind: palindrome
    options: { threshold: 2 }
"#,
        )
        .unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::InvalidOption {
                exercise_id: "pal".to_string(),
                option: "threshold".to_string(),
                reason: "not supported by 'palindrome' exercises".to_string(),
            }]
        );
    }
}
