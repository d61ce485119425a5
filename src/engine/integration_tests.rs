// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{load_and_validate_config, RuntimeBuilder};
use crate::traits::Outcome;
use serde_json::json;

fn output_of(report: &crate::engine::RunReport, id: &str) -> serde_json::Value {
    match &report.get(id).unwrap().response.outcome {
        Outcome::Output(value) => value.clone(),
        Outcome::Error(detail) => panic!("Exercise '{}' failed: {}", id, detail.message),
    }
}

/// Runs the demo config end to end and checks every answer
#[tokio::test]
async fn test_demo_config_end_to_end() {
    let config = load_and_validate_config("configs/demo.yaml").unwrap();
    let (exercises, runner) = RuntimeBuilder::from_config(&config).unwrap();

    let report = runner.run(exercises).await.unwrap();

    assert_eq!(report.succeeded(), 6);
    assert_eq!(output_of(&report, "palindrome"), json!(true));
    assert_eq!(output_of(&report, "anagram"), json!(true));
    assert_eq!(output_of(&report, "factors"), json!([1, 2, 4, 7, 14, 28]));

    let permutations = output_of(&report, "permutations");
    assert_eq!(permutations.as_array().unwrap().len(), 6);
    assert_eq!(permutations[0], json!(["A", "B", "C"]));

    let averages = output_of(&report, "running_averages");
    assert_eq!(averages[0], json!(1.0));
    assert_eq!(averages[3], json!(2.5));
    assert_eq!(averages.as_array().unwrap().len(), 9);

    assert_eq!(
        output_of(&report, "peaks"),
        json!([
            {"index": 3, "value": 4},
            {"index": 5, "value": 5},
            {"index": 7, "value": 6},
        ])
    );
}

/// Edge cases: empty results are outputs, bad inputs are errors
#[tokio::test]
async fn test_edge_case_config_continues_on_error() {
    let config = load_and_validate_config("configs/edge-cases.toml").unwrap();
    let (exercises, runner) = RuntimeBuilder::from_config(&config).unwrap();

    let report = runner.run(exercises).await.unwrap();

    assert_eq!(report.results.len(), 5);
    assert_eq!(output_of(&report, "empty_anagrams"), json!(false));
    assert_eq!(output_of(&report, "short_sequence_peaks"), json!([]));

    for id in ["factors_of_zero", "factors_of_negative", "mixed_sequence"] {
        match &report.get(id).unwrap().response.outcome {
            Outcome::Error(detail) => assert_eq!(detail.code, 400, "exercise {}", id),
            other => panic!("Expected '{}' to fail, got {:?}", id, other),
        }
    }
    assert_eq!(report.failed(), 3);
}
