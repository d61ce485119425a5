// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Error code for input the exercise refused.
pub const ERROR_CODE_INVALID_INPUT: i32 = 400;
/// Error code for failures that are not the caller's fault.
pub const ERROR_CODE_INTERNAL: i32 = 500;

/// Input handed to an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRequest {
    pub input: Value,
}

/// Why an exercise produced no output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Output(Value),
    Error(ErrorDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseResponse {
    pub outcome: Outcome,
}

impl ExerciseResponse {
    pub fn output(value: Value) -> Self {
        Self {
            outcome: Outcome::Output(value),
        }
    }

    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error(ErrorDetail {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

/// One runnable algorithm invocation.
///
/// Implementations hold only their configuration. Any working state (such
/// as a sequence) is created per call, so a single instance can serve
/// concurrent requests.
#[async_trait]
pub trait Exercise: Send + Sync {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse;

    fn name(&self) -> &'static str;
}
