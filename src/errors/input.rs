// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The single error kind raised by the algorithms themselves.

use thiserror::Error;

/// Input rejected by an algorithm before any state was touched.
///
/// Carries the operation that refused the input, a rendering of the offending
/// value, and a short reason. Callers should treat it as a programming or
/// input error; retrying with the same value always fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{operation}: invalid input {value}: {reason}")]
pub struct InvalidInputError {
    pub operation: &'static str,
    pub value: String,
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(operation: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
