// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the text and integer solvers.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A solver refused its input.
///
/// # Log Level
/// `warn!` - Caller supplied bad data
///
/// # Example
/// ```
/// use the_workbench::observability::messages::solver::InputRejected;
///
/// let msg = InputRejected {
///     operation: "find_factors",
///     value: "0",
///     reason: "must be positive",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct InputRejected<'a> {
    pub operation: &'a str,
    pub value: &'a str,
    pub reason: &'a str,
}

impl Display for InputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Operation '{}' rejected input {}: {}",
            self.operation, self.value, self.reason
        )
    }
}

impl StructuredLog for InputRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            value = self.value,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "solver",
            span_name = name,
            operation = self.operation,
            value = self.value,
        )
    }
}

/// Permutation enumeration finished.
///
/// # Log Level
/// `debug!` - Routine computation
pub struct PermutationsEnumerated {
    pub item_count: usize,
    pub permutation_count: usize,
}

impl Display for PermutationsEnumerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Enumerated {} permutations of {} items",
            self.permutation_count, self.item_count
        )
    }
}

impl StructuredLog for PermutationsEnumerated {
    fn log(&self) {
        tracing::debug!(
            item_count = self.item_count,
            permutation_count = self.permutation_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "permutations",
            span_name = name,
            item_count = self.item_count,
        )
    }
}
