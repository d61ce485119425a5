// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting the event with its fields attached.
//!
//! # Organization
//!
//! * `sequence` - Sequence ingestion and derived queries
//! * `solver` - Text and integer solver events
//! * `runner` - Exercise runner lifecycle and execution events
//! * `validation` - Configuration validation warnings and errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_workbench::observability::messages::runner::RunStarted;
//! use the_workbench::observability::messages::StructuredLog;
//!
//! let msg = RunStarted {
//!     exercise_count: 6,
//!     max_concurrency: 4,
//!     failure_strategy: "fail_fast",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod runner;
pub mod sequence;
pub mod solver;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level with its fields attached.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
