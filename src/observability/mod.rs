// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic line the crate emits is a message struct with a `Display`
//! implementation, so log text lives in one place instead of being scattered
//! through the algorithms as format strings.
//!
//! Messages are organized by subsystem:
//! * `messages::sequence` - Sequence ingestion and peak detection
//! * `messages::solver` - Text and integer solvers
//! * `messages::runner` - Exercise runner lifecycle
//! * `messages::validation` - Configuration validation
//!
//! # Usage
//!
//! ```rust
//! use the_workbench::observability::messages::solver::InputRejected;
//!
//! let msg = InputRejected {
//!     operation: "find_factors",
//!     value: "-3",
//!     reason: "must be positive",
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;
