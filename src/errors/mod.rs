// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod input;

pub use config::{ConfigError, ValidationError};
pub use execution::{ExerciseCreationError, FailureStrategy, RunError};
pub use input::InvalidInputError;
