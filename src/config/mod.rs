// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod exercise_map;
mod loader;
mod runtime;
mod validation;

pub mod consts;

pub use exercise_map::{ConfiguredExercise, ExerciseMap};
pub use loader::{
    load_and_validate_config, load_config, parse_config_str, ConfigFormat, ExerciseConfig,
    ExerciseKind, RunnerOptions, WorkbenchConfig,
};
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
