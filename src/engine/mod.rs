pub mod runner;
#[cfg(test)]
mod integration_tests;

pub use runner::{ExerciseResult, ExerciseRunner, RunReport};
