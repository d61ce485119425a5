// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{ExerciseKind, WorkbenchConfig};
use crate::errors::ExerciseCreationError;
use crate::exercises::LocalExerciseFactory;
use crate::traits::Exercise;
use serde_json::Value;
use std::sync::Arc;

/// An exercise instance paired with the input it was configured with.
#[derive(Clone)]
pub struct ConfiguredExercise {
    pub id: String,
    pub kind: ExerciseKind,
    pub input: Value,
    pub exercise: Arc<dyn Exercise>,
}

impl std::fmt::Debug for ConfiguredExercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredExercise")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("exercise", &self.exercise.name())
            .finish()
    }
}

/// Exercises in configuration order.
///
/// Order matters: the runner reports results in the order exercises were
/// declared, regardless of which finished first.
#[derive(Clone, Debug, Default)]
pub struct ExerciseMap(pub Vec<ConfiguredExercise>);

impl ExerciseMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Instantiate every configured exercise through the local factory.
    pub fn from_config(cfg: &WorkbenchConfig) -> Result<Self, ExerciseCreationError> {
        let exercises = cfg
            .exercises
            .iter()
            .map(|exercise_cfg| -> Result<ConfiguredExercise, ExerciseCreationError> {
                Ok(ConfiguredExercise {
                    id: exercise_cfg.id.clone(),
                    kind: exercise_cfg.kind,
                    input: exercise_cfg.input.clone(),
                    exercise: LocalExerciseFactory::create_exercise(exercise_cfg)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(exercises))
    }

    pub fn push(&mut self, exercise: ConfiguredExercise) {
        self.0.push(exercise);
    }

    pub fn get(&self, id: &str) -> Option<&ConfiguredExercise> {
        self.0.iter().find(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ExerciseMap {
    type Item = ConfiguredExercise;
    type IntoIter = std::vec::IntoIter<ConfiguredExercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
