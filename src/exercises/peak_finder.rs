// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{expect_array, respond};
use crate::sequence::SequenceProcessor;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

/// Peak Finder exercise - interior local maxima, optionally above a threshold
pub struct PeakFinderExercise {
    threshold: Option<f64>,
}

impl PeakFinderExercise {
    pub fn new(threshold: Option<f64>) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }
}

#[async_trait]
impl Exercise for PeakFinderExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        respond(expect_array(&req.input, "ingest").and_then(|values| {
            let mut processor = SequenceProcessor::new();
            processor.ingest(values)?;
            Ok(processor.find_peaks(self.threshold))
        }))
    }

    fn name(&self) -> &'static str {
        "peak_finder"
    }
}
