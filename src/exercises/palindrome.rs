// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{expect_str, respond};
use crate::text::is_palindrome;
use crate::traits::{Exercise, ExerciseRequest, ExerciseResponse};

/// Palindrome exercise - does the text read the same backwards
pub struct PalindromeExercise;

impl PalindromeExercise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PalindromeExercise {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exercise for PalindromeExercise {
    async fn run(&self, req: ExerciseRequest) -> ExerciseResponse {
        respond(expect_str(&req.input, "is_palindrome").map(is_palindrome))
    }

    fn name(&self) -> &'static str {
        "palindrome"
    }
}
