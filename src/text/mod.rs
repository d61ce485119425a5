// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stateless string and integer puzzles.

mod normalize;
mod permutations;
mod solver;

pub use normalize::{normalize, FrequencyMap};
pub use permutations::get_permutations;
pub use solver::{are_anagrams, find_factors, find_factors_of_value, is_palindrome};
