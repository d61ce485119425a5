// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config + runtime builder
pub mod engine;     // exercise runner
pub mod errors;     // error handling
pub mod exercises;  // in-process exercises
pub mod observability;
pub mod sequence;   // running averages + peaks
pub mod text;       // palindrome, anagram, factors, permutations
pub mod traits;     // unified abstractions
