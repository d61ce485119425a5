// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Running statistics over an append-only numeric sequence.

mod numeric;
mod processor;

pub use numeric::Numeric;
pub use processor::{Peak, SequenceProcessor};
