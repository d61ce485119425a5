// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

/// Keep only alphanumeric characters, lowercased.
///
/// Lowercasing can expand a single character (e.g. `'İ'`), so this maps
/// through `char::to_lowercase` rather than assuming one-to-one.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Character occurrence counts for an already-normalized string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap(HashMap<char, usize>);

impl FrequencyMap {
    pub fn from_normalized(normalized: &str) -> Self {
        let mut counts = HashMap::new();
        for c in normalized.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, c: char) -> usize {
        self.0.get(&c).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.0.len()
    }
}
