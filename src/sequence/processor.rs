// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::Value;

use super::numeric::Numeric;
use crate::errors::InvalidInputError;
use crate::observability::messages::sequence::{IngestRejected, PeaksFound, ValuesIngested};
use crate::observability::messages::StructuredLog;

const INGEST: &str = "ingest";

/// An interior element that is strictly greater than both neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub index: usize,
    pub value: Numeric,
}

/// Append-only numeric sequence with derived running averages and peaks.
///
/// The sequence is only ever extended. To start over, create a new
/// processor. Queries are pure functions of the current contents.
#[derive(Debug, Clone, Default)]
pub struct SequenceProcessor {
    data: Vec<Numeric>,
}

impl SequenceProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of dynamically typed values.
    ///
    /// The whole batch is checked before anything is appended. On the first
    /// non-numeric element the call fails and the sequence is unchanged.
    pub fn ingest(&mut self, values: &[Value]) -> Result<(), InvalidInputError> {
        let mut checked = Vec::with_capacity(values.len());
        for (position, value) in values.iter().enumerate() {
            match Numeric::from_value(value, INGEST) {
                Ok(number) => checked.push(number),
                Err(err) => {
                    IngestRejected {
                        position,
                        value: &err.value,
                        batch_len: values.len(),
                    }
                    .log();
                    return Err(InvalidInputError {
                        reason: format!("element {}: {}", position, err.reason),
                        ..err
                    });
                }
            }
        }

        let accepted = checked.len();
        self.data.append(&mut checked);

        ValuesIngested {
            accepted,
            sequence_len: self.data.len(),
        }
        .log();

        Ok(())
    }

    /// Mean of every prefix, in ingestion order. Empty when no data.
    ///
    /// Integers are summed exactly in `i128` and only converted for the
    /// division, so all-integer prefixes round once rather than per element.
    pub fn running_averages(&self) -> Vec<f64> {
        let mut int_total: i128 = 0;
        let mut float_total = 0.0;
        self.data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                match *value {
                    Numeric::Int(n) => int_total += i128::from(n),
                    Numeric::Float(x) => float_total += x,
                }
                (int_total as f64 + float_total) / (i + 1) as f64
            })
            .collect()
    }

    /// Interior local maxima in ascending index order.
    ///
    /// Sequences shorter than three elements have no interior and yield no
    /// peaks. With a threshold, a peak must also be strictly above it.
    pub fn find_peaks(&self, threshold: Option<f64>) -> Vec<Peak> {
        let peaks: Vec<Peak> = self
            .data
            .windows(3)
            .enumerate()
            .filter_map(|(i, window)| {
                let (prev, value, next) = (window[0], window[1], window[2]);
                let is_local_max = value > prev && value > next;
                let clears_threshold = threshold.map_or(true, |t| value.as_f64() > t);
                (is_local_max && clears_threshold).then_some(Peak { index: i + 1, value })
            })
            .collect();

        PeaksFound {
            sequence_len: self.data.len(),
            peak_count: peaks.len(),
            threshold,
        }
        .log();

        peaks
    }

    pub fn values(&self) -> &[Numeric] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Typed values are numeric by construction, so extending cannot fail.
impl<N: Into<Numeric>> Extend<N> for SequenceProcessor {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.data.extend(iter.into_iter().map(Into::into));
    }
}
