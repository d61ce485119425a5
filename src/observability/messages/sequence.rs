// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for sequence ingestion and derived queries.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A batch of values was appended to the sequence.
///
/// # Log Level
/// `debug!` - Routine state change
///
/// # Example
/// ```
/// use the_workbench::observability::messages::sequence::ValuesIngested;
///
/// let msg = ValuesIngested {
///     accepted: 9,
///     sequence_len: 9,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ValuesIngested {
    pub accepted: usize,
    pub sequence_len: usize,
}

impl Display for ValuesIngested {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ingested {} values: sequence_len={}",
            self.accepted, self.sequence_len
        )
    }
}

impl StructuredLog for ValuesIngested {
    fn log(&self) {
        tracing::debug!(
            accepted = self.accepted,
            sequence_len = self.sequence_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "ingest",
            span_name = name,
            accepted = self.accepted,
            sequence_len = self.sequence_len,
        )
    }
}

/// A batch was refused because one element was not numeric.
///
/// # Log Level
/// `warn!` - Caller supplied bad data; sequence left unchanged
///
/// # Example
/// ```
/// use the_workbench::observability::messages::sequence::IngestRejected;
///
/// let msg = IngestRejected {
///     position: 2,
///     value: "\"abc\"",
///     batch_len: 4,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct IngestRejected<'a> {
    pub position: usize,
    pub value: &'a str,
    pub batch_len: usize,
}

impl Display for IngestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected batch of {} values: element {} ({}) is not numeric",
            self.batch_len, self.position, self.value
        )
    }
}

impl StructuredLog for IngestRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            position = self.position,
            value = self.value,
            batch_len = self.batch_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "ingest",
            span_name = name,
            position = self.position,
            value = self.value,
            batch_len = self.batch_len,
        )
    }
}

/// Peak detection finished.
///
/// # Log Level
/// `debug!` - Routine computation
pub struct PeaksFound {
    pub sequence_len: usize,
    pub peak_count: usize,
    pub threshold: Option<f64>,
}

impl Display for PeaksFound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.threshold {
            Some(threshold) => write!(
                f,
                "Found {} peaks above {} in {} values",
                self.peak_count, threshold, self.sequence_len
            ),
            None => write!(
                f,
                "Found {} peaks in {} values",
                self.peak_count, self.sequence_len
            ),
        }
    }
}

impl StructuredLog for PeaksFound {
    fn log(&self) {
        tracing::debug!(
            sequence_len = self.sequence_len,
            peak_count = self.peak_count,
            threshold = self.threshold,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "find_peaks",
            span_name = name,
            sequence_len = self.sequence_len,
            peak_count = self.peak_count,
            threshold = self.threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_rejected_display() {
        let msg = IngestRejected {
            position: 1,
            value: "true",
            batch_len: 3,
        };
        assert_eq!(
            msg.to_string(),
            "Rejected batch of 3 values: element 1 (true) is not numeric"
        );
    }

    #[test]
    fn test_peaks_found_display_mentions_threshold_only_when_set() {
        let with = PeaksFound {
            sequence_len: 9,
            peak_count: 2,
            threshold: Some(3.0),
        };
        let without = PeaksFound {
            sequence_len: 9,
            peak_count: 4,
            threshold: None,
        };
        assert_eq!(with.to_string(), "Found 2 peaks above 3 in 9 values");
        assert_eq!(without.to_string(), "Found 4 peaks in 9 values");
    }
}
