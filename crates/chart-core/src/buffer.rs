// File: crates/chart-core/src/buffer.rs
// Summary: Bounded sliding window of samples with FIFO eviction and snapshot reads.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::series::Series;
use crate::types::Sample;

/// Default window length.
pub const DEFAULT_CAPACITY: usize = 30;

/// Largest accepted `|value|`. Keeps `max - min` finite for any stored pair.
pub const MAX_ABS_VALUE: f64 = f64::MAX / 2.0;

/// Why an incoming sample was refused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RejectReason {
    /// Timestamp equal to the newest stored sample.
    Duplicate { timestamp: i64 },
    /// Timestamp older than the newest stored sample.
    OutOfOrder { timestamp: i64, last: i64 },
    /// NaN or infinite value.
    NonFinite { timestamp: i64 },
    /// Finite, but beyond [`MAX_ABS_VALUE`].
    OutOfRange { timestamp: i64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RejectReason::Duplicate { timestamp } => write!(f, "duplicate timestamp {timestamp}"),
            RejectReason::OutOfOrder { timestamp, last } => {
                write!(f, "timestamp {timestamp} is not after {last}")
            }
            RejectReason::NonFinite { timestamp } => {
                write!(f, "non-finite value at timestamp {timestamp}")
            }
            RejectReason::OutOfRange { timestamp } => {
                write!(f, "value magnitude too large at timestamp {timestamp}")
            }
        }
    }
}

/// Result of a single `append`.
#[derive(Clone, Debug, PartialEq)]
pub enum AppendOutcome {
    /// Stored; `evicted` holds whatever fell off the front (oldest first).
    Appended { evicted: Vec<Sample> },
    /// Buffer unchanged.
    Rejected(RejectReason),
}

impl AppendOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, AppendOutcome::Appended { .. })
    }

    pub fn evicted(&self) -> &[Sample] {
        match self {
            AppendOutcome::Appended { evicted } => evicted,
            AppendOutcome::Rejected(_) => &[],
        }
    }
}

/// Result of a whole-window `replace`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Samples that passed the ordering policy.
    pub accepted: usize,
    /// Samples dropped by the ordering policy.
    pub rejected: usize,
    /// Accepted samples pushed out by the capacity bound.
    pub evicted: usize,
}

/// Fixed-capacity, timestamp-ordered window.
///
/// Ordering policy: a sample is accepted only if its timestamp is strictly
/// greater than the newest stored one and its value is finite and within
/// [`MAX_ABS_VALUE`]. Anything else is a no-op reported through
/// [`AppendOutcome::Rejected`].
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleBuffer {
    /// `capacity` is floored at 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    /// Build a window from `samples` under the same policy as [`Self::replace`].
    pub fn from_samples(capacity: usize, samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut buf = Self::new(capacity);
        buf.replace(samples);
        buf
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    fn check(&self, sample: &Sample) -> Result<(), RejectReason> {
        if !sample.value.is_finite() {
            return Err(RejectReason::NonFinite { timestamp: sample.timestamp });
        }
        if sample.value.abs() > MAX_ABS_VALUE {
            return Err(RejectReason::OutOfRange { timestamp: sample.timestamp });
        }
        match self.samples.back() {
            Some(last) if sample.timestamp == last.timestamp => {
                Err(RejectReason::Duplicate { timestamp: sample.timestamp })
            }
            Some(last) if sample.timestamp < last.timestamp => Err(RejectReason::OutOfOrder {
                timestamp: sample.timestamp,
                last: last.timestamp,
            }),
            _ => Ok(()),
        }
    }

    fn trim(&mut self) -> Vec<Sample> {
        let excess = self.samples.len().saturating_sub(self.capacity);
        self.samples.drain(..excess).collect()
    }

    pub fn append(&mut self, sample: Sample) -> AppendOutcome {
        if let Err(reason) = self.check(&sample) {
            debug!(%reason, "sample rejected");
            return AppendOutcome::Rejected(reason);
        }
        self.samples.push_back(sample);
        let evicted = self.trim();
        if !evicted.is_empty() {
            trace!(count = evicted.len(), len = self.samples.len(), "evicted oldest samples");
        }
        AppendOutcome::Appended { evicted }
    }

    /// Swap the whole window. Incoming samples go through the append policy,
    /// and only the newest `capacity` accepted samples are kept.
    pub fn replace(&mut self, samples: impl IntoIterator<Item = Sample>) -> ReplaceOutcome {
        let mut next = Self::new(self.capacity);
        let mut outcome = ReplaceOutcome::default();
        for sample in samples {
            match next.append(sample) {
                AppendOutcome::Appended { evicted } => {
                    outcome.accepted += 1;
                    outcome.evicted += evicted.len();
                }
                AppendOutcome::Rejected(_) => outcome.rejected += 1,
            }
        }
        *self = next;
        debug!(
            accepted = outcome.accepted,
            rejected = outcome.rejected,
            evicted = outcome.evicted,
            "series replaced"
        );
        outcome
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Immutable copy of the current window.
    pub fn snapshot(&self) -> Series {
        Series::from_ordered(self.samples.iter().copied().collect())
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
