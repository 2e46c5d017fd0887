// File: crates/chart-core/src/series.rs
// Summary: Immutable, time-ordered series snapshot handed to builders and renderers.
// Notes:
// - A `Series` is only ever produced by `SampleBuffer::snapshot`, so its
//   ordering invariant (strictly increasing timestamps) holds by construction.
// - Cloning is cheap (shared slice); a snapshot never changes after creation.

use std::ops::Deref;
use std::sync::Arc;

use crate::types::{Sample, SampleId};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    samples: Arc<[Sample]>,
}

impl Series {
    pub fn empty() -> Self {
        Self { samples: Arc::from(Vec::new()) }
    }

    /// Caller guarantees strictly increasing timestamps.
    pub(crate) fn from_ordered(samples: Vec<Sample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self { samples: Arc::from(samples) }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Position of the sample with `id`, if present. Timestamps are sorted,
    /// so this is a binary search.
    pub fn index_of(&self, id: SampleId) -> Option<usize> {
        self.samples.binary_search_by_key(&id.0, |s| s.timestamp).ok()
    }

    /// Min and max of the sample values; `None` when empty.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter();
        let first = iter.next()?.value;
        Some(iter.fold((first, first), |(lo, hi), s| (lo.min(s.value), hi.max(s.value))))
    }
}

impl Deref for Series {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::empty()
    }
}
