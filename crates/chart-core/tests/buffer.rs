// File: crates/chart-core/tests/buffer.rs
// Purpose: Sliding-window semantics and the ordering policy of SampleBuffer.

use chart_core::buffer::MAX_ABS_VALUE;
use chart_core::{AppendOutcome, RejectReason, Sample, SampleBuffer};

fn ramp(n: i64) -> Vec<Sample> {
    (0..n).map(|i| Sample::new(i * 1_000, 100.0 + i as f64)).collect()
}

#[test]
fn append_beyond_capacity_drops_oldest_first() {
    let mut buf = SampleBuffer::new(5);
    for s in ramp(5) {
        assert_eq!(buf.append(s), AppendOutcome::Appended { evicted: vec![] });
    }
    let out = buf.append(Sample::new(5_000, 105.0));
    assert_eq!(out.evicted(), &[Sample::new(0, 100.0)]);
    assert_eq!(buf.len(), 5);

    let ts: Vec<i64> = buf.snapshot().iter().map(|s| s.timestamp).collect();
    assert_eq!(ts, vec![1_000, 2_000, 3_000, 4_000, 5_000]);
}

#[test]
fn duplicate_timestamp_is_rejected_without_change() {
    let mut buf = SampleBuffer::from_samples(10, ramp(3));
    let before = buf.snapshot();
    let out = buf.append(Sample::new(2_000, 999.0));
    assert_eq!(out, AppendOutcome::Rejected(RejectReason::Duplicate { timestamp: 2_000 }));
    assert_eq!(buf.snapshot(), before);
}

#[test]
fn out_of_order_timestamp_is_rejected_without_change() {
    let mut buf = SampleBuffer::from_samples(10, ramp(3));
    let out = buf.append(Sample::new(500, 1.0));
    assert_eq!(
        out,
        AppendOutcome::Rejected(RejectReason::OutOfOrder { timestamp: 500, last: 2_000 })
    );
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.last().map(|s| s.value), Some(102.0));
}

#[test]
fn non_finite_values_are_rejected() {
    let mut buf = SampleBuffer::new(4);
    assert!(!buf.append(Sample::new(0, f64::NAN)).is_appended());
    assert!(!buf.append(Sample::new(1, f64::INFINITY)).is_appended());
    assert!(buf.is_empty());
}

#[test]
fn huge_finite_values_are_rejected() {
    let mut buf = SampleBuffer::new(4);
    assert_eq!(
        buf.append(Sample::new(0, -1e308)),
        AppendOutcome::Rejected(RejectReason::OutOfRange { timestamp: 0 })
    );
    assert!(!buf.append(Sample::new(1, f64::MAX)).is_appended());
    assert!(buf.is_empty());

    // The bound itself is accepted.
    assert!(buf.append(Sample::new(2, MAX_ABS_VALUE)).is_appended());
    assert!(buf.append(Sample::new(3, -MAX_ABS_VALUE)).is_appended());
    assert_eq!(buf.len(), 2);
}

#[test]
fn replace_keeps_newest_accepted_samples() {
    let mut buf = SampleBuffer::from_samples(3, ramp(2));
    let incoming = vec![
        Sample::new(10, 1.0),
        Sample::new(20, 2.0),
        Sample::new(20, 9.0), // duplicate
        Sample::new(15, 9.0), // out of order
        Sample::new(30, 3.0),
        Sample::new(40, 4.0),
    ];
    let out = buf.replace(incoming);
    assert_eq!(out.accepted, 4);
    assert_eq!(out.rejected, 2);
    assert_eq!(out.evicted, 1);

    let values: Vec<f64> = buf.snapshot().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![2.0, 3.0, 4.0]);
}

#[test]
fn snapshot_is_unaffected_by_later_mutation() {
    let mut buf = SampleBuffer::from_samples(3, ramp(3));
    let snap = buf.snapshot();
    buf.append(Sample::new(9_000, 0.0));
    buf.replace(Vec::new());
    assert_eq!(snap.len(), 3);
    assert_eq!(snap.first().map(|s| s.timestamp), Some(0));
    assert!(buf.snapshot().is_empty());
}

#[test]
fn zero_capacity_is_floored_to_one() {
    let mut buf = SampleBuffer::new(0);
    buf.append(Sample::new(1, 1.0));
    buf.append(Sample::new(2, 2.0));
    assert_eq!(buf.capacity(), 1);
    assert_eq!(buf.snapshot().samples(), &[Sample::new(2, 2.0)]);
}
