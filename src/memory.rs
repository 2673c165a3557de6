//! Heap usage probe.
//!
//! Reads jemalloc's allocated-bytes counter. The numbers only describe the
//! process heap when jemalloc is the global allocator, as in the
//! `lookup-bench` binary; otherwise they stay near zero.

use tikv_jemalloc_ctl::{epoch, stats};

/// Bytes currently allocated, or `None` if the statistics are unavailable.
pub fn allocated_bytes() -> Option<usize> {
    // Statistics are cached until the epoch advances.
    epoch::advance().ok()?;
    stats::allocated::read().ok()
}

/// Growth in allocated bytes between two probes.
pub fn delta(before: Option<usize>, after: Option<usize>) -> Option<usize> {
    before.zip(after).map(|(b, a)| a.saturating_sub(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        assert_eq!(delta(Some(100), Some(350)), Some(250));
        assert_eq!(delta(Some(350), Some(100)), Some(0));
        assert_eq!(delta(None, Some(100)), None);
        assert_eq!(delta(Some(100), None), None);
    }
}
