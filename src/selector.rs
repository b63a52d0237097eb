use crate::bounded_heap::{Admission, BoundedMinHeap};
use serde::{Deserialize, Serialize};

/// Counters describing one selection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Elements read from the input.
    pub scanned: u64,
    /// Elements appended while the heap was filling up.
    pub filled: u64,
    /// Elements that overwrote the heap root.
    pub replaced: u64,
    /// Elements dropped without entering the heap.
    pub discarded: u64,
    /// True when `k >= n` and the input was returned as-is.
    pub fast_path: bool,
}

impl SelectionStats {
    fn record(&mut self, admission: Admission) {
        self.scanned += 1;
        match admission {
            Admission::Filled => self.filled += 1,
            Admission::Replaced => self.replaced += 1,
            Admission::Discarded => self.discarded += 1,
        }
    }
}

/// Selects the `k` largest elements of a collection in a single pass.
///
/// Configure once, then run against any number of inputs. Each call owns its
/// own heap buffer, so a shared selector can be used from several threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    pub k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self { k: 10 }
    }
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn select<T: Ord>(&self, input: Vec<T>) -> Vec<T> {
        select(input, self.k)
    }

    pub fn select_slice<T: Ord + Clone>(&self, input: &[T]) -> Vec<T> {
        select_slice(input, self.k)
    }

    pub fn select_with_stats<T: Ord>(&self, input: Vec<T>) -> (Vec<T>, SelectionStats) {
        select_with_stats(input, self.k)
    }
}

/// Returns the `k` largest elements of `input`, in no particular order.
///
/// When `k >= input.len()` the input is returned unchanged. Otherwise a
/// min-heap of capacity `k` is filled from the first `k` elements, and every
/// later element strictly greater than the heap root replaces it.
///
/// Elements equal to the root are not admitted, so when several elements tie
/// with the k-th largest value, which of them survive depends on input order.
/// The result is always the top-k multiset of values; only the identity of
/// equal elements is unspecified.
pub fn select<T: Ord>(input: Vec<T>, k: usize) -> Vec<T> {
    select_with_stats(input, k).0
}

/// Like [`select`], also returning counters for the pass.
pub fn select_with_stats<T: Ord>(input: Vec<T>, k: usize) -> (Vec<T>, SelectionStats) {
    let n = input.len();
    let mut stats = SelectionStats::default();

    if k >= n {
        tracing::debug!(k, n, "k covers the whole input, skipping heap");
        stats.scanned = n as u64;
        stats.fast_path = true;
        return (input, stats);
    }

    if k == 0 {
        tracing::debug!(n, "k is zero, nothing to select");
        stats.scanned = n as u64;
        stats.discarded = n as u64;
        return (Vec::new(), stats);
    }

    let mut heap = BoundedMinHeap::new(k);
    for x in input {
        stats.record(heap.push(x));
    }

    log_summary(k, &stats);
    (heap.into_vec(), stats)
}

/// Borrowing variant of [`select`].
///
/// Only elements that enter the heap are cloned; `input` is left untouched.
pub fn select_slice<T: Ord + Clone>(input: &[T], k: usize) -> Vec<T> {
    if k >= input.len() {
        return input.to_vec();
    }
    if k == 0 {
        return Vec::new();
    }

    let mut heap = BoundedMinHeap::new(k);
    let mut stats = SelectionStats::default();
    for x in input {
        if heap.admits(x) {
            stats.record(heap.push(x.clone()));
        } else {
            stats.record(Admission::Discarded);
        }
    }

    log_summary(k, &stats);
    heap.into_vec()
}

fn log_summary(k: usize, stats: &SelectionStats) {
    tracing::debug!(
        k,
        scanned = stats.scanned,
        filled = stats.filled,
        replaced = stats.replaced,
        discarded = stats.discarded,
        "selection pass complete"
    );
}
