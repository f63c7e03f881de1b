//! Checkout counters for a single pool
//!
//! The pool is single-threaded, so plain `Cell`s are enough here.

use core::cell::Cell;

/// Running counters kept by a [`Pool`](crate::Pool)
#[derive(Debug, Default)]
pub struct PoolStats {
    acquired: Cell<u64>,
    released: Cell<u64>,
    exhausted: Cell<u64>,
    peak_in_use: Cell<usize>,
}

/// Point-in-time copy of [`PoolStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStatsSnapshot {
    /// Successful acquisitions
    pub acquired: u64,
    /// Slots returned to the pool
    pub released: u64,
    /// Acquire attempts that found no free slot
    pub exhausted: u64,
    /// Highest number of simultaneously checked-out slots
    pub peak_in_use: usize,
}

impl PoolStats {
    pub(crate) fn record_acquire(&self, in_use: usize) {
        self.acquired.set(self.acquired.get() + 1);
        if in_use > self.peak_in_use.get() {
            self.peak_in_use.set(in_use);
        }
    }

    pub(crate) fn record_release(&self) {
        self.released.set(self.released.get() + 1);
    }

    pub(crate) fn record_exhausted(&self) {
        self.exhausted.set(self.exhausted.get() + 1);
    }

    /// Successful acquisitions so far
    pub fn acquired(&self) -> u64 {
        self.acquired.get()
    }

    /// Releases so far
    pub fn released(&self) -> u64 {
        self.released.get()
    }

    /// Acquire attempts that came back empty
    pub fn exhausted(&self) -> u64 {
        self.exhausted.get()
    }

    /// Peak number of checked-out slots
    pub fn peak_in_use(&self) -> usize {
        self.peak_in_use.get()
    }

    /// Copy the counters out
    pub fn snapshot(&self) -> PoolStatsSnapshot {
        PoolStatsSnapshot {
            acquired: self.acquired(),
            released: self.released(),
            exhausted: self.exhausted(),
            peak_in_use: self.peak_in_use(),
        }
    }
}
