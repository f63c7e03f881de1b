//! Stack of free slot indices

use arrayvec::ArrayVec;

/// LIFO stack of the slot indices that are currently free.
///
/// Capacity is fixed at `N`, so pushing never allocates. An index is either on
/// this stack or owned by exactly one live handle, never both.
#[derive(Debug)]
pub(crate) struct FreeList<const N: usize> {
    stack: ArrayVec<usize, N>,
}

impl<const N: usize> FreeList<N> {
    /// Every slot free. Slot 0 is handed out first.
    pub(crate) fn full() -> Self {
        Self {
            stack: (0..N).rev().collect(),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    #[inline]
    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(index < N, "slot {index} out of range for capacity {N}");
        debug_assert!(
            !self.stack.contains(&index),
            "slot {index} returned to the free-list twice"
        );
        self.stack.push(index);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }
}
