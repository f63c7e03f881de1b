//! Fixed-capacity object pool
//!
//! # Safety
//!
//! This module implements single-threaded slot pooling with RAII:
//! - `Pool` owns all `N` objects inline in `[UnsafeCell<T>; N]`
//! - the free-list holds the indices of slots nobody is using
//! - `Handle` borrows the pool and owns exactly one slot index
//! - Drop of a handle pushes its index back onto the free-list
//!
//! ## Safety Contracts
//!
//! - A slot index is either on the free-list or held by one live handle, so a
//!   handle's access to its slot never aliases another handle's access
//! - `Pool` never touches slot contents through `&self`; only `Drop`
//!   (which needs `&mut self`, so no handle can be alive) reads them
//! - `UnsafeCell`/`RefCell` make `Pool` `!Sync`, which makes `Handle` `!Send`

use core::cell::{RefCell, UnsafeCell};
use core::fmt;

use arrayvec::ArrayVec;

#[cfg(feature = "logging")]
use tracing::{debug, error, trace};

use super::free_list::FreeList;
use super::{Handle, PoolConfig};
use crate::error::{PoolError, PoolResult};
#[cfg(feature = "stats")]
use crate::stats::PoolStats;

/// Single-threaded pool of exactly `N` preconstructed objects
///
/// Objects are built once when the pool is created and dropped once when the
/// pool is dropped. Acquiring and releasing only move slot indices around.
///
/// # Example
/// ```
/// use slotpool::Pool;
///
/// let pool: Pool<Vec<u8>, 4> = Pool::with_init(|| Vec::with_capacity(1024));
///
/// let mut buf = pool.acquire();
/// assert!(buf.is_valid());
/// buf.extend_from_slice(b"hello");
/// assert_eq!(pool.available(), 3);
///
/// // Slot goes back when the handle is dropped
/// drop(buf);
/// assert_eq!(pool.available(), 4);
/// ```
///
/// # Thread Safety
///
/// There is no internal synchronization. The pool is `!Sync` and its handles
/// are `!Send`, so sharing one pool between threads requires wrapping the
/// whole pool behind external synchronization.
pub struct Pool<T, const N: usize> {
    slots: [UnsafeCell<T>; N],
    free: RefCell<FreeList<N>>,
    config: PoolConfig,
    #[cfg(feature = "stats")]
    stats: PoolStats,
}

impl<T, const N: usize> Pool<T, N> {
    fn from_slots(slots: [UnsafeCell<T>; N]) -> Self {
        const { assert!(N > 0, "a pool needs at least one slot") };

        #[cfg(feature = "logging")]
        debug!(capacity = N, "pool created");

        Self {
            slots,
            free: RefCell::new(FreeList::full()),
            config: PoolConfig::default(),
            #[cfg(feature = "stats")]
            stats: PoolStats::default(),
        }
    }

    /// Create pool whose slots are each built by `init`
    pub fn with_init<F>(mut init: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self::from_slots(core::array::from_fn(|_| UnsafeCell::new(init())))
    }

    /// Create pool whose slots are each constructed from `args`.
    ///
    /// Every slot gets its own `T::from(args.clone())`; no slot is a copy of
    /// another slot.
    pub fn with_args<A>(args: A) -> Self
    where
        A: Clone,
        T: From<A>,
    {
        Self::with_init(|| T::from(args.clone()))
    }

    /// Create pool that takes ownership of exactly `N` existing values.
    ///
    /// The length is checked before any slot is filled; on mismatch nothing
    /// is constructed and the values are dropped.
    ///
    /// # Example
    /// ```
    /// use slotpool::{Pool, PoolError};
    ///
    /// let pool = Pool::<u32, 3>::try_from_values([7, 8, 9]).unwrap();
    /// assert_eq!(pool.available(), 3);
    ///
    /// let err = Pool::<u32, 3>::try_from_values(vec![1, 2]).unwrap_err();
    /// assert_eq!(err, PoolError::InvalidArgument { expected: 3, actual: 2 });
    /// ```
    pub fn try_from_values<I>(values: I) -> PoolResult<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let actual = values.len();
        if actual != N {
            return Err(PoolError::invalid_argument(N, actual));
        }

        // An iterator can misreport its length; `into_inner` catches a short one
        let slots: ArrayVec<UnsafeCell<T>, N> = values.map(UnsafeCell::new).take(N).collect();
        let slots = slots
            .into_inner()
            .map_err(|partial| PoolError::invalid_argument(N, partial.len()))?;

        Ok(Self::from_slots(slots))
    }

    /// Replace the pool configuration
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: PoolConfig) -> Self {
        #[cfg(feature = "logging")]
        debug!(
            pool = %config.name,
            strict_teardown = config.strict_teardown,
            "pool configured"
        );

        self.config = config;
        self
    }

    /// Check out a free slot.
    ///
    /// Returns an empty handle when every slot is in use; test it with
    /// [`Handle::is_valid`] before dereferencing. Never allocates.
    pub fn acquire(&self) -> Handle<'_, T, N> {
        let popped = self.free.borrow_mut().pop();

        match popped {
            Some(index) => {
                #[cfg(feature = "stats")]
                self.stats.record_acquire(self.in_use());

                #[cfg(feature = "logging")]
                trace!(
                    pool = %self.config.name,
                    slot = index,
                    available = self.available(),
                    "slot acquired"
                );

                Handle::bound(self, index)
            }
            None => {
                #[cfg(feature = "stats")]
                self.stats.record_exhausted();

                #[cfg(feature = "logging")]
                trace!(pool = %self.config.name, "acquire on exhausted pool");

                Handle::empty(self)
            }
        }
    }

    /// Check out a free slot, or fail with [`PoolError::Exhausted`].
    ///
    /// The error carries the pool name. With a `'static` name (the default)
    /// building it does not allocate; a name set from an owned `String` is
    /// cloned on every miss.
    pub fn try_acquire(&self) -> PoolResult<Handle<'_, T, N>> {
        let handle = self.acquire();
        if handle.is_valid() {
            Ok(handle)
        } else {
            Err(PoolError::exhausted(self.config.name.clone(), N))
        }
    }

    /// Return a checked-out slot. Only reached through [`Handle`].
    pub(crate) fn release(&self, index: usize) {
        self.free.borrow_mut().push(index);

        #[cfg(feature = "stats")]
        self.stats.record_release();

        #[cfg(feature = "logging")]
        trace!(
            pool = %self.config.name,
            slot = index,
            available = self.available(),
            "slot released"
        );
    }

    /// Raw pointer to a slot's object.
    ///
    /// Dereferencing is only sound for the handle that owns `index`.
    #[inline]
    pub(crate) fn slot_ptr(&self, index: usize) -> *mut T {
        self.slots[index].get()
    }

    /// Get number of free slots
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.borrow().len()
    }

    /// Get number of checked-out slots
    #[must_use]
    pub fn in_use(&self) -> usize {
        N - self.available()
    }

    /// Get pool capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Whether the next `acquire` would come back empty
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available() == 0
    }

    /// Get pool configuration
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Get pool statistics
    /// Note: This method is only available with the "stats" feature enabled
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl<T: Default, const N: usize> Pool<T, N> {
    /// Create pool of `N` default values
    pub fn new() -> Self {
        Self::with_init(T::default)
    }
}

impl<T: Default, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Pool<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_slots(values.map(UnsafeCell::new))
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Pool<T, N> {
    type Error = PoolError;

    fn try_from(values: Vec<T>) -> PoolResult<Self> {
        Self::try_from_values(values)
    }
}

impl<T, const N: usize> fmt::Debug for Pool<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("name", &self.config.name)
            .field("capacity", &N)
            .field("available", &self.available())
            .finish_non_exhaustive()
    }
}

impl<T, const N: usize> Drop for Pool<T, N> {
    fn drop(&mut self) {
        // Handles borrow the pool, so this only fires for leaked handles
        let outstanding = N - self.free.get_mut().len();
        if outstanding == 0 {
            return;
        }

        #[cfg(feature = "logging")]
        error!(
            pool = %self.config.name,
            outstanding,
            capacity = N,
            "pool dropped with slots still checked out"
        );

        if self.config.strict_teardown && !std::thread::panicking() {
            panic!(
                "pool '{}' dropped with {outstanding} of {N} slots still checked out",
                self.config.name
            );
        }
    }
}
