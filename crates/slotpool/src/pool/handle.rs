//! RAII handle to a checked-out slot

use core::fmt;
use core::ops::{Deref, DerefMut};

use super::Pool;

/// Exclusive handle to one slot of a [`Pool`]
///
/// A handle is either *bound* to a slot or *empty* (what
/// [`Pool::acquire`] returns when every slot is in use). Dropping a bound
/// handle, or calling [`release`](Self::release), returns its slot to the
/// pool exactly once.
///
/// Dereferencing an empty handle panics; check [`is_valid`](Self::is_valid)
/// first or use [`get`](Self::get).
///
/// A handle cannot outlive its pool:
/// ```compile_fail
/// use slotpool::Pool;
///
/// let pool = Pool::<u32, 2>::new();
/// let handle = pool.acquire();
/// drop(pool);
/// drop(handle);
/// ```
///
/// Handles cannot be duplicated:
/// ```compile_fail
/// use slotpool::Pool;
///
/// let pool = Pool::<u32, 2>::new();
/// let handle = pool.acquire();
/// let copy: slotpool::Handle<'_, u32, 2> = Clone::clone(&handle);
/// ```
///
/// Handles stay on the pool's thread:
/// ```compile_fail
/// use slotpool::Pool;
///
/// let pool = Pool::<u32, 2>::new();
/// let handle = pool.acquire();
/// std::thread::scope(|s| {
///     s.spawn(move || drop(handle));
/// });
/// ```
pub struct Handle<'a, T, const N: usize> {
    pool: &'a Pool<T, N>,
    slot: Option<usize>,
}

impl<'a, T, const N: usize> Handle<'a, T, N> {
    pub(crate) fn bound(pool: &'a Pool<T, N>, index: usize) -> Self {
        Self {
            pool,
            slot: Some(index),
        }
    }

    pub(crate) fn empty(pool: &'a Pool<T, N>) -> Self {
        Self { pool, slot: None }
    }

    /// Whether the handle is bound to a slot
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.slot.is_some()
    }

    /// Index of the bound slot
    #[must_use]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Get reference to the pool
    pub fn pool(&self) -> &'a Pool<T, N> {
        self.pool
    }

    /// Shared access to the object, `None` if empty
    pub fn get(&self) -> Option<&T> {
        // SAFETY: `index` came off the free-list and is owned by this handle
        // alone, and the pool outlives 'a. No other reference to the slot
        // exists while the handle holds it.
        self.slot.map(|index| unsafe { &*self.pool.slot_ptr(index) })
    }

    /// Exclusive access to the object, `None` if empty
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `get`; `&mut self` rules out overlapping borrows
        // through this handle.
        self.slot.map(|index| unsafe { &mut *self.pool.slot_ptr(index) })
    }

    /// Return the slot to the pool now, leaving this handle empty.
    ///
    /// Calling it again, or dropping the handle afterwards, does nothing.
    pub fn release(&mut self) {
        if let Some(index) = self.slot.take() {
            self.pool.release(index);
        }
    }

    /// Move the binding into a new handle, leaving this one empty
    #[must_use = "dropping the returned handle releases the slot"]
    pub fn take(&mut self) -> Self {
        Self {
            pool: self.pool,
            slot: self.slot.take(),
        }
    }
}

#[cold]
#[track_caller]
fn empty_handle() -> ! {
    panic!("dereferenced an empty pool handle")
}

impl<T, const N: usize> Deref for Handle<'_, T, N> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match self.get() {
            Some(value) => value,
            None => empty_handle(),
        }
    }
}

impl<T, const N: usize> DerefMut for Handle<'_, T, N> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.get_mut() {
            Some(value) => value,
            None => empty_handle(),
        }
    }
}

impl<T, const N: usize> Drop for Handle<'_, T, N> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Handle<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("slot", &self.slot)
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_early_release_is_idempotent() {
        let pool = Pool::<u32, 2>::new();
        let mut handle = pool.acquire();
        assert_eq!(pool.available(), 1);

        handle.release();
        assert!(!handle.is_valid());
        assert_eq!(pool.available(), 2);

        handle.release();
        drop(handle);
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_take_moves_binding() {
        let pool = Pool::<u32, 2>::new();
        let mut first = pool.acquire();
        let slot = first.slot();

        let second = first.take();
        assert!(!first.is_valid());
        assert_eq!(second.slot(), slot);
        assert_eq!(pool.available(), 1);

        drop(first);
        assert_eq!(pool.available(), 1);
        drop(second);
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_get_on_empty() {
        let pool = Pool::<u32, 1>::new();
        let _held = pool.acquire();
        let mut empty = pool.acquire();

        assert!(empty.get().is_none());
        assert!(empty.get_mut().is_none());
        assert_eq!(empty.slot(), None);
    }

    #[test]
    #[should_panic(expected = "empty pool handle")]
    fn test_deref_empty_panics() {
        let pool = Pool::<u32, 1>::new();
        let _held = pool.acquire();
        let empty = pool.acquire();
        let _value: u32 = *empty;
    }

    #[test]
    fn test_handle_points_at_its_pool() {
        let pool = Pool::<u32, 2>::new();
        let a = pool.acquire();
        let b = pool.acquire();

        assert!(core::ptr::eq(a.pool(), &pool));
        assert!(core::ptr::eq(b.pool(), &pool));
        assert_ne!(a.slot(), b.slot());
    }

    #[test]
    fn test_release_on_early_return() {
        fn bump(pool: &Pool<u32, 1>, fail: bool) -> Result<(), &'static str> {
            let mut handle = pool.acquire();
            *handle += 1;
            if fail {
                return Err("bail");
            }
            Ok(())
        }

        let pool = Pool::<u32, 1>::new();
        assert!(bump(&pool, true).is_err());
        assert_eq!(pool.available(), 1);
        assert_eq!(*pool.acquire(), 1);
    }

    #[test]
    fn test_debug_output() {
        let pool = Pool::<u32, 1>::with_init(|| 7);
        let handle = pool.acquire();
        assert_eq!(format!("{handle:?}"), "Handle { slot: Some(0), value: Some(7) }");
    }
}
