//! Fixed-capacity object pooling
//!
//! A [`Pool`] preallocates `N` objects once and hands them out through
//! [`Handle`]s, which return their slot to the pool when dropped.
//!
//! Slots are addressed by index: a handle stores `(&Pool, slot index)` and the
//! free-list is a stack of indices, so acquire and release are O(1) and never
//! allocate.

mod config;
mod free_list;
mod handle;
mod object_pool;

pub use config::PoolConfig;
pub use handle::Handle;
pub use object_pool::Pool;
