//! # slotpool
//!
//! Fixed-capacity object pool for latency-sensitive code.
//!
//! A pool constructs exactly `N` instances of `T` up front. Callers borrow
//! them through exclusive handles and give them back simply by dropping the
//! handle, so the return path cannot be forgotten, even on early returns.
//! Nothing is allocated or constructed after the pool itself is built.
//!
//! ## Quick Start
//!
//! ```rust
//! use slotpool::prelude::*;
//!
//! // Five connections, each built independently from the same arguments
//! let pool: Pool<String, 5> = Pool::with_args("idle");
//! assert_eq!(pool.available(), 5);
//!
//! {
//!     let mut conn = pool.acquire();
//!     assert!(conn.is_valid());
//!     conn.push_str(" -> busy");
//!     assert_eq!(pool.available(), 4);
//! } // slot returned here
//!
//! assert_eq!(pool.available(), 5);
//! ```
//!
//! ## Features
//!
//! - `logging` (default): Structured `tracing` events for construction,
//!   checkout, return, and leaked checkouts at teardown
//! - `stats`: Per-pool checkout counters
//! - `full`: Enable all features
//!
//! ## Thread Safety
//!
//! Pools are single-threaded. `Pool` is `!Sync` and `Handle` is `!Send`;
//! a pool shared across threads must sit behind external synchronization.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]
#![warn(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(rust_2018_idioms)]
// Slot access goes through `UnsafeCell`; each site carries a SAFETY note
#![allow(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// Error types
pub mod error;

pub mod pool;
#[cfg(feature = "stats")]
#[cfg_attr(docsrs, doc(cfg(feature = "stats")))]
pub mod stats;

pub use crate::error::{PoolError, PoolResult, Result};
pub use crate::pool::{Handle, Pool, PoolConfig};
#[cfg(feature = "stats")]
pub use crate::stats::{PoolStats, PoolStatsSnapshot};

// Public API exports
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{PoolError, PoolResult};
    pub use crate::pool::{Handle, Pool, PoolConfig};

    #[cfg(feature = "stats")]
    pub use crate::stats::{PoolStats, PoolStatsSnapshot};
}
