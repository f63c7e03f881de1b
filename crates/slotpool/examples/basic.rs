//! Build a pool, check one object out, hand it back early.
//!
//! Run with `RUST_LOG=slotpool=trace` to see the pool's own events.

use slotpool::{Pool, PoolConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Test {
    value: i32,
}

impl From<i32> for Test {
    fn from(value: i32) -> Self {
        Self { value }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool =
        Pool::<Test, 5>::with_args(314).with_config(PoolConfig::default().with_name("demo"));
    println!("Pool created");
    println!("Pool left objects: {}\n", pool.available());

    let mut obj = pool.acquire();
    println!("obj acquired (value {})", obj.value);
    println!("Pool left objects: {}\n", pool.available());

    obj.release();
    println!("obj released early");
    println!("Pool left objects: {}", pool.available());
}
