//! Card list cache adapters.
//!
//! [`RedisCardListCache`] is used when a Redis URL is configured;
//! [`InMemoryCardListCache`] otherwise.

mod memory;
mod redis;

pub use memory::InMemoryCardListCache;
pub use redis::RedisCardListCache;
