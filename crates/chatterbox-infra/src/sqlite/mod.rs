//! SQLite persistence: connection pool and repository implementations.

pub mod message;
pub mod pool;
