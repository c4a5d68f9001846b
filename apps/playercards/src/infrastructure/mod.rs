// Infrastructure layer module
// Contains database adapters

pub mod pool;
pub mod repositories;

pub use pool::ConnectionPool;
