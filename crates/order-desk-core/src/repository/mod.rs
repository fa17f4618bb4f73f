//! Repository Layer
//!
//! Key-value store abstraction, its implementations, and the record
//! repositories built on top of it.

mod traits;
mod memory_store;
mod file_store;
mod store;
mod repo;
mod task_repo;
mod order_repo;


pub use traits::KeyValueStore;
pub use memory_store::MemoryStore;
pub use file_store::FileStore;
pub use store::PersistentStore;
pub use repo::Repository;
pub use task_repo::TaskRepository;
pub use order_repo::OrderRepository;
