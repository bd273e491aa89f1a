//! Repository Layer
//!
//! Durable key-value slot abstraction and the todo adapter over it.

mod traits;
mod memory;
mod todo_repo;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use todo_repo::{TodoRepository, DEFAULT_STORAGE_KEY};
