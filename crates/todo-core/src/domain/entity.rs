//! Domain Layer - Core Entity Trait
//!
//! Basic contract for records kept in the durable slot, and the errors
//! produced while changing them.

use thiserror::Error;

use super::todo::TodoId;

/// Core trait for records identified by a unique id
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find the position of the entity with `id`, if any.
pub fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised by the adapter, the middleware or the container
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Not found: todo {0}")]
    NotFound(TodoId),
    #[error("Conflict: todo {0} already exists")]
    Conflict(TodoId),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Dispatch loop: re-dispatch chain too deep")]
    DispatchLoop,
    #[error("Invalid config: {0}")]
    Config(String),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }
}
