//! Todo Core
//!
//! Unidirectional state flow for the to-do list:
//! - domain: Todo record, actions, errors
//! - repository: durable key-value slot and the todo adapter over it
//! - state: reducer, persistence middleware, state container
//!
//! Nothing here touches the DOM, so the whole crate tests natively.

pub mod config;
pub mod domain;
pub mod repository;
pub mod state;

pub use config::TodoConfig;
pub use domain::{
    create_todo, delete_todo, next_todo_id, receive_all_todos, request_all_todos, toggle_todo,
    Action, Entity, Todo, TodoError, TodoId, TodoResult,
};
pub use repository::{KeyValueStore, MemoryStore, TodoRepository, DEFAULT_STORAGE_KEY};
pub use state::{
    persistent_store, reduce, Effect, Middleware, PassThrough, PersistenceMiddleware, Store,
    SubscriptionId, MAX_DISPATCH_DEPTH,
};
