//! Domain Layer
//!
//! Contains the todo record, the intents that change it, and the error type.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod todo;
mod action;

pub use entity::{position_of, Entity, TodoError, TodoResult};
pub use todo::{next_todo_id, Todo, TodoId};
pub use action::{
    create_todo, delete_todo, receive_all_todos, request_all_todos, toggle_todo, Action,
};
