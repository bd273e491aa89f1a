//! Todo Entity
//!
//! A single to-do record as stored in the durable slot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Todo identifier: creation time in milliseconds
pub type TodoId = i64;

/// A to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Free text entered by the user
    pub body: String,
    /// Completion status
    pub done: bool,
}

impl Todo {
    /// Create a new, not yet done todo
    pub fn new(id: TodoId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
            done: false,
        }
    }

    /// Copy of this todo with `done` negated
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Pick an id for a todo created at `now_ms`.
///
/// Uses the timestamp unless it is already taken (two submissions in the same
/// millisecond, or a clock that went backwards), in which case the id is one
/// past the largest existing id. If that would overflow, the smallest
/// non-negative id not in use is taken instead.
pub fn next_todo_id(now_ms: TodoId, existing: &[Todo]) -> TodoId {
    match existing.iter().map(|todo| todo.id).max() {
        Some(max) if max >= now_ms => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(existing)),
        _ => now_ms,
    }
}

fn smallest_unused_id(existing: &[Todo]) -> TodoId {
    let taken: HashSet<TodoId> = existing.iter().map(|todo| todo.id).collect();
    // At most `existing.len()` candidates can be taken
    (0..=TodoId::MAX).find(|id| !taken.contains(id)).unwrap_or_default()
}
