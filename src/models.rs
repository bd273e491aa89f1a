//! Frontend Models
//!
//! Todo types from the core plus small view helpers.

use std::fmt;

pub use todo_core::{Todo, TodoId};

/// CSS class of a list row
pub fn item_class(done: bool) -> &'static str {
    if done {
        "done"
    } else {
        ""
    }
}

/// Counts shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub done: usize,
}

impl TodoStats {
    pub fn of(todos: &[Todo]) -> Self {
        Self {
            total: todos.len(),
            done: todos.iter().filter(|todo| todo.done).count(),
        }
    }
}

impl fmt::Display for TodoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "todo" } else { "todos" };
        write!(f, "{} {}, {} done", self.total, noun, self.done)
    }
}
