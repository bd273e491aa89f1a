//! Todos Reducer
//!
//! Pure transition from (current todos, action) to next todos.

use std::sync::Arc;

use crate::domain::{position_of, Action, Todo};

/// Apply `action` to `state`.
///
/// The input is never mutated. An effective change returns a fresh `Arc`;
/// anything else returns the same allocation, so `Arc::ptr_eq` tells callers
/// whether to re-render.
pub fn reduce(state: &Arc<Vec<Todo>>, action: &Action) -> Arc<Vec<Todo>> {
    match action {
        Action::CreateTodo { todo } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(todo.clone());
            Arc::new(next)
        }
        Action::ToggleTodo { id } => match position_of(state, *id) {
            Some(idx) => {
                let mut next = state.as_ref().clone();
                next[idx] = state[idx].toggled();
                Arc::new(next)
            }
            None => Arc::clone(state),
        },
        Action::DeleteTodo { id } => match position_of(state, *id) {
            Some(idx) => {
                let mut next = state.as_ref().clone();
                next.remove(idx);
                Arc::new(next)
            }
            None => Arc::clone(state),
        },
        Action::ReceiveAllTodos { todos } => Arc::new(todos.clone()),
        Action::RequestAllTodos => Arc::clone(state),
    }
}
