//! Middleware
//!
//! The effect phase of a dispatch. A middleware sees every action before the
//! reducer does, performs its side effect, and returns an [`Effect`] telling
//! the container what to do next.

use log::{debug, warn};

use crate::domain::{receive_all_todos, Action, TodoError, TodoResult};
use crate::repository::{KeyValueStore, TodoRepository};

/// What the container should do after the effect phase
#[derive(Debug)]
pub enum Effect {
    /// Hand the action to the reducer
    Forward,
    /// Consume the action and dispatch this one instead
    Dispatch(Action),
    /// Hand the action to the reducer, then report the error
    ForwardWithError(TodoError),
}

/// Side-effect phase of a dispatch
///
/// Returning `Err` aborts the dispatch before the reducer runs.
pub trait Middleware {
    fn handle(&mut self, action: &Action) -> TodoResult<Effect>;
}

/// Forwards every action untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Middleware for PassThrough {
    fn handle(&mut self, _action: &Action) -> TodoResult<Effect> {
        Ok(Effect::Forward)
    }
}

/// Mirrors every todo action into the durable slot before it is reduced
pub struct PersistenceMiddleware<S> {
    repository: TodoRepository<S>,
}

impl<S: KeyValueStore> PersistenceMiddleware<S> {
    pub fn new(repository: TodoRepository<S>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &TodoRepository<S> {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut TodoRepository<S> {
        &mut self.repository
    }
}

impl<S: KeyValueStore> Middleware for PersistenceMiddleware<S> {
    fn handle(&mut self, action: &Action) -> TodoResult<Effect> {
        match action {
            Action::CreateTodo { todo } => {
                self.repository.add(todo.clone())?;
                Ok(Effect::Forward)
            }
            Action::ToggleTodo { id } => forward_unless_failed(self.repository.toggle(*id).map(drop)),
            Action::DeleteTodo { id } => forward_unless_failed(self.repository.delete(*id).map(drop)),
            Action::RequestAllTodos => {
                let todos = self.repository.load();
                debug!("loaded {} todos from slot {}", todos.len(), self.repository.key());
                Ok(Effect::Dispatch(receive_all_todos(todos)))
            }
            Action::ReceiveAllTodos { .. } => Ok(Effect::Forward),
        }
    }
}

/// A missing id still reaches the reducer (where it is a no-op); any other
/// failure stops the dispatch so memory never runs ahead of the slot.
fn forward_unless_failed(result: TodoResult<()>) -> TodoResult<Effect> {
    match result {
        Ok(()) => Ok(Effect::Forward),
        Err(e) if e.is_not_found() => {
            warn!("{}", e);
            Ok(Effect::ForwardWithError(e))
        }
        Err(e) => Err(e),
    }
}
