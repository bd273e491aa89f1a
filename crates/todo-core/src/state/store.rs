//! State Container
//!
//! Holds the authoritative todo list and runs every action through
//! middleware, then reducer, then subscribers.

use std::sync::Arc;

use log::debug;

use super::middleware::{Effect, Middleware, PersistenceMiddleware};
use super::reducer::reduce;
use crate::domain::{Action, Todo, TodoError, TodoResult};
use crate::repository::{KeyValueStore, TodoRepository};

/// How many times one dispatch may be replaced by `Effect::Dispatch`
pub const MAX_DISPATCH_DEPTH: usize = 8;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Arc<Vec<Todo>>)>;

pub struct Store<M> {
    state: Arc<Vec<Todo>>,
    middleware: M,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<M: Middleware> Store<M> {
    pub fn new(middleware: M) -> Self {
        Self::with_state(middleware, Vec::new())
    }

    pub fn with_state(middleware: M, todos: Vec<Todo>) -> Self {
        Self {
            state: Arc::new(todos),
            middleware,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current todos
    pub fn state(&self) -> Arc<Vec<Todo>> {
        Arc::clone(&self.state)
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }

    /// Register a callback run after every dispatch that reaches the reducer
    pub fn subscribe(&mut self, callback: impl FnMut(&Arc<Vec<Todo>>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Run `action` through middleware and reducer, then notify subscribers.
    ///
    /// A middleware error aborts before the reducer runs. A
    /// `ForwardWithError` is reduced and notified first, then returned.
    pub fn dispatch(&mut self, action: Action) -> TodoResult<()> {
        let mut action = action;
        for _ in 0..=MAX_DISPATCH_DEPTH {
            debug!("dispatch {}", action.kind());
            match self.middleware.handle(&action)? {
                Effect::Forward => {
                    self.apply(&action);
                    return Ok(());
                }
                Effect::ForwardWithError(e) => {
                    self.apply(&action);
                    return Err(e);
                }
                Effect::Dispatch(next) => action = next,
            }
        }
        Err(TodoError::DispatchLoop)
    }

    fn apply(&mut self, action: &Action) {
        self.state = reduce(&self.state, action);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }
}

/// A store whose todos persist under `key` in `kv`
pub fn persistent_store<S: KeyValueStore>(kv: S, key: &str) -> Store<PersistenceMiddleware<S>> {
    Store::new(PersistenceMiddleware::new(TodoRepository::with_key(kv, key)))
}
