//! Application Context
//!
//! The todo container, shared with every component via Leptos context.

use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, warn};
use todo_core::{
    persistent_store, request_all_todos, Action, KeyValueStore, PersistenceMiddleware, Store,
};

use crate::store::{store_set_notice, store_set_todos, AppStore};

pub type TodoStore = Store<PersistenceMiddleware<Box<dyn KeyValueStore>>>;

/// Handle to the session's todo container
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Container over the durable slot (not Send: it owns the browser storage)
    store: StoredValue<TodoStore, LocalStorage>,
    /// Reactive mirror the views read from
    app: AppStore,
}

impl TodoContext {
    /// Build the container over `kv` and mirror its state into `app`
    pub fn new(kv: Box<dyn KeyValueStore>, storage_key: &str, app: AppStore) -> Self {
        let mut store = persistent_store(kv, storage_key);
        store.subscribe(move |todos| store_set_todos(&app, Arc::clone(todos)));
        Self {
            store: StoredValue::new_local(store),
            app,
        }
    }

    /// Run an action through the container, surfacing failures as a notice
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind();
        match self.store.try_update_value(|store| store.dispatch(action)) {
            Some(Ok(())) => {
                debug!("{} applied", kind);
                store_set_notice(&self.app, None);
            }
            Some(Err(e)) => {
                warn!("{} failed: {}", kind, e);
                store_set_notice(&self.app, Some(e.to_string()));
            }
            None => warn!("{} dropped: container disposed", kind),
        }
    }

    /// Drop the durable slot, then reload so memory follows
    pub fn clear_all(&self) {
        let cleared = self
            .store
            .try_update_value(|store| store.middleware_mut().repository_mut().clear());
        if let Some(Err(e)) = cleared {
            warn!("clearing todos failed: {}", e);
            store_set_notice(&self.app, Some(e.to_string()));
            return;
        }
        self.dispatch(request_all_todos());
    }

    pub fn dismiss_notice(&self) {
        store_set_notice(&self.app, None);
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
