//! Global Application State Store
//!
//! Leptos reactive_stores mirror of the todo container. The container stays
//! authoritative; this store only exists so views get fine-grained updates.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// View-side state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest todos published by the container
    pub todos: Arc<Vec<Todo>>,
    /// Last dispatch error, shown until dismissed or the next success
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tracked read of the current todos
pub fn store_todos(store: &AppStore) -> Arc<Vec<Todo>> {
    store.todos().get()
}

/// Untracked read, for event handlers
pub fn store_todos_untracked(store: &AppStore) -> Arc<Vec<Todo>> {
    store.todos().get_untracked()
}

/// Publish a new todo list; skipped when the container handed back the same list
pub fn store_set_todos(store: &AppStore, todos: Arc<Vec<Todo>>) {
    if Arc::ptr_eq(&store.todos().get_untracked(), &todos) {
        return;
    }
    store.todos().set(todos);
}

pub fn store_notice(store: &AppStore) -> Option<String> {
    store.notice().get()
}

pub fn store_set_notice(store: &AppStore, notice: Option<String>) {
    store.notice().set(notice);
}
