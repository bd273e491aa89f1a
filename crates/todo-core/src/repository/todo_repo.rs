//! Todo Repository
//!
//! Persistent store adapter: keeps the whole todo collection as one JSON
//! array under a single key. Every write is a whole-collection
//! read-modify-write.

use std::collections::HashSet;

use log::{debug, error, warn};

use super::traits::KeyValueStore;
use crate::domain::{position_of, Todo, TodoError, TodoId, TodoResult};

/// Slot name used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "_todos";

pub struct TodoRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the durable collection.
    ///
    /// An absent slot, a `null` slot, or contents that are not an array of
    /// todos all read as an empty collection, as does a failed read.
    pub fn load(&self) -> Vec<Todo> {
        self.read_all().unwrap_or_else(|e| {
            warn!("reading slot {} failed, treating as empty: {}", self.key, e);
            Vec::new()
        })
    }

    /// Like `load`, but a failed read is an error. Writes go through this so
    /// an unreadable slot is never overwritten.
    pub fn read_all(&self) -> TodoResult<Vec<Todo>> {
        let raw = match self.store.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let todos = match serde_json::from_str::<Option<Vec<Todo>>>(&raw) {
            Ok(todos) => todos.unwrap_or_default(),
            Err(e) => {
                warn!("slot {} holds malformed data, treating as empty: {}", self.key, e);
                Vec::new()
            }
        };
        Ok(dedup_ids(todos, &self.key))
    }

    /// Append a todo; its id must not already be stored
    pub fn add(&mut self, todo: Todo) -> TodoResult<()> {
        let mut todos = self.read_all()?;
        if position_of(&todos, todo.id).is_some() {
            return Err(TodoError::Conflict(todo.id));
        }
        debug!("adding todo {} to slot {}", todo.id, self.key);
        todos.push(todo);
        self.save(&todos)
    }

    /// Flip `done` on the matching todo and return the updated record
    pub fn toggle(&mut self, id: TodoId) -> TodoResult<Todo> {
        let mut todos = self.read_all()?;
        let idx = position_of(&todos, id).ok_or(TodoError::NotFound(id))?;
        todos[idx].done = !todos[idx].done;
        let updated = todos[idx].clone();
        self.save(&todos)?;
        Ok(updated)
    }

    /// Remove the matching todo and return it
    pub fn delete(&mut self, id: TodoId) -> TodoResult<Todo> {
        let mut todos = self.read_all()?;
        let idx = position_of(&todos, id).ok_or(TodoError::NotFound(id))?;
        let removed = todos.remove(idx);
        self.save(&todos)?;
        Ok(removed)
    }

    /// Drop the slot entirely
    pub fn clear(&mut self) -> TodoResult<()> {
        self.store.remove(&self.key)
    }

    fn save(&mut self, todos: &[Todo]) -> TodoResult<()> {
        let json = serde_json::to_string(todos)?;
        self.store.set(&self.key, &json).map_err(|e| {
            error!("writing slot {} failed: {}", self.key, e);
            e
        })
    }
}

/// Keep the first record for each id; later duplicates are dropped.
fn dedup_ids(todos: Vec<Todo>, key: &str) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(todos.len());
    let before = todos.len();
    let unique: Vec<Todo> = todos.into_iter().filter(|todo| seen.insert(todo.id)).collect();
    if unique.len() != before {
        warn!("slot {} held {} duplicate id(s), keeping first of each", key, before - unique.len());
    }
    unique
}
