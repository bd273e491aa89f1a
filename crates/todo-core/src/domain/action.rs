//! Actions
//!
//! Tagged intent records, one constructor per intent.

use serde::{Deserialize, Serialize};

use super::todo::{Todo, TodoId};

/// A requested state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a new todo
    CreateTodo { todo: Todo },
    /// Flip `done` on the todo with this id
    ToggleTodo { id: TodoId },
    /// Remove the todo with this id
    DeleteTodo { id: TodoId },
    /// Ask for the durable collection to be loaded
    RequestAllTodos,
    /// Replace the whole collection
    ReceiveAllTodos { todos: Vec<Todo> },
}

impl Action {
    /// Stable tag used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CreateTodo { .. } => "CREATE_TODO",
            Action::ToggleTodo { .. } => "TOGGLE_TODO",
            Action::DeleteTodo { .. } => "DELETE_TODO",
            Action::RequestAllTodos => "REQUEST_ALL_TODOS",
            Action::ReceiveAllTodos { .. } => "RECEIVE_ALL_TODOS",
        }
    }
}

/// Intent to append `todo`
pub fn create_todo(todo: Todo) -> Action {
    Action::CreateTodo { todo }
}

/// Intent to flip `done` on the todo with `id`
pub fn toggle_todo(id: TodoId) -> Action {
    Action::ToggleTodo { id }
}

/// Intent to remove the todo with `id`
pub fn delete_todo(id: TodoId) -> Action {
    Action::DeleteTodo { id }
}

/// Intent to reload the collection from the durable slot
pub fn request_all_todos() -> Action {
    Action::RequestAllTodos
}

/// Intent to replace the collection with `todos`
pub fn receive_all_todos(todos: Vec<Todo>) -> Action {
    Action::ReceiveAllTodos { todos }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let todo = Todo::new(1, "milk");
        assert_eq!(create_todo(todo.clone()), Action::CreateTodo { todo });
        assert_eq!(toggle_todo(3), Action::ToggleTodo { id: 3 });
        assert_eq!(delete_todo(4), Action::DeleteTodo { id: 4 });
        assert_eq!(request_all_todos(), Action::RequestAllTodos);
        assert_eq!(receive_all_todos(vec![]), Action::ReceiveAllTodos { todos: vec![] });
    }

    #[test]
    fn test_kind_matches_serde_tag() {
        let actions = [
            create_todo(Todo::new(1, "milk")),
            toggle_todo(1),
            delete_todo(1),
            request_all_todos(),
            receive_all_todos(vec![Todo::new(2, "eggs")]),
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.kind());
        }
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_string(&toggle_todo(1)).unwrap();
        assert_eq!(json, r#"{"type":"TOGGLE_TODO","id":1}"#);

        let parsed: Action = serde_json::from_str(r#"{"type":"REQUEST_ALL_TODOS"}"#).unwrap();
        assert_eq!(parsed, Action::RequestAllTodos);
    }
}
