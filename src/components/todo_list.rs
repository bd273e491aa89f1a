//! Todo List Component
//!
//! Renders the todos as a `<ul>`; rows toggle on click.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::{Todo, TodoId};

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Arc<Vec<Todo>>>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    view! {
        <ul id="todoList">
            <For
                each=move || todos.get().as_ref().clone()
                // `done` is part of the key so a toggled row re-renders
                key=|todo| (todo.id, todo.done)
                children=move |todo| view! {
                    <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete />
                }
            />
        </ul>
    }
}
