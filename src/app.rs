//! Local Todos App
//!
//! Root component: owns the container for the session and wires the list
//! and the entry form to it.

use leptos::prelude::*;
use todo_core::{create_todo, delete_todo, next_todo_id, request_all_todos, toggle_todo, TodoConfig};

use crate::components::{NewTodoForm, NoticeBar, TodoList};
use crate::context::TodoContext;
use crate::local_storage::open_storage;
use crate::models::{Todo, TodoId, TodoStats};
use crate::store::{store_todos, store_todos_untracked, AppState, AppStore};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let app_store = AppStore::new(AppState::new());
    provide_context(app_store);

    let ctx = TodoContext::new(open_storage(), &config.storage_key, app_store);
    provide_context(ctx);

    // Load persisted todos once mounted
    Effect::new(move |_| ctx.dispatch(request_all_todos()));

    let todos = Signal::derive(move || store_todos(&app_store));

    let on_toggle = Callback::new(move |id: TodoId| ctx.dispatch(toggle_todo(id)));
    let on_delete = Callback::new(move |id: TodoId| ctx.dispatch(delete_todo(id)));
    let on_submit = Callback::new(move |todo: Todo| {
        // The form stamps the wall clock; keep ids unique within the list
        let id = next_todo_id(todo.id, &store_todos_untracked(&app_store));
        ctx.dispatch(create_todo(Todo { id, ..todo }));
    });

    view! {
        <main class="todo-app">
            <h1>{config.title}</h1>

            <NoticeBar />

            <TodoList todos=todos on_toggle=on_toggle on_delete=on_delete />

            <NewTodoForm on_submit=on_submit />

            <footer class="todo-footer">
                <span class="todo-count">{move || TodoStats::of(&todos.get()).to_string()}</span>
                <button class="clear-btn" on:click=move |_| ctx.clear_all()>"Clear all"</button>
            </footer>
        </main>
    }
}
