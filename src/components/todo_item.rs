//! Todo Item Component

use leptos::prelude::*;

use crate::models::{item_class, Todo, TodoId};

/// A single row: click toggles, the X deletes
#[component]
pub fn TodoItem(
    todo: Todo,
    on_toggle: Callback<TodoId>,
    on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;

    view! {
        <li class=item_class(todo.done) on:click=move |_| on_toggle.run(id)>
            <span
                class="delete-btn"
                on:click=move |ev| {
                    // Keep the row's toggle handler from firing too
                    ev.stop_propagation();
                    on_delete.run(id);
                }
            >
                "X"
            </span>
            {todo.body}
        </li>
    }
}
