//! New Todo Form Component
//!
//! Text input plus submit; builds the todo record and hands it upward.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn NewTodoForm(#[prop(into)] on_submit: Callback<Todo>) -> impl IntoView {
    let (body, set_body) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let todo = Todo::new(js_sys::Date::now() as i64, body.get_untracked());
        on_submit.run(todo);
        set_body.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="New Todo"
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            />
            <input type="submit" value="Create Todo" />
        </form>
    }
}
