//! Notice Bar Component
//!
//! Shows the last dispatch error until dismissed.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{store_notice, use_app_store};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let app_store = use_app_store();
    let ctx = use_todo_context();

    view! {
        {move || store_notice(&app_store).map(|notice| view! {
            <div class="notice">
                <span class="notice-text">{notice}</span>
                <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
