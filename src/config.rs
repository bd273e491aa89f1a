//! Page Configuration
//!
//! Optional JSON settings embedded in the host page:
//! `<script id="todo-config" type="application/json">{"storage_key": "work"}</script>`

use todo_core::{TodoConfig, TodoResult};

pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Read the config element, defaults when it is missing
pub fn read_page_config() -> TodoResult<TodoConfig> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse_page_config(raw.as_deref())
}

pub fn parse_page_config(raw: Option<&str>) -> TodoResult<TodoConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(TodoConfig::default()),
        Some(json) => TodoConfig::from_json(json),
    }
}
