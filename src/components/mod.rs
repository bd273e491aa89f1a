//! UI Components
//!
//! Leptos components for the list and the entry form.

mod todo_item;
mod todo_list;
mod new_todo_form;
mod notice_bar;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use new_todo_form::NewTodoForm;
pub use notice_bar::NoticeBar;
