//! UI Components
//!
//! Leptos components for the todo list.

mod new_todo_form;
mod sort_button;
mod todo_list_view;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use sort_button::SortButton;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
