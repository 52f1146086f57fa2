//! UI Components
//!
//! Leptos components of the todo page.

mod error_modal;
mod todo_composer;
mod todo_item;
mod todo_list;

pub use error_modal::ErrorModal;
pub use todo_composer::TodoComposer;
pub use todo_item::TodoItemRow;
pub use todo_list::TodoList;
