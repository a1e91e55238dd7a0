//! The TodoMVC component set.

mod add_input;
mod destroy_button;
mod edit_input;
mod remaining_count;
mod todo_label;
mod todo_list;
mod toggle_all;

pub use add_input::{AddInput, AddInputHandler, AddInputMsg, AddInputProps};
pub use destroy_button::{DestroyButton, DestroyButtonHandler, DestroyButtonMsg};
pub use edit_input::{EditInput, EditInputHandler, EditInputMsg, EditInputProps};
pub use remaining_count::{RemainingCount, RemainingCountHandler, RemainingCountMsg, RemainingCountProps};
pub use todo_label::{TodoLabel, TodoLabelHandler, TodoLabelMsg, TodoLabelProps};
pub use todo_list::{TodoList, TodoListHandler, TodoListMsg, TodoListProps};
pub use toggle_all::{ToggleAll, ToggleAllHandler, ToggleAllMsg, ToggleAllProps};
