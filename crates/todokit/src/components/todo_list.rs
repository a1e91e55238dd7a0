//! Ordered todo rows.
//!
//! Every row renders a completion checkbox, the shared label markup and
//! the shared destroy-button markup. The embedded markup keeps its own
//! listener tags; `Node::map` re-tags them per row so each notification
//! carries the id of the row it came from. Nothing is deduplicated:
//! rows with equal ids still report themselves independently.

use todokit_scene::{EventKind, Node, UiEvent};

use crate::component::Component;
use crate::model::{Todo, TodoId};
use crate::outbox::Outbox;

use super::{destroy_button, todo_label};

#[derive(Clone, Debug, Default)]
pub struct TodoListProps {
    /// Rows in render order, supplied wholesale by the owner.
    pub todos: Vec<Todo>,
}

/// Notifications raised by [`TodoList`]. Each carries the id of the row
/// the interaction happened in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoListMsg {
    Toggle(TodoId),
    Edit(TodoId),
    Destroy(TodoId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoListHandler {
    ToggleRow(TodoId),
    EditRow(TodoId),
    DestroyRow(TodoId),
}

/// The `<ul>` of todo rows. Holds no row state of its own: the todos
/// prop is the single source of truth, and interactions are relayed to
/// the owner id-first instead of being acted on locally.
pub struct TodoList {
    props: TodoListProps,
    outbox: Outbox<TodoListMsg>,
}

fn row(todo: &Todo) -> Node<TodoListHandler> {
    let toggle_id = todo.id.clone();
    let edit_id = todo.id.clone();
    let destroy_id = todo.id.clone();
    let class = if todo.completed { "todo-item completed" } else { "todo-item" };
    Node::li()
        .test_id("todo-item")
        .class(class)
        .child(
            Node::input()
                .test_id("todo-toggle")
                .class("toggle")
                .type_attr("checkbox")
                .checked(todo.completed)
                .on(EventKind::Change, TodoListHandler::ToggleRow(toggle_id)),
        )
        .child(
            todo_label::markup(&todo.title)
                .map(move |_| TodoListHandler::EditRow(edit_id.clone())),
        )
        .child(
            destroy_button::markup()
                .map(move |_| TodoListHandler::DestroyRow(destroy_id.clone())),
        )
}

impl Component for TodoList {
    type Props = TodoListProps;
    type Msg = TodoListMsg;
    type Handler = TodoListHandler;

    fn mount(props: TodoListProps, outbox: Outbox<TodoListMsg>) -> Self {
        Self { props, outbox }
    }

    fn set_props(&mut self, props: TodoListProps) {
        self.props = props;
    }

    fn view(&self) -> Node<TodoListHandler> {
        Node::ul()
            .test_id("todo-list")
            .class("todo-list")
            .children(self.props.todos.iter().map(row))
    }

    fn apply(&mut self, handler: TodoListHandler, event: &UiEvent) {
        match (handler, event) {
            (TodoListHandler::ToggleRow(id), UiEvent::Change { .. }) => {
                self.outbox.emit(TodoListMsg::Toggle(id));
            }
            (TodoListHandler::EditRow(id), UiEvent::DblClick) => {
                self.outbox.emit(TodoListMsg::Edit(id));
            }
            (TodoListHandler::DestroyRow(id), UiEvent::Click) => {
                self.outbox.emit(TodoListMsg::Destroy(id));
            }
            (handler, event) => log::trace!("todo-list: ignoring {event:?} on {handler:?}"),
        }
    }
}
