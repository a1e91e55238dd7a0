//! Inline todo title text.

use todokit_scene::{EventKind, Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

#[derive(Clone, Debug, Default)]
pub struct TodoLabelProps {
    pub title: String,
}

/// Notifications raised by [`TodoLabel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoLabelMsg {
    /// Double click, the label wants to switch into edit mode.
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoLabelHandler {
    DblClick,
}

/// Render the label markup. The title goes in as a text leaf, so
/// markup-looking strings stay literal text. The todo list embeds this
/// and re-tags the double click with the owning row's id.
pub(crate) fn markup(title: &str) -> Node<TodoLabelHandler> {
    Node::label()
        .test_id("todo-label")
        .child(Node::text(title))
        .on(EventKind::DblClick, TodoLabelHandler::DblClick)
}

/// The todo title as shown in a row. Double click asks for edit mode;
/// a single click does nothing at all.
pub struct TodoLabel {
    props: TodoLabelProps,
    outbox: Outbox<TodoLabelMsg>,
}

impl Component for TodoLabel {
    type Props = TodoLabelProps;
    type Msg = TodoLabelMsg;
    type Handler = TodoLabelHandler;

    fn mount(props: TodoLabelProps, outbox: Outbox<TodoLabelMsg>) -> Self {
        Self { props, outbox }
    }

    fn set_props(&mut self, props: TodoLabelProps) {
        self.props = props;
    }

    fn view(&self) -> Node<TodoLabelHandler> {
        markup(&self.props.title)
    }

    fn apply(&mut self, handler: TodoLabelHandler, event: &UiEvent) {
        match (handler, event) {
            (TodoLabelHandler::DblClick, UiEvent::DblClick) => {
                self.outbox.emit(TodoLabelMsg::Edit);
            }
            (handler, event) => log::trace!("todo-label: ignoring {event:?} on {handler:?}"),
        }
    }
}
