//! Input that captures new todo titles.

use todokit_scene::{EventKind, Key, Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

#[derive(Clone, Debug)]
pub struct AddInputProps {
    /// Hint shown while the input is empty.
    pub placeholder: String,
}

impl Default for AddInputProps {
    fn default() -> Self {
        Self { placeholder: "What needs to be done?".to_owned() }
    }
}

/// Notifications raised by [`AddInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddInputMsg {
    /// A non-empty title was committed. Carries the trimmed text.
    Add(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddInputHandler {
    Input,
    Keydown,
}

/// The "what needs to be done?" input at the top of a todo app.
///
/// Keystrokes mirror into an internal buffer. Enter trims the buffer and,
/// when anything is left, emits it as [`AddInputMsg::Add`] and clears the
/// input. A whitespace-only buffer submits nothing and stays put.
pub struct AddInput {
    props: AddInputProps,
    buffer: String,
    outbox: Outbox<AddInputMsg>,
}

impl AddInput {
    fn commit(&mut self) {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            return;
        }
        self.outbox.emit(AddInputMsg::Add(trimmed.to_owned()));
        self.buffer.clear();
    }
}

impl Component for AddInput {
    type Props = AddInputProps;
    type Msg = AddInputMsg;
    type Handler = AddInputHandler;

    fn mount(props: AddInputProps, outbox: Outbox<AddInputMsg>) -> Self {
        Self { props, buffer: String::new(), outbox }
    }

    fn set_props(&mut self, props: AddInputProps) {
        self.props = props;
    }

    fn view(&self) -> Node<AddInputHandler> {
        Node::input()
            .test_id("new-todo")
            .class("new-todo")
            .type_attr("text")
            .placeholder(self.props.placeholder.clone())
            .value(self.buffer.clone())
            .on(EventKind::Input, AddInputHandler::Input)
            .on(EventKind::KeyDown, AddInputHandler::Keydown)
    }

    fn apply(&mut self, handler: AddInputHandler, event: &UiEvent) {
        match (handler, event) {
            (AddInputHandler::Input, UiEvent::Input { value }) => {
                self.buffer = value.clone();
            }
            (AddInputHandler::Keydown, UiEvent::KeyDown(Key::Enter)) => self.commit(),
            (AddInputHandler::Keydown, UiEvent::KeyDown(_)) => {}
            (handler, event) => log::trace!("add-input: ignoring {event:?} on {handler:?}"),
        }
    }
}
