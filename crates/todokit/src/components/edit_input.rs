//! Input for editing an existing todo title.
//!
//! Two-way binding is split into an inbound `model_value` prop and an
//! outbound [`EditInputMsg::UpdateModelValue`] notification. The owner
//! feeds the notification back as the next `model_value`; until that
//! happens the internal buffer tracks keystrokes on its own, and a prop
//! update overwrites whatever was typed.

use todokit_scene::{EventKind, Key, Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

#[derive(Clone, Debug)]
pub struct EditInputProps {
    pub model_value: String,
    pub placeholder: String,
}

impl Default for EditInputProps {
    fn default() -> Self {
        Self {
            model_value: String::new(),
            placeholder: "Edit todo".to_owned(),
        }
    }
}

/// Notifications raised by [`EditInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditInputMsg {
    /// Commit of the current text, via Enter or blur.
    Save(String),
    /// Model half of the two-way binding, sent alongside every save.
    UpdateModelValue(String),
    /// Escape pressed. No payload, the edit is abandoned.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditInputHandler {
    Input,
    Keydown,
    Blur,
}

pub struct EditInput {
    props: EditInputProps,
    buffer: String,
    outbox: Outbox<EditInputMsg>,
}

impl EditInput {
    fn commit(&mut self) {
        let text = self.buffer.clone();
        self.outbox.emit(EditInputMsg::Save(text.clone()));
        self.outbox.emit(EditInputMsg::UpdateModelValue(text));
    }
}

impl Component for EditInput {
    type Props = EditInputProps;
    type Msg = EditInputMsg;
    type Handler = EditInputHandler;

    fn mount(props: EditInputProps, outbox: Outbox<EditInputMsg>) -> Self {
        let buffer = props.model_value.clone();
        Self { props, buffer, outbox }
    }

    fn set_props(&mut self, props: EditInputProps) {
        // The external model value wins over local edits.
        self.buffer = props.model_value.clone();
        self.props = props;
    }

    fn view(&self) -> Node<EditInputHandler> {
        Node::input()
            .test_id("todo-edit")
            .class("edit")
            .type_attr("text")
            .placeholder(self.props.placeholder.clone())
            .value(self.buffer.clone())
            .on(EventKind::Input, EditInputHandler::Input)
            .on(EventKind::KeyDown, EditInputHandler::Keydown)
            .on(EventKind::Blur, EditInputHandler::Blur)
    }

    fn apply(&mut self, handler: EditInputHandler, event: &UiEvent) {
        match (handler, event) {
            (EditInputHandler::Input, UiEvent::Input { value }) => {
                self.buffer = value.clone();
            }
            (EditInputHandler::Keydown, UiEvent::KeyDown(Key::Enter)) => self.commit(),
            (EditInputHandler::Keydown, UiEvent::KeyDown(Key::Escape)) => {
                self.outbox.emit(EditInputMsg::Cancel);
            }
            (EditInputHandler::Keydown, UiEvent::KeyDown(_)) => {}
            (EditInputHandler::Blur, UiEvent::Blur) => self.commit(),
            (handler, event) => log::trace!("edit-input: ignoring {event:?} on {handler:?}"),
        }
    }
}
