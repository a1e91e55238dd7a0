//! Checkbox that flips every todo at once.

use todokit_scene::{EventKind, Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleAllProps {
    /// Whether every visible todo is currently completed.
    pub all_checked: bool,
}

/// Notifications raised by [`ToggleAll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAllMsg {
    /// User toggled the checkbox. Carries the new checked state.
    ToggleAll(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAllHandler {
    Change,
}

/// The "toggle all" checkbox. Checked state mirrors the `all_checked`
/// prop; only a user-driven change emits, a prop update never does.
pub struct ToggleAll {
    props: ToggleAllProps,
    outbox: Outbox<ToggleAllMsg>,
}

impl Component for ToggleAll {
    type Props = ToggleAllProps;
    type Msg = ToggleAllMsg;
    type Handler = ToggleAllHandler;

    fn mount(props: ToggleAllProps, outbox: Outbox<ToggleAllMsg>) -> Self {
        Self { props, outbox }
    }

    fn set_props(&mut self, props: ToggleAllProps) {
        self.props = props;
    }

    fn view(&self) -> Node<ToggleAllHandler> {
        Node::input()
            .test_id("toggle-all")
            .class("toggle-all")
            .type_attr("checkbox")
            .checked(self.props.all_checked)
            .on(EventKind::Change, ToggleAllHandler::Change)
    }

    fn apply(&mut self, handler: ToggleAllHandler, event: &UiEvent) {
        match (handler, event) {
            (ToggleAllHandler::Change, UiEvent::Change { checked }) => {
                self.outbox.emit(ToggleAllMsg::ToggleAll(*checked));
            }
            (handler, event) => log::trace!("toggle-all: ignoring {event:?} on {handler:?}"),
        }
    }
}
