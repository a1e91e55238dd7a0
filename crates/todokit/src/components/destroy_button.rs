//! Per-row delete button.

use todokit_scene::{EventKind, Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

/// Notifications raised by [`DestroyButton`]. Click is the only
/// interaction, so destruction is the only thing it can ever say.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestroyButtonMsg {
    Destroy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestroyButtonHandler {
    Click,
}

/// Render the button markup. The todo list embeds this too and re-tags
/// the click with the owning row's id.
pub(crate) fn markup() -> Node<DestroyButtonHandler> {
    Node::button()
        .test_id("destroy")
        .class("destroy")
        .type_attr("button")
        .aria_label("Delete")
        .child(Node::text("×"))
        .on(EventKind::Click, DestroyButtonHandler::Click)
}

/// The small "×" button on the right edge of a todo row. Takes no props.
pub struct DestroyButton {
    outbox: Outbox<DestroyButtonMsg>,
}

impl Component for DestroyButton {
    type Props = ();
    type Msg = DestroyButtonMsg;
    type Handler = DestroyButtonHandler;

    fn mount(_props: (), outbox: Outbox<DestroyButtonMsg>) -> Self {
        Self { outbox }
    }

    fn set_props(&mut self, _props: ()) {}

    fn view(&self) -> Node<DestroyButtonHandler> {
        markup()
    }

    fn apply(&mut self, handler: DestroyButtonHandler, event: &UiEvent) {
        match (handler, event) {
            (DestroyButtonHandler::Click, UiEvent::Click) => {
                self.outbox.emit(DestroyButtonMsg::Destroy);
            }
            (handler, event) => log::trace!("destroy-button: ignoring {event:?} on {handler:?}"),
        }
    }
}
