//! Contract shared by every component in the kit.

use std::fmt;

use todokit_scene::{Node, UiEvent};

use crate::outbox::Outbox;

/// A headless presentational component.
///
/// `mount` receives the initial props plus the sending half of the
/// notification channel and sets up internal state. `view` is a pure
/// render of props and state into an element tree whose listeners are
/// tagged with `Handler`. When a simulated event lands on a listener,
/// the harness hands the tag back through `apply`; every outward effect
/// of that goes through the outbox, never a return value.
pub trait Component {
    /// Input properties, one field per documented prop, with defaults.
    type Props;
    /// Outbound notification payload.
    type Msg: fmt::Debug;
    /// Listener tag rendered into the element tree.
    type Handler: Clone + fmt::Debug;

    fn mount(props: Self::Props, outbox: Outbox<Self::Msg>) -> Self;

    /// Owner-driven property update. Re-renders, never emits.
    fn set_props(&mut self, props: Self::Props);

    fn view(&self) -> Node<Self::Handler>;

    /// Deliver one event to the listener tagged `handler`. Events the
    /// component does not understand are ignored.
    fn apply(&mut self, handler: Self::Handler, event: &UiEvent);
}
