//! Component mounting and event simulation.
//!
//! The workflow is mount, interact, assert: mount one component with
//! props, locate elements in its rendered tree by test id, inject
//! simulated events, then read the re-rendered tree and the drained
//! notifications. Lookups panic with a descriptive message so a failing
//! test points straight at the missing element; `try_find` is the
//! non-panicking escape hatch.

use std::sync::Once;

use todokit_scene::{Node, QueryError, UiEvent};

use crate::component::Component;
use crate::outbox::{self, Emitted};

static LOG_INIT: Once = Once::new();

/// Process-wide logging bootstrap. Safe to call repeatedly.
pub fn init_test_logging() {
    LOG_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// One mounted component with its rendered tree and notification stream.
///
/// Instances are independent: mounting twice gives two components with
/// separate state and separate channels. Dropping tears everything down.
pub struct Mounted<C: Component> {
    component: C,
    tree: Node<C::Handler>,
    emitted: Emitted<C::Msg>,
}

impl<C: Component> Mounted<C> {
    /// Mount with the given props and render once.
    pub fn mount(props: C::Props) -> Self {
        init_test_logging();
        let (outbox, emitted) = outbox::channel();
        let component = C::mount(props, outbox);
        let tree = component.view();
        Self { component, tree, emitted }
    }

    /// Mount with default props.
    pub fn mount_default() -> Self
    where
        C::Props: Default,
    {
        Self::mount(C::Props::default())
    }

    /// The current rendered tree.
    pub fn tree(&self) -> &Node<C::Handler> {
        &self.tree
    }

    /// The unique element carrying `test_id`. Panics when it is missing
    /// or matched more than once.
    pub fn find(&self, test_id: &str) -> &Node<C::Handler> {
        match self.tree.find(test_id) {
            Ok(node) => node,
            Err(err) => panic!("find({test_id:?}): {err}"),
        }
    }

    /// Non-panicking lookup.
    pub fn try_find(&self, test_id: &str) -> Result<&Node<C::Handler>, QueryError> {
        self.tree.find(test_id)
    }

    /// Every element carrying `test_id`, in document order.
    pub fn find_all(&self, test_id: &str) -> Vec<&Node<C::Handler>> {
        self.tree.find_all(test_id)
    }

    /// Text content of the unique element carrying `test_id`.
    pub fn text_of(&self, test_id: &str) -> String {
        self.find(test_id).text_content()
    }

    /// Simulate `event` on the unique element carrying `test_id`, then
    /// re-render. An element without a listener for the event's kind
    /// swallows it, the way a real DOM dispatches into the void.
    pub fn perform(&mut self, test_id: &str, event: UiEvent) {
        let handler = match self.tree.find(test_id) {
            Ok(node) => node.handler_for(event.kind()).cloned(),
            Err(err) => panic!("perform({test_id:?}, {event:?}): {err}"),
        };
        self.deliver(test_id, handler, event);
    }

    /// Simulate `event` on the `index`-th element (document order)
    /// carrying `test_id`.
    pub fn perform_nth(&mut self, test_id: &str, index: usize, event: UiEvent) {
        let matches = self.tree.find_all(test_id);
        let Some(node) = matches.get(index) else {
            panic!(
                "perform_nth({test_id:?}, {index}): only {} matching elements",
                matches.len(),
            );
        };
        let handler = node.handler_for(event.kind()).cloned();
        self.deliver(test_id, handler, event);
    }

    /// Owner-driven property update, then re-render.
    pub fn set_props(&mut self, props: C::Props) {
        self.component.set_props(props);
        self.settle();
    }

    /// Drain notifications emitted since the last call, oldest first.
    pub fn emitted(&mut self) -> Vec<C::Msg> {
        self.emitted.drain()
    }

    fn deliver(&mut self, test_id: &str, handler: Option<C::Handler>, event: UiEvent) {
        match handler {
            Some(handler) => {
                log::debug!("deliver {event:?} -> {test_id} ({handler:?})");
                self.component.apply(handler, &event);
            }
            None => log::debug!("no listener for {event:?} on {test_id}"),
        }
        self.settle();
    }

    fn settle(&mut self) {
        self.tree = self.component.view();
    }
}
