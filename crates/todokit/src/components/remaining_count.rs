//! Items-left counter.

use todokit_scene::{Node, UiEvent};

use crate::component::Component;
use crate::outbox::Outbox;

#[derive(Clone, Copy, Debug, Default)]
pub struct RemainingCountProps {
    pub count: i64,
}

/// [`RemainingCount`] is purely presentational and never emits, which
/// the empty enum makes unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingCountMsg {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingCountHandler {}

/// Renders `<strong>{count}</strong> item(s) left`, singular exactly
/// at a count of one.
pub struct RemainingCount {
    props: RemainingCountProps,
}

fn unit_word(count: i64) -> &'static str {
    if count == 1 {
        "item"
    } else {
        "items"
    }
}

impl Component for RemainingCount {
    type Props = RemainingCountProps;
    type Msg = RemainingCountMsg;
    type Handler = RemainingCountHandler;

    fn mount(props: RemainingCountProps, _outbox: Outbox<RemainingCountMsg>) -> Self {
        Self { props }
    }

    fn set_props(&mut self, props: RemainingCountProps) {
        self.props = props;
    }

    fn view(&self) -> Node<RemainingCountHandler> {
        Node::span()
            .test_id("todo-count")
            .class("todo-count")
            .child(Node::strong().child(Node::text(self.props.count.to_string())))
            .child(Node::text(format!(" {} left", unit_word(self.props.count))))
    }

    fn apply(&mut self, handler: RemainingCountHandler, _event: &UiEvent) {
        match handler {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_the_only_singular_count() {
        assert_eq!(unit_word(1), "item");
        assert_eq!(unit_word(0), "items");
        assert_eq!(unit_word(2), "items");
        assert_eq!(unit_word(-1), "items");
        assert_eq!(unit_word(100), "items");
    }
}
