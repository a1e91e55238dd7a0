//! Element tree nodes.
//!
//! A [`Node`] is an immutable snapshot of rendered output. Attribute
//! fields are public: tests read them directly, views set them through
//! the chaining builders. The handler parameter `H` is whatever tag the
//! owning component uses to recognize its own listeners.

use smallvec::SmallVec;

use crate::event::EventKind;

/// Element names the components render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Input,
    Button,
    Label,
    Span,
    Strong,
    Ul,
    Li,
    /// Leaf carrying literal text, never parsed.
    Text,
}

/// One rendered element or text leaf, with its listeners.
#[derive(Clone, Debug)]
pub struct Node<H> {
    pub tag: Tag,
    pub test_id: Option<String>,
    pub class: Option<String>,
    pub type_attr: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub checked: Option<bool>,
    pub aria_label: Option<String>,
    pub text: Option<String>,
    pub children: Vec<Node<H>>,
    pub listeners: SmallVec<[(EventKind, H); 2]>,
}

impl<H> Node<H> {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            test_id: None,
            class: None,
            type_attr: None,
            placeholder: None,
            value: None,
            checked: None,
            aria_label: None,
            text: None,
            children: Vec::new(),
            listeners: SmallVec::new(),
        }
    }

    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn strong() -> Self {
        Self::new(Tag::Strong)
    }

    pub fn ul() -> Self {
        Self::new(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::new(Tag::Li)
    }

    /// Text leaf. Content stays opaque, markup-looking strings included.
    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Text);
        node.text = Some(content.into());
        node
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The HTML `type` attribute, shared by inputs and buttons.
    pub fn type_attr(mut self, type_attr: impl Into<String>) -> Self {
        self.type_attr = Some(type_attr.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn child(mut self, child: Node<H>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node<H>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Register `handler` for events of `kind` on this element.
    pub fn on(mut self, kind: EventKind, handler: H) -> Self {
        self.listeners.push((kind, handler));
        self
    }

    /// The handler registered for `kind`, if any.
    pub fn handler_for(&self, kind: EventKind) -> Option<&H> {
        self.listeners
            .iter()
            .find(|(listened, _)| *listened == kind)
            .map(|(_, handler)| handler)
    }

    pub fn listens_for(&self, kind: EventKind) -> bool {
        self.handler_for(kind).is_some()
    }

    /// Concatenated text of this element and all descendants, in
    /// document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Re-tag every listener in the tree. Lets a parent embed a child's
    /// markup while routing its events through the parent's own handler
    /// space, usually with an id baked in.
    pub fn map<H2, F>(self, f: F) -> Node<H2>
    where
        F: Fn(H) -> H2,
    {
        map_node(self, &f)
    }
}

fn map_node<H, H2, F>(node: Node<H>, f: &F) -> Node<H2>
where
    F: Fn(H) -> H2,
{
    Node {
        tag: node.tag,
        test_id: node.test_id,
        class: node.class,
        type_attr: node.type_attr,
        placeholder: node.placeholder,
        value: node.value,
        checked: node.checked,
        aria_label: node.aria_label,
        text: node.text,
        children: node.children.into_iter().map(|child| map_node(child, f)).collect(),
        listeners: node
            .listeners
            .into_iter()
            .map(|(kind, handler)| (kind, f(handler)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_concatenates_in_document_order() {
        let node: Node<()> = Node::span()
            .child(Node::strong().child(Node::text("2")))
            .child(Node::text(" items left"));
        assert_eq!(node.text_content(), "2 items left");
    }

    #[test]
    fn builders_set_attributes() {
        let node: Node<()> = Node::input()
            .test_id("new-todo")
            .class("new-todo")
            .type_attr("text")
            .placeholder("hint")
            .value("abc");
        assert_eq!(node.tag, Tag::Input);
        assert_eq!(node.test_id.as_deref(), Some("new-todo"));
        assert_eq!(node.class.as_deref(), Some("new-todo"));
        assert_eq!(node.type_attr.as_deref(), Some("text"));
        assert_eq!(node.placeholder.as_deref(), Some("hint"));
        assert_eq!(node.value.as_deref(), Some("abc"));
        assert_eq!(node.checked, None);
    }

    #[test]
    fn handler_lookup_is_per_kind() {
        let node = Node::input()
            .on(EventKind::Input, "typed")
            .on(EventKind::KeyDown, "pressed");
        assert_eq!(node.handler_for(EventKind::Input), Some(&"typed"));
        assert_eq!(node.handler_for(EventKind::KeyDown), Some(&"pressed"));
        assert_eq!(node.handler_for(EventKind::Click), None);
        assert!(!node.listens_for(EventKind::Blur));
    }

    #[test]
    fn map_retags_listeners_and_keeps_structure() {
        let child = Node::button().on(EventKind::Click, "inner");
        let parent = Node::li().test_id("row").child(child);
        let mapped = parent.map(|tag| format!("row-7/{tag}"));
        assert_eq!(mapped.test_id.as_deref(), Some("row"));
        assert_eq!(
            mapped.children[0].handler_for(EventKind::Click),
            Some(&"row-7/inner".to_owned()),
        );
    }
}
