//! Headless TodoMVC-style components.
//!
//! Each component takes typed props, renders a [`todokit_scene::Node`]
//! tree, and reports user intent through an outbound notification
//! channel. Nothing here touches a browser: [`harness::Mounted`] mounts a
//! single component, simulates DOM-style events against its rendered
//! tree, and reads back whatever the component emitted.

pub mod component;
pub mod components;
pub mod harness;
pub mod model;
pub mod outbox;

pub use component::Component;
pub use harness::Mounted;
pub use model::{Todo, TodoId};
pub use outbox::{channel, Emitted, Outbox};
pub use todokit_scene::{EventKind, Key, Node, QueryError, Tag, UiEvent};
