//! Headless element tree for component tests.
//!
//! Components render into a [`Node`] tree instead of a live DOM. The tree
//! keeps just enough of the element vocabulary to query by test id, read
//! attributes and text, and route simulated events to typed listeners.

pub mod event;
pub mod node;
pub mod query;

pub use event::{EventKind, Key, UiEvent};
pub use node::{Node, Tag};
pub use query::QueryError;
