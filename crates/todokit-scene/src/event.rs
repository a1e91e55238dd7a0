//! Simulated user interactions.
//!
//! [`UiEvent`] is the payload a test injects; [`EventKind`] is the key a
//! listener registers under. `UiEvent::kind` connects the two when the
//! harness picks the listener for an injected event.

/// Event kinds an element can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DblClick,
    KeyDown,
    Input,
    Change,
    Blur,
}

/// Keyboard key carried by a keydown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other(String),
}

impl Key {
    pub fn other(name: impl Into<String>) -> Self {
        Key::Other(name.into())
    }
}

/// One simulated interaction, payload included.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Click,
    DblClick,
    KeyDown(Key),
    /// Text typed into an input. Carries the input's new full value.
    Input { value: String },
    /// Checkbox toggled by the user. Carries the new checked state.
    Change { checked: bool },
    Blur,
}

impl UiEvent {
    pub fn input(value: impl Into<String>) -> Self {
        UiEvent::Input { value: value.into() }
    }

    pub fn change(checked: bool) -> Self {
        UiEvent::Change { checked }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Click => EventKind::Click,
            UiEvent::DblClick => EventKind::DblClick,
            UiEvent::KeyDown(_) => EventKind::KeyDown,
            UiEvent::Input { .. } => EventKind::Input,
            UiEvent::Change { .. } => EventKind::Change,
            UiEvent::Blur => EventKind::Blur,
        }
    }
}
