//! Todo data shared by the components.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque row identifier.
///
/// Owners hand ids over as small integers, zero included, or as strings.
/// The components never interpret them, they only compare for equality
/// and echo them back in notifications, so both shapes are kept as-is
/// instead of being coerced into one primitive. `1` and `"1"` stay
/// distinct ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        TodoId::Int(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        TodoId::Text(id.to_owned())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        TodoId::Text(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(id) => write!(f, "{id}"),
            TodoId::Text(id) => f.write_str(id),
        }
    }
}

/// One todo row, supplied wholesale by the owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>, completed: bool) -> Self {
        Self { id: id.into(), title: title.into(), completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_deserialize_untagged() {
        let todos: Vec<Todo> = serde_json::from_value(json!([
            { "id": 1, "title": "a" },
            { "id": 0, "title": "b" },
            { "id": "k-2", "title": "c" },
        ]))
        .unwrap();
        assert_eq!(todos[0].id, TodoId::Int(1));
        assert_eq!(todos[1].id, TodoId::Int(0));
        assert_eq!(todos[2].id, TodoId::Text("k-2".to_owned()));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let todo: Todo = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(todo.title, "");
        assert!(!todo.completed);
    }

    #[test]
    fn int_and_text_ids_never_coerce() {
        assert_ne!(TodoId::from(1), TodoId::from("1"));
        assert_eq!(TodoId::from(1), TodoId::Int(1));
    }

    #[test]
    fn ids_round_trip_through_json() {
        let id: TodoId = serde_json::from_value(json!("a-1")).unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("a-1"));
        let id: TodoId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(42));
    }

    #[test]
    fn display_shows_the_raw_id() {
        assert_eq!(TodoId::from(7).to_string(), "7");
        assert_eq!(TodoId::from("a-1").to_string(), "a-1");
    }
}
