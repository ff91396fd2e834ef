use crate::types::{Field, FieldValue, Level};
use serde::{Deserialize, Serialize};

/// A fully-assembled log record.
///
/// Constructed exactly once per log call and consumed read-only by sinks.
/// The serialized form has exactly three members: `level` (integer),
/// `message` (text), and `fields` (ordered `{name, value}` pairs).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Message {
    pub level: Level,
    #[serde(rename = "message")]
    pub text: String,
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new(level: Level, text: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            level,
            text: text.into(),
            fields,
        }
    }

    /// Value of the first field with the given name, if any.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name.as_str() == name)
            .map(|f| &f.value)
    }
}
