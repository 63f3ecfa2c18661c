use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Never supplied by clients on creation.
pub type ItemId = i64;

/// The single entity managed by the service.
///
/// Every field is optional on input: a payload of `{}` deserializes to an
/// item with id `0`, empty name and description, and `isComplete: false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub is_complete: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn completed(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }
}
