//! Frontend Models
//!
//! Data structures matching the backend's JSON envelopes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Server-assigned todo id
pub type TodoId = i64;

/// Todo item (owned by the backend, the client only holds copies)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

/// Status block carried by every response envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: i32,
    pub error: bool,
    #[serde(default)]
    pub error_message: String,
}

impl Status {
    /// Turn a backend-reported failure into an `ApiError`.
    pub fn check(&self) -> Result<(), ApiError> {
        if !self.error {
            return Ok(());
        }
        let message = if self.error_message.is_empty() {
            format!("Request failed (code {})", self.code)
        } else {
            self.error_message.clone()
        };
        Err(ApiError::Backend {
            code: self.code,
            message,
        })
    }
}

/// Collection envelope returned by `GET /todos`.
///
/// `data` is `null` when the collection is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodosResponse {
    #[serde(default)]
    pub data: Option<Vec<TodoItem>>,
    pub status: Status,
}

/// Single-item envelope returned by the item-mutating endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoResponse {
    #[serde(default, deserialize_with = "item_or_list")]
    pub data: Option<TodoItem>,
    pub status: Status,
}

/// Request body of POST and PUT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPayload {
    pub title: String,
    pub is_complete: bool,
}

impl TodoPayload {
    /// Body for a freshly created item
    pub fn new_item(title: &str) -> Self {
        Self {
            title: title.to_string(),
            is_complete: false,
        }
    }

    /// Whether sending this payload would change `item` on the server
    pub fn differs_from(&self, item: &TodoItem) -> bool {
        self.title != item.title || self.is_complete != item.is_complete
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemShape {
    One(TodoItem),
    Many(Vec<TodoItem>),
}

// Some backend builds answer POST with a collection envelope (`"data": []`).
fn item_or_list<'de, D>(deserializer: D) -> Result<Option<TodoItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let shape = Option::<ItemShape>::deserialize(deserializer)?;
    Ok(match shape {
        Some(ItemShape::One(item)) => Some(item),
        Some(ItemShape::Many(items)) => items.into_iter().next(),
        None => None,
    })
}
