//! Todo Commands
//!
//! CRUD operations against `{base}/todos`.

use reqwest::Client;

use super::send;
use crate::config;
use crate::error::ApiError;
use crate::models::{TodoId, TodoItem, TodoPayload, TodoResponse, TodosResponse};

/// Client for the todo collection endpoint
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: Client,
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/todos`
    pub fn todos_url(&self) -> String {
        format!("{}{}", self.base_url, config::TODOS)
    }

    /// `{base}/todos/{id}`
    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}{}/{}", self.base_url, config::TODOS, id)
    }

    /// Fetch the whole collection in server order. `None` means the backend
    /// sent no data.
    pub async fn list(&self) -> Result<Option<Vec<TodoItem>>, ApiError> {
        let resp: TodosResponse = send(self.client.get(self.todos_url())).await?;
        resp.status.check()?;
        log::debug!("listed {} todos", resp.data.as_ref().map_or(0, Vec::len));
        Ok(resp.data)
    }

    /// Create an incomplete item. The title is sent as typed, empty included.
    pub async fn create(&self, title: &str) -> Result<Option<TodoItem>, ApiError> {
        let payload = TodoPayload::new_item(title);
        let resp: TodoResponse = send(self.client.post(self.todos_url()).json(&payload)).await?;
        resp.status.check()?;
        log::debug!("created todo {:?}", resp.data.as_ref().map(|item| item.id));
        Ok(resp.data)
    }

    /// Replace title and completion of `known`.
    ///
    /// Nothing is sent when `payload` matches the last-known server state;
    /// returns whether a request went out.
    pub async fn update(&self, known: &TodoItem, payload: &TodoPayload) -> Result<bool, ApiError> {
        if !payload.differs_from(known) {
            log::debug!("todo {} unchanged, skipping update", known.id);
            return Ok(false);
        }
        let request = self.client.put(self.todo_url(known.id)).json(payload);
        let resp: TodoResponse = send(request).await?;
        resp.status.check()?;
        log::debug!("updated todo {}", known.id);
        Ok(true)
    }

    pub async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let resp: TodoResponse = send(self.client.delete(self.todo_url(id))).await?;
        resp.status.check()?;
        log::debug!("deleted todo {}", id);
        Ok(())
    }
}
