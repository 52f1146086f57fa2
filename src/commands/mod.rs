//! Backend Command Wrappers
//!
//! REST bindings to the todo backend. `todo.rs` holds the operations, this
//! module the shared JSON transport.

mod todo;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use todo::*;

/// Send a request and decode its JSON envelope.
///
/// The HTTP status code is not inspected; the envelope's `status` block is
/// the only failure channel the backend uses.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{e}: {body}")))
}
