//! Mock TODO Backend
//!
//! In-memory implementation of the `/todos` REST contract. Every response is
//! wrapped in the `{data, status}` envelope and validation failures carry the
//! same messages as the production backend. Each request is recorded so
//! tests can assert on exactly what the client sent.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::http::Method;

pub const ERR_INVALID_INPUT: &str = "入力が不正です。";
pub const ERR_INVALID_ID: &str = "IDが不正です。";
pub const ERR_REQUIRED_TITLE: &str = "タイトルは必須です。";
pub const ERR_OVER_LENGTH_TITLE: &str = "タイトルは255文字以内で入力してください。";
pub const ERR_NOT_UPDATED_TODO: &str = "更新したTODOがありません。";
pub const ERR_DELETED_TODO: &str = "指定のTODOは削除済みです。";

const MAX_TITLE_BYTES: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_complete: bool,
}

#[derive(Serialize)]
struct Status {
    code: u16,
    error: bool,
    error_message: String,
}

#[derive(Serialize)]
struct Envelope<T> {
    data: T,
    status: Status,
}

/// Request body of POST and PUT. Missing fields decode to their defaults.
#[derive(Deserialize)]
struct TodoInput {
    #[serde(default)]
    title: String,
    #[serde(default)]
    is_complete: bool,
}

/// One request as seen by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    todos: Vec<Todo>,
    requests: Vec<RecordedRequest>,
}

/// Shared backend state; clones refer to the same collection.
#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<RwLock<Inner>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/todos", get(list_todos).post(create_todo))
            .route("/todos/{id}", put(update_todo).delete(delete_todo))
            .with_state(self.clone())
    }

    /// Current collection in insertion order.
    pub async fn todos(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.read().await.requests.clone()
    }

    /// Number of recorded requests with the given method.
    pub async fn count(&self, method: Method) -> usize {
        self.inner
            .read()
            .await
            .requests
            .iter()
            .filter(|req| req.method == method)
            .count()
    }

    /// Insert a todo directly, bypassing the HTTP surface and the request log.
    pub async fn insert(&self, title: &str, is_complete: bool) -> Todo {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: title.to_string(),
            is_complete,
        };
        inner.todos.push(todo.clone());
        todo
    }

    async fn record(&self, method: Method, path: String, body: Option<&str>) {
        let body = body.and_then(|raw| serde_json::from_str(raw).ok());
        self.inner
            .write()
            .await
            .requests
            .push(RecordedRequest { method, path, body });
    }
}

/// Serve the backend on an already-bound listener.
pub async fn serve(listener: TcpListener, backend: Backend) -> Result<(), std::io::Error> {
    axum::serve(listener, backend.router()).await
}

type Reply<T> = (StatusCode, Json<Envelope<T>>);

fn reply<T: Serialize>(code: StatusCode, data: T, message: &str) -> Reply<T> {
    let status = Status {
        code: code.as_u16(),
        error: !message.is_empty(),
        error_message: message.to_string(),
    };
    (code, Json(Envelope { data, status }))
}

fn validate(input: &TodoInput) -> Result<(), &'static str> {
    if input.title.trim().is_empty() {
        return Err(ERR_REQUIRED_TITLE);
    }
    if input.title.len() > MAX_TITLE_BYTES {
        return Err(ERR_OVER_LENGTH_TITLE);
    }
    Ok(())
}

/// Decode and validate a request body.
fn parse_input(body: &str) -> Result<TodoInput, &'static str> {
    let input: TodoInput = serde_json::from_str(body).map_err(|_| ERR_INVALID_INPUT)?;
    validate(&input)?;
    Ok(input)
}

async fn list_todos(State(backend): State<Backend>) -> Reply<Option<Vec<Todo>>> {
    backend.record(Method::GET, "/todos".to_string(), None).await;
    let todos = backend.todos().await;
    // An empty table is encoded as `null`, not `[]`.
    let data = if todos.is_empty() { None } else { Some(todos) };
    reply(StatusCode::OK, data, "")
}

async fn create_todo(State(backend): State<Backend>, body: String) -> Reply<Option<Todo>> {
    backend
        .record(Method::POST, "/todos".to_string(), Some(body.as_str()))
        .await;
    match parse_input(&body) {
        Ok(input) => {
            let todo = backend.insert(&input.title, input.is_complete).await;
            reply(StatusCode::CREATED, Some(todo), "")
        }
        Err(message) => reply(StatusCode::BAD_REQUEST, None, message),
    }
}

async fn update_todo(
    State(backend): State<Backend>,
    Path(raw_id): Path<String>,
    body: String,
) -> Reply<Option<Todo>> {
    backend
        .record(Method::PUT, format!("/todos/{raw_id}"), Some(body.as_str()))
        .await;
    let Ok(id) = raw_id.parse::<i64>() else {
        return reply(StatusCode::BAD_REQUEST, None, ERR_INVALID_ID);
    };
    let input = match parse_input(&body) {
        Ok(input) => input,
        Err(message) => return reply(StatusCode::BAD_REQUEST, None, message),
    };

    let mut inner = backend.inner.write().await;
    // Like a SQL UPDATE, a row whose values don't change counts as not updated.
    let updated = inner
        .todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .filter(|todo| todo.title != input.title || todo.is_complete != input.is_complete)
        .map(|todo| {
            todo.title = input.title;
            todo.is_complete = input.is_complete;
        })
        .is_some();

    if updated {
        reply(StatusCode::OK, None, "")
    } else {
        reply(StatusCode::NOT_FOUND, None, ERR_NOT_UPDATED_TODO)
    }
}

async fn delete_todo(
    State(backend): State<Backend>,
    Path(raw_id): Path<String>,
) -> Reply<Option<Todo>> {
    backend
        .record(Method::DELETE, format!("/todos/{raw_id}"), None)
        .await;
    let Ok(id) = raw_id.parse::<i64>() else {
        return reply(StatusCode::BAD_REQUEST, None, ERR_INVALID_ID);
    };

    let mut inner = backend.inner.write().await;
    let before = inner.todos.len();
    inner.todos.retain(|todo| todo.id != id);
    if inner.todos.len() < before {
        reply(StatusCode::OK, None, "")
    } else {
        reply(StatusCode::NOT_FOUND, None, ERR_DELETED_TODO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_list_encodes_null_data() {
        let backend = Backend::new();
        let resp = backend
            .router()
            .oneshot(Request::builder().uri("/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert!(json["data"].is_null());
        assert_eq!(json["status"]["error"], false);
        assert_eq!(json["status"]["code"], 200);
    }

    #[tokio::test]
    async fn test_create_returns_item_envelope() {
        let backend = Backend::new();
        let resp = backend
            .router()
            .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk","is_complete":false}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["title"], "Buy milk");
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(backend.todos().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let backend = Backend::new();
        let resp = backend
            .router()
            .oneshot(json_request("POST", "/todos", r#"{"title":"   ","is_complete":false}"#))
            .await
            .unwrap();

        let json = body_json(resp).await;
        assert_eq!(json["status"]["error"], true);
        assert_eq!(json["status"]["error_message"], ERR_REQUIRED_TITLE);
        assert!(backend.todos().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let backend = Backend::new();
        let resp = backend
            .router()
            .oneshot(json_request("POST", "/todos", "not json"))
            .await
            .unwrap();

        let json = body_json(resp).await;
        assert_eq!(json["status"]["error_message"], ERR_INVALID_INPUT);
        // Undecodable bodies are still logged, without a parsed body.
        let requests = backend.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn test_title_length_limit() {
        let backend = Backend::new();
        let long = "a".repeat(256);
        let body = format!(r#"{{"title":"{long}","is_complete":false}}"#);
        let resp = backend
            .router()
            .oneshot(json_request("POST", "/todos", &body))
            .await
            .unwrap();

        let json = body_json(resp).await;
        assert_eq!(json["status"]["error_message"], ERR_OVER_LENGTH_TITLE);
    }

    #[tokio::test]
    async fn test_update_without_changes_is_not_updated() {
        let backend = Backend::new();
        let todo = backend.insert("Walk dog", false).await;
        let resp = backend
            .router()
            .oneshot(json_request(
                "PUT",
                &format!("/todos/{}", todo.id),
                r#"{"title":"Walk dog","is_complete":false}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["status"]["error_message"], ERR_NOT_UPDATED_TODO);
    }

    #[tokio::test]
    async fn test_update_applies_fields() {
        let backend = Backend::new();
        let todo = backend.insert("Walk dog", false).await;
        let resp = backend
            .router()
            .oneshot(json_request(
                "PUT",
                &format!("/todos/{}", todo.id),
                r#"{"title":"Walk cat","is_complete":true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let todos = backend.todos().await;
        assert_eq!(todos[0].title, "Walk cat");
        assert!(todos[0].is_complete);
    }

    #[tokio::test]
    async fn test_delete_invalid_and_missing_ids() {
        let backend = Backend::new();
        let resp = backend
            .router()
            .oneshot(delete_request("/todos/abc"))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["status"]["error_message"], ERR_INVALID_ID);

        let resp = backend
            .router()
            .oneshot(delete_request("/todos/42"))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["status"]["error_message"], ERR_DELETED_TODO);
        assert_eq!(backend.count(Method::DELETE).await, 2);
    }
}
