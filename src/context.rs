//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::actions;
use crate::cache::ListCache;
use crate::commands::TodoApi;
use crate::error::ApiError;

/// Session-wide error slot consumed by the error dialog.
///
/// Holds at most one message; a new one replaces the pending one.
pub trait ErrorSink {
    fn show_error(&self, message: String);
    fn close_error(&self);
    fn current_message(&self) -> Option<String>;
}

/// Signal-backed `ErrorSink` injected into the component tree
#[derive(Clone, Copy)]
pub struct ErrorChannel {
    message: RwSignal<Option<String>>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Whether a message is waiting to be acknowledged (tracked)
    pub fn is_live(&self) -> bool {
        self.message.with(Option::is_some)
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSink for ErrorChannel {
    fn show_error(&self, message: String) {
        self.message.set(Some(message));
    }

    fn close_error(&self) {
        self.message.set(None);
    }

    fn current_message(&self) -> Option<String> {
        self.message.get()
    }
}

/// Get the error channel from context
pub fn use_error_channel() -> ErrorChannel {
    expect_context::<ErrorChannel>()
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub errors: ErrorChannel,
    pub cache: ListCache,
    api: StoredValue<TodoApi, LocalStorage>,
}

impl AppContext {
    pub fn new(errors: ErrorChannel, cache: ListCache, api: TodoApi) -> Self {
        Self {
            errors,
            cache,
            api: StoredValue::new_local(api),
        }
    }

    /// The session's client; clones share one connection pool
    pub fn api(&self) -> TodoApi {
        self.api.get_value()
    }

    /// Report a finished mutation: errors go to the dialog, the list is
    /// always refetched.
    pub fn settle<T>(&self, action: &str, result: Result<T, ApiError>) -> Option<T> {
        actions::settle(action, result, &self.errors, &self.cache)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
