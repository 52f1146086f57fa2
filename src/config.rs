//! Build-time Configuration
//!
//! Values are baked in when the WASM bundle is compiled:
//! `TODO_API_BASE_URL=https://api.example.com trunk build`.

/// Backend origin, without trailing slash
pub const BASE_URL: &str = match option_env!("TODO_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Collection path appended to `BASE_URL`
pub const TODOS: &str = "/todos";

/// Default `log` level name
pub const LOG_LEVEL: &str = match option_env!("TODO_LOG_LEVEL") {
    Some(level) => level,
    None => "info",
};
