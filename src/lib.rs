//! Todo Frontend
//!
//! Leptos client for the `/todos` REST backend.

pub mod actions;
pub mod app;
pub mod cache;
pub mod commands;
pub mod components;
pub mod composer;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod models;

pub use app::App;
