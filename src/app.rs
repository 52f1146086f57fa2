//! Todo App
//!
//! Root component: wires the shared error channel and list cache, then lays
//! out the composer, the list and the error dialog.

use leptos::prelude::*;

use crate::cache::ListCache;
use crate::commands::TodoApi;
use crate::components::{ErrorModal, TodoComposer, TodoList};
use crate::config;
use crate::context::{AppContext, ErrorChannel};

#[component]
pub fn App() -> impl IntoView {
    let errors = ErrorChannel::new();
    let cache = ListCache::new();
    let api = TodoApi::new(config::BASE_URL);

    // Provide context to all children
    provide_context(errors);
    provide_context(AppContext::new(errors, cache, api.clone()));

    // Load the list on mount and after every invalidate()
    cache.watch(api);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"TODO"</h1>
                <TodoComposer />
                <TodoList />
            </main>
            <ErrorModal />
        </div>
    }
}
