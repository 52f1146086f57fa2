//! Todo List Cache
//!
//! Holds the last fetched collection. Mutations don't patch it; they call
//! `invalidate()` and the collection is fetched again.
//!
//! Uses Leptos reactive_stores so rows only track the `data` field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::TodoApi;
use crate::error::ApiError;
use crate::models::{TodoId, TodoItem};

/// Something that can be told its data is stale
pub trait Revalidate {
    fn invalidate(&self);
}

/// What the list view should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed,
    NoData,
    Ready,
}

/// Fetch state of the collection endpoint
#[derive(Clone, Debug, PartialEq, Store)]
pub struct CacheState {
    /// Last successful response
    pub data: Option<Vec<TodoItem>>,
    /// Set when the latest fetch failed
    pub error: Option<String>,
    /// True until the first response arrives
    pub is_loading: bool,
}

impl Default for CacheState {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
        }
    }
}

impl CacheState {
    /// Apply the outcome of a fetch. A failed refetch keeps the old data.
    pub fn resolve(&mut self, result: Result<Option<Vec<TodoItem>>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn status(&self) -> ListStatus {
        if self.is_loading {
            ListStatus::Loading
        } else if self.error.is_some() {
            ListStatus::Failed
        } else if self.data.is_none() {
            ListStatus::NoData
        } else {
            ListStatus::Ready
        }
    }

    pub fn find(&self, id: TodoId) -> Option<&TodoItem> {
        self.data.as_ref()?.iter().find(|item| item.id == id)
    }
}

/// Reactive handle to the collection cache
#[derive(Clone, Copy)]
pub struct ListCache {
    state: Store<CacheState>,
    version: RwSignal<u32>,
}

impl ListCache {
    pub fn new() -> Self {
        Self {
            state: Store::new(CacheState::default()),
            version: RwSignal::new(0),
        }
    }

    /// Fetch now and again on every `invalidate()`.
    pub fn watch(self, api: TodoApi) {
        Effect::new(move |_| {
            let version = self.version.get();
            let api = api.clone();
            spawn_local(async move {
                log::debug!("fetching todo list, version={}", version);
                let result = api.list().await;
                if let Err(err) = &result {
                    log::warn!("todo list fetch failed: {}", err.detail());
                }
                self.state.write().resolve(result);
            });
        });
    }

    pub fn status(&self) -> ListStatus {
        self.state.with(|state| state.status())
    }

    /// Items in server order (tracks only the `data` field)
    pub fn items(&self) -> Vec<TodoItem> {
        self.state.data().with(|data| data.clone().unwrap_or_default())
    }

    /// Latest server copy of one item (tracks only the `data` field)
    pub fn item(&self, id: TodoId) -> Option<TodoItem> {
        self.state.data().with(|data| {
            data.as_ref()
                .and_then(|items| items.iter().find(|item| item.id == id).cloned())
        })
    }

    pub fn version(&self) -> u32 {
        self.version.get_untracked()
    }
}

impl Default for ListCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidate for ListCache {
    fn invalidate(&self) {
        self.version.update(|v| *v += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: TodoId, title: &str) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            is_complete: false,
        }
    }

    #[test]
    fn test_loading_until_first_response() {
        let state = CacheState::default();
        assert_eq!(state.status(), ListStatus::Loading);
    }

    #[test]
    fn test_resolve_success() {
        let mut state = CacheState::default();
        state.resolve(Ok(Some(vec![make_item(1, "a"), make_item(2, "b")])));
        assert_eq!(state.status(), ListStatus::Ready);
        assert_eq!(state.find(2).map(|item| item.title.as_str()), Some("b"));
        assert!(state.find(3).is_none());
    }

    #[test]
    fn test_null_data_is_no_data() {
        let mut state = CacheState::default();
        state.resolve(Ok(None));
        assert_eq!(state.status(), ListStatus::NoData);
    }

    #[test]
    fn test_failed_fetch_reports_error() {
        let mut state = CacheState::default();
        state.resolve(Err(ApiError::Transport("connection refused".into())));
        assert_eq!(state.status(), ListStatus::Failed);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_failed_refetch_keeps_data_and_recovers() {
        let mut state = CacheState::default();
        state.resolve(Ok(Some(vec![make_item(1, "a")])));
        state.resolve(Err(ApiError::Decode("<html>".into())));
        assert_eq!(state.status(), ListStatus::Failed);
        assert!(state.find(1).is_some());

        state.resolve(Ok(Some(vec![make_item(1, "a")])));
        assert_eq!(state.status(), ListStatus::Ready);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_refetch_replaces_data() {
        let mut state = CacheState::default();
        state.resolve(Ok(Some(vec![make_item(7, "gone"), make_item(8, "kept")])));
        state.resolve(Ok(Some(vec![make_item(8, "kept")])));
        assert!(state.find(7).is_none());
        assert_eq!(state.data.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_invalidate_bumps_version() {
        let cache = ListCache::new();
        assert_eq!(cache.version(), 0);
        cache.invalidate();
        cache.invalidate();
        assert_eq!(cache.version(), 2);
    }
}
