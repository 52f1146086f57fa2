//! Item Editor
//!
//! Per-row state machine. A row is either `Viewing` or `Editing`; the draft
//! is a local working copy, while the title shown outside of editing always
//! comes from the server copy.

use crate::models::{TodoId, TodoItem, TodoPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing,
}

/// Local working copy of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub is_complete: bool,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEditor {
    server: TodoItem,
    draft: EditDraft,
}

impl ItemEditor {
    pub fn new(item: TodoItem) -> Self {
        let draft = EditDraft {
            title: item.title.clone(),
            is_complete: item.is_complete,
            editing: false,
        };
        Self { server: item, draft }
    }

    pub fn id(&self) -> TodoId {
        self.server.id
    }

    pub fn mode(&self) -> EditMode {
        if self.draft.editing {
            EditMode::Editing
        } else {
            EditMode::Viewing
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode() == EditMode::Editing
    }

    /// Last-known server state
    pub fn server(&self) -> &TodoItem {
        &self.server
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// Title shown in `Viewing`
    pub fn displayed_title(&self) -> &str {
        &self.server.title
    }

    /// Checkbox state, including an optimistic toggle
    pub fn is_complete(&self) -> bool {
        self.draft.is_complete
    }

    /// Viewing -> Editing. The title draft starts from the server copy;
    /// completion keeps whatever the checkbox currently shows.
    pub fn begin_edit(&mut self) {
        if self.draft.editing {
            return;
        }
        self.draft.title = self.server.title.clone();
        self.draft.editing = true;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    /// Editing -> Viewing. Returns the body to PUT, or `None` if the row
    /// wasn't being edited.
    pub fn commit(&mut self) -> Option<TodoPayload> {
        if !self.draft.editing {
            return None;
        }
        self.draft.editing = false;
        Some(TodoPayload {
            title: self.draft.title.clone(),
            is_complete: self.draft.is_complete,
        })
    }

    /// Flip completion locally and return the body to PUT. Works in both
    /// modes; the title is the one currently on screen.
    pub fn toggle(&mut self, checked: bool) -> TodoPayload {
        self.draft.is_complete = checked;
        let title = if self.draft.editing {
            self.draft.title.clone()
        } else {
            self.server.title.clone()
        };
        TodoPayload {
            title,
            is_complete: checked,
        }
    }

    /// Undo an optimistic toggle after the backend rejected it.
    pub fn rollback(&mut self) {
        self.draft.is_complete = self.server.is_complete;
    }

    /// Adopt a refetched server copy. An open edit keeps its title draft.
    pub fn sync(&mut self, item: TodoItem) {
        if item == self.server {
            return;
        }
        self.draft.is_complete = item.is_complete;
        if !self.draft.editing {
            self.draft.title = item.title.clone();
        }
        self.server = item;
    }
}
