//! Input Draft
//!
//! Text of the new-item form. No validation: whatever is typed, empty
//! included, is sent to the backend.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDraft {
    title: String,
}

impl InputDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Called once a submission settles, whatever its outcome.
    pub fn clear(&mut self) {
        self.title.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystrokes_replace_title() {
        let mut draft = InputDraft::default();
        draft.set_title("B".into());
        draft.set_title("Buy milk".into());
        assert_eq!(draft.title(), "Buy milk");
    }

    #[test]
    fn test_clear() {
        let mut draft = InputDraft::default();
        draft.set_title("Buy milk".into());
        draft.clear();
        assert_eq!(draft.title(), "");
    }
}
