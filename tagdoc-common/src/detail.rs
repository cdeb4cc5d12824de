//! Per-view state of an opened tag: interactive toggle plus editable preview

use tracing::{debug, warn};

use crate::catalog::TagRecord;
use crate::preview::{FieldValue, Preview};

/// Transient state owned by one detail view.
///
/// Starts Closed with a copy of the record's defaults; never writes back to
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    tag: &'static str,
    interactive_open: bool,
    preview: Option<Preview>,
}

impl DetailState {
    pub fn new(record: &TagRecord) -> Self {
        Self {
            tag: record.name,
            interactive_open: false,
            preview: record.defaults.clone(),
        }
    }

    pub fn is_interactive_open(&self) -> bool {
        self.interactive_open
    }

    /// `None` when the record has no interactive example
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Show or hide the interactive block; field values survive either way
    pub fn toggle_interactive(&mut self) {
        self.interactive_open = !self.interactive_open;
        debug!(tag = self.tag, open = self.interactive_open, "Toggled interactive example");
    }

    /// Replace one field of the preview.
    ///
    /// Updates the preview cannot hold are logged and dropped.
    pub fn update_field(&mut self, key: &str, value: FieldValue) {
        let Some(preview) = self.preview.as_mut() else {
            warn!(tag = self.tag, key, "Field update for a tag without a preview");
            return;
        };
        match preview.set(key, value) {
            Ok(()) => debug!(tag = self.tag, key, "Updated preview field"),
            Err(e) => warn!(tag = self.tag, "Ignoring field update: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::category::Category;

    #[test]
    fn test_starts_closed_with_defaults() {
        let record = catalog().by_name("h2").unwrap();
        let state = DetailState::new(record);
        assert!(!state.is_interactive_open());
        assert_eq!(state.preview(), record.defaults.as_ref());
    }

    #[test]
    fn test_toggle_twice_keeps_edits() {
        let record = catalog().by_name("section").unwrap();
        let mut state = DetailState::new(record);
        state.toggle_interactive();
        assert!(state.is_interactive_open());
        state.update_field("heading", "Контакты".into());
        let before = state.clone();

        state.toggle_interactive();
        assert!(!state.is_interactive_open());
        state.toggle_interactive();
        assert_eq!(state, before);
    }

    #[test]
    fn test_bad_update_leaves_state_untouched() {
        let record = catalog().by_name("table").unwrap();
        let mut state = DetailState::new(record);
        let before = state.clone();
        state.update_field("rows", "много".into());
        state.update_field("colour", FieldValue::Number(3));
        assert_eq!(state, before);
    }

    #[test]
    fn test_edits_do_not_leak_into_catalog() {
        let record = catalog().by_name("p").unwrap();
        let mut state = DetailState::new(record);
        state.update_field("text", "Другой текст".into());
        assert_ne!(state.preview(), record.defaults.as_ref());
        assert_eq!(
            DetailState::new(record).preview(),
            catalog().by_name("p").unwrap().defaults.as_ref()
        );
    }

    #[test]
    fn test_record_without_preview_ignores_updates() {
        let record = TagRecord {
            name: "blink",
            description: "",
            category: Category::Content,
            attributes: vec![],
            example: "<blink></blink>",
            defaults: None,
        };
        let mut state = DetailState::new(&record);
        state.update_field("text", "x".into());
        assert_eq!(state.preview(), None);
    }
}
