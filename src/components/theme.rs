//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from the store and applies the `dark`
//! marker class to the `<html>` element. Toggling writes back to the store
//! and updates the class.
//!
//! TRADE-OFFS
//! ==========
//! The toggle flips the controller's own `current` value rather than
//! inspecting the root class list, so markup edits by other scripts cannot
//! desynchronize what is persisted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};
use crate::state::prefs::{THEME_KEY, Theme};
use crate::util::storage::PreferenceStore;

#[derive(Clone, Debug)]
pub struct ThemeController {
    toggle_id: String,
    dark_class: String,
    current: Theme,
}

impl ThemeController {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            toggle_id: config.elements.theme_toggle.clone(),
            dark_class: config.classes.dark.clone(),
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply the stored or system theme and bind the toggle button.
    pub fn init<D: Document>(&mut self, doc: &D, store: &dyn PreferenceStore) {
        let mode = read_preference(doc, store);
        self.set_theme(doc, store, mode);

        match doc.by_id(&self.toggle_id) {
            Some(button) => doc.listen(&button, EventKind::Click, UiEvent::ToggleTheme),
            None => log::debug!("theme: no #{} on page", self.toggle_id),
        }
    }

    /// Apply `mode` to the root element and persist it.
    pub fn set_theme<D: Document>(&mut self, doc: &D, store: &dyn PreferenceStore, mode: Theme) {
        if let Some(root) = doc.root() {
            doc.set_class(&root, &self.dark_class, mode == Theme::Dark);
        }
        store.save(THEME_KEY, mode.as_str());
        self.current = mode;
    }

    /// Switch to the opposite of the current mode and return it.
    pub fn toggle<D: Document>(&mut self, doc: &D, store: &dyn PreferenceStore) -> Theme {
        let next = self.current.toggled();
        self.set_theme(doc, store, next);
        next
    }
}

/// Stored theme if present, otherwise the system color scheme.
pub fn read_preference<D: Document>(doc: &D, store: &dyn PreferenceStore) -> Theme {
    match store.load_non_empty(THEME_KEY) {
        Some(raw) => Theme::parse(&raw),
        None if doc.prefers_dark() => Theme::Dark,
        None => Theme::Light,
    }
}
