//! Slide-in settings sidebar and the "reset all preferences" action.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::components::font::FontController;
use crate::components::palette::PaletteController;
use crate::components::theme::ThemeController;
use crate::config::{ResetValues, UiConfig};
use crate::dom::{Document, EventKind, UiEvent};
use crate::state::prefs::{FONT_KEY, PALETTE_KEY, THEME_KEY};
use crate::util::storage::PreferenceStore;

/// Controllers the reset action re-applies defaults through.
pub struct Preferences<'a, N> {
    pub theme: &'a mut ThemeController,
    pub font: &'a mut FontController<N>,
    pub palette: &'a mut PaletteController,
}

#[derive(Clone, Debug)]
pub struct SettingsPanel<N> {
    sidebar_id: String,
    open_id: String,
    close_id: String,
    reset_id: String,
    closed_class: String,
    reset_values: ResetValues,
    sidebar: Option<N>,
}

impl<N: Clone> SettingsPanel<N> {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            sidebar_id: config.elements.settings_sidebar.clone(),
            open_id: config.elements.settings_open.clone(),
            close_id: config.elements.settings_close.clone(),
            reset_id: config.elements.settings_reset.clone(),
            closed_class: config.classes.panel_closed.clone(),
            reset_values: config.reset.clone(),
            sidebar: None,
        }
    }

    /// Bind whichever of the open/close/reset controls exist.
    pub fn init<D: Document<Node = N>>(&mut self, doc: &D) {
        self.sidebar = doc.by_id(&self.sidebar_id);

        let bindings = [
            (&self.open_id, UiEvent::ToggleSettings),
            (&self.close_id, UiEvent::CloseSettings),
            (&self.reset_id, UiEvent::ResetSettings),
        ];
        for (id, event) in bindings {
            match doc.by_id(id) {
                Some(control) => doc.listen(&control, EventKind::Click, event),
                None => log::debug!("settings: no #{id} on page"),
            }
        }
    }

    /// Slide the sidebar in or out.
    pub fn toggle<D: Document<Node = N>>(&self, doc: &D) {
        if let Some(sidebar) = &self.sidebar {
            doc.toggle_class(sidebar, &self.closed_class);
        }
    }

    /// Slide the sidebar out.
    pub fn close<D: Document<Node = N>>(&self, doc: &D) {
        if let Some(sidebar) = &self.sidebar {
            doc.set_class(sidebar, &self.closed_class, true);
        }
    }

    /// Forget stored preferences, then apply and re-persist the reset values.
    pub fn reset<D: Document<Node = N>>(&self, doc: &D, store: &dyn PreferenceStore, prefs: Preferences<'_, N>) {
        store.remove(THEME_KEY);
        store.remove(FONT_KEY);
        store.remove(PALETTE_KEY);

        let values = &self.reset_values;
        prefs.theme.set_theme(doc, store, values.theme);
        prefs.font.set_font(doc, store, &values.font);
        prefs.palette.set_palette(doc, store, &values.palette);
        log::info!("settings: preferences reset");
    }
}
