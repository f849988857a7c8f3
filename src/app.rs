//! Page bootstrap and event routing.
//!
//! ARCHITECTURE
//! ============
//! [`App`] owns the document backend, the preference store and every
//! controller. [`App::init`] runs once on page-ready; afterwards the backend
//! feeds bound DOM events to [`App::dispatch`], which runs each handler to
//! completion.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::components::contact_form::ContactForm;
use crate::components::font::FontController;
use crate::components::palette::PaletteController;
use crate::components::portfolio_filter::PortfolioFilter;
use crate::components::scroll_top::ScrollTop;
use crate::components::settings::{Preferences, SettingsPanel};
use crate::components::theme::ThemeController;
use crate::config::UiConfig;
use crate::dom::{Document, UiEvent};
use crate::state::prefs::PALETTE_KEY;
use crate::util::storage::PreferenceStore;

pub struct App<D: Document> {
    doc: D,
    store: Box<dyn PreferenceStore>,
    config: UiConfig,
    theme: ThemeController,
    font: FontController<D::Node>,
    palette: PaletteController,
    settings: SettingsPanel<D::Node>,
    scroll_top: Option<ScrollTop<D::Node>>,
    filter: Option<PortfolioFilter<D::Node>>,
    form: Option<ContactForm<D::Node>>,
}

impl<D: Document> App<D> {
    pub fn new(doc: D, store: Box<dyn PreferenceStore>, config: UiConfig) -> Self {
        Self {
            theme: ThemeController::new(&config),
            font: FontController::new(&config),
            palette: PaletteController::new(&config),
            settings: SettingsPanel::new(&config),
            scroll_top: None,
            filter: None,
            form: None,
            doc,
            store,
            config,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn font(&self) -> &FontController<D::Node> {
        &self.font
    }

    pub fn palette(&self) -> &PaletteController {
        &self.palette
    }

    /// Apply stored preferences and bind every widget.
    ///
    /// The palette goes first so the color custom properties exist before
    /// anything else renders; the remaining order is fixed but otherwise
    /// arbitrary.
    pub fn init(&mut self) {
        let store = self.store.as_ref();
        let stored = store.load_non_empty(PALETTE_KEY);
        let palette = stored.as_deref().unwrap_or(&self.config.defaults.palette);
        if !self.palette.set_palette(&self.doc, store, palette) {
            log::warn!("bootstrap: palette {palette:?} is not configured");
        }

        self.theme.init(&self.doc, store);
        self.font.init(&self.doc, store);
        self.settings.init(&self.doc);
        self.scroll_top = ScrollTop::init(&self.doc, &self.config);
        self.filter = Some(PortfolioFilter::init(&self.doc, &self.config));
        self.form = ContactForm::init(&self.doc, &self.config);

        log::info!(
            "bootstrap: theme={} font={} palette={}",
            self.theme.current().as_str(),
            self.font.current().unwrap_or("-"),
            self.palette.current().unwrap_or("-"),
        );
    }

    /// Run the handler bound to `event`.
    pub fn dispatch(&mut self, event: UiEvent) {
        let doc = &self.doc;
        let store = self.store.as_ref();
        match event {
            UiEvent::ToggleTheme => {
                self.theme.toggle(doc, store);
            }
            UiEvent::PickFont(index) => self.font.pick(doc, store, index),
            UiEvent::PickPalette(index) => self.palette.pick(doc, store, index),
            UiEvent::ToggleSettings => self.settings.toggle(doc),
            UiEvent::CloseSettings => self.settings.close(doc),
            UiEvent::ResetSettings => {
                let prefs = Preferences { theme: &mut self.theme, font: &mut self.font, palette: &mut self.palette };
                self.settings.reset(doc, store, prefs);
            }
            UiEvent::Scrolled => {
                if let Some(scroll_top) = &self.scroll_top {
                    scroll_top.sync(doc);
                }
            }
            UiEvent::ScrollToTop => {
                if let Some(scroll_top) = &self.scroll_top {
                    scroll_top.scroll_to_top(doc);
                }
            }
            UiEvent::Filter(index) => {
                if let Some(filter) = &self.filter {
                    filter.pick(doc, index);
                }
            }
            UiEvent::SubmitForm => {
                if let Some(form) = &self.form {
                    form.submit(doc);
                }
            }
        }
    }
}
