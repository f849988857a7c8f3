//! Body font selection.

#[cfg(test)]
#[path = "font_test.rs"]
mod font_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};
use crate::state::prefs::FONT_KEY;
use crate::util::storage::PreferenceStore;

/// Applies one `font-<name>` marker class to `<body>`.
///
/// Names are not validated: an unknown font gets a class no stylesheet
/// rule matches, which leaves the page on its inherited font.
#[derive(Clone, Debug)]
pub struct FontController<N> {
    option_selector: String,
    class_prefix: String,
    known: Vec<String>,
    default_font: String,
    options: Vec<N>,
    current: Option<String>,
}

impl<N: Clone> FontController<N> {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            option_selector: config.elements.font_option.clone(),
            class_prefix: config.classes.font_prefix.clone(),
            known: config.fonts.clone(),
            default_font: config.defaults.font.clone(),
            options: Vec::new(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn init<D: Document<Node = N>>(&mut self, doc: &D, store: &dyn PreferenceStore) {
        let font = store.load_non_empty(FONT_KEY).unwrap_or_else(|| self.default_font.clone());
        self.set_font(doc, store, &font);

        self.options = doc.query_all(&self.option_selector);
        for (index, option) in self.options.iter().enumerate() {
            doc.listen(option, EventKind::Click, UiEvent::PickFont(index));
        }
    }

    pub fn set_font<D: Document<Node = N>>(&mut self, doc: &D, store: &dyn PreferenceStore, name: &str) {
        if let Some(body) = doc.body() {
            for known in &self.known {
                doc.set_class(&body, &self.class_name(known), false);
            }
            if let Some(previous) = &self.current {
                doc.set_class(&body, &self.class_name(previous), false);
            }
            doc.set_class(&body, &self.class_name(name), true);
        }
        store.save(FONT_KEY, name);
        self.current = Some(name.to_string());
    }

    /// Handle a click on the `index`th font option.
    pub fn pick<D: Document<Node = N>>(&mut self, doc: &D, store: &dyn PreferenceStore, index: usize) {
        let Some(option) = self.options.get(index) else {
            return;
        };
        match doc.data(option, "font") {
            Some(name) => self.set_font(doc, store, &name),
            None => log::debug!("font: option {index} has no data-font"),
        }
    }

    fn class_name(&self, font: &str) -> String {
        format!("{}{font}", self.class_prefix)
    }
}
