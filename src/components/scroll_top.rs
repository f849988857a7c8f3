//! Floating "back to top" button.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};

/// Shows the button once the page is scrolled past `threshold`.
#[derive(Clone, Debug)]
pub struct ScrollTop<N> {
    button: N,
    hidden_class: String,
    threshold: f64,
}

impl<N: Clone> ScrollTop<N> {
    /// Bind the scroll and click listeners. Returns `None`, binding nothing,
    /// when the page has no button.
    pub fn init<D: Document<Node = N>>(doc: &D, config: &UiConfig) -> Option<Self> {
        let Some(button) = doc.by_id(&config.elements.scroll_top) else {
            log::debug!("scroll-top: no #{} on page", config.elements.scroll_top);
            return None;
        };

        doc.listen_window(EventKind::Scroll, UiEvent::Scrolled);
        doc.listen(&button, EventKind::Click, UiEvent::ScrollToTop);

        let controller = Self { button, hidden_class: config.classes.hidden.clone(), threshold: config.scroll_threshold };
        controller.sync(doc);
        Some(controller)
    }

    /// Recompute visibility from the current scroll offset.
    pub fn sync<D: Document<Node = N>>(&self, doc: &D) {
        let hidden = doc.scroll_y() < self.threshold;
        doc.set_class(&self.button, &self.hidden_class, hidden);
    }

    pub fn scroll_to_top<D: Document<Node = N>>(&self, doc: &D) {
        doc.scroll_to_top();
    }
}
