//! Portfolio category filter.
//!
//! Triggers and cards are collected once at init; cards added later are
//! not filtered. Matching is a plain substring test on the card's
//! `data-category`, so a card tagged `"mobile, web"` matches both filters
//! (and `"webapp"` also matches `"web"`).

#[cfg(test)]
#[path = "portfolio_filter_test.rs"]
mod portfolio_filter_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};

/// Filter value that shows every card.
pub const SHOW_ALL: &str = "all";

#[derive(Clone, Debug)]
pub struct PortfolioFilter<N> {
    hidden_class: String,
    triggers: Vec<N>,
    cards: Vec<N>,
}

impl<N: Clone> PortfolioFilter<N> {
    pub fn init<D: Document<Node = N>>(doc: &D, config: &UiConfig) -> Self {
        let triggers = doc.query_all(&config.elements.filter_trigger);
        let cards = doc.query_all(&config.elements.portfolio_card);
        for (index, trigger) in triggers.iter().enumerate() {
            doc.listen(trigger, EventKind::Click, UiEvent::Filter(index));
        }
        Self { hidden_class: config.classes.hidden.clone(), triggers, cards }
    }

    /// Handle a click on the `index`th trigger.
    pub fn pick<D: Document<Node = N>>(&self, doc: &D, index: usize) {
        let Some(trigger) = self.triggers.get(index) else {
            return;
        };
        match doc.data(trigger, "filter") {
            Some(category) => self.apply(doc, &category),
            None => log::debug!("filter: trigger {index} has no data-filter"),
        }
    }

    /// Hide every card whose category does not contain `filter`.
    pub fn apply<D: Document<Node = N>>(&self, doc: &D, filter: &str) {
        for card in &self.cards {
            let category = doc.data(card, "category").unwrap_or_default();
            doc.set_class(card, &self.hidden_class, !card_matches(&category, filter));
        }
    }
}

pub fn card_matches(category: &str, filter: &str) -> bool {
    filter == SHOW_ALL || category.contains(filter)
}
