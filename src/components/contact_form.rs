//! Contact form acknowledgement. Nothing is sent anywhere: submitting
//! shows a confirmation and clears the fields.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};

#[derive(Clone, Debug)]
pub struct ContactForm<N> {
    form: N,
    message: String,
}

impl<N: Clone> ContactForm<N> {
    /// Bind the page's first form. `None` when there is no form.
    pub fn init<D: Document<Node = N>>(doc: &D, config: &UiConfig) -> Option<Self> {
        let form = doc.query(&config.elements.contact_form)?;
        doc.listen(&form, EventKind::Submit, UiEvent::SubmitForm);
        Some(Self { form, message: config.form_ack.clone() })
    }

    pub fn submit<D: Document<Node = N>>(&self, doc: &D) {
        doc.alert(&self.message);
        doc.reset_form(&self.form);
    }
}
