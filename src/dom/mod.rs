//! DOM access seam.
//!
//! ARCHITECTURE
//! ============
//! Controllers never touch `web-sys` directly. They talk to a [`Document`],
//! which names every page capability they need, and register interest in
//! events as [`UiEvent`] values. The backend owns the actual listeners and
//! hands fired events back to [`crate::app::App::dispatch`].
//!
//! Backends:
//! - [`web::WebDocument`] (feature `hydrate`): the live browser page.
//! - `headless::HeadlessDocument` (tests only): an in-memory element tree.

#[cfg(test)]
pub mod headless;
#[cfg(feature = "hydrate")]
pub mod web;

/// DOM event types the controllers listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
    /// Form submission. Backends always suppress the default navigation.
    Submit,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Scroll => "scroll",
            Self::Submit => "submit",
        }
    }
}

/// Controller-level action a bound DOM event maps to.
///
/// Indexed variants refer to the control lists collected at init (font
/// options, filter triggers) or to the palette table, so the action
/// parameter is read at click time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ToggleTheme,
    PickFont(usize),
    PickPalette(usize),
    ToggleSettings,
    CloseSettings,
    ResetSettings,
    Scrolled,
    ScrollToTop,
    Filter(usize),
    SubmitForm,
}

/// Everything the controllers need from the page.
///
/// Mutating methods take `&self`: the browser DOM is shared mutable state
/// and backends use interior mutability the same way.
pub trait Document {
    type Node: Clone;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Value of the `data-<key>` attribute.
    fn data(&self, node: &Self::Node, key: &str) -> Option<String>;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);
    fn toggle_class(&self, node: &Self::Node, class: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Remove every child of `node`, along with listeners bound to them.
    fn clear_children(&self, node: &Self::Node);
    /// Append a `<button>` with the given inline style to `parent`.
    fn append_button(&self, parent: &Self::Node, style: &[(&str, &str)]) -> Option<Self::Node>;
    fn reset_form(&self, form: &Self::Node);

    /// Whether `(prefers-color-scheme: dark)` matches.
    fn prefers_dark(&self) -> bool;
    fn scroll_y(&self) -> f64;
    /// Start a smooth scroll to the top of the page.
    fn scroll_to_top(&self);
    fn alert(&self, message: &str);

    /// Deliver `event` to the app whenever `kind` fires on `node`.
    fn listen(&self, node: &Self::Node, kind: EventKind, event: UiEvent);
    /// Deliver `event` to the app whenever `kind` fires on the window.
    fn listen_window(&self, kind: EventKind, event: UiEvent);
}
