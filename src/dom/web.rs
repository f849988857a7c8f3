//! Live browser [`Document`] backed by `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listeners are `gloo-events` handles owned by the backend. Each one
//! forwards its [`UiEvent`] to the dispatcher installed by [`boot`], which
//! borrows the shared [`App`] and runs the handler.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window};

use super::{Document, EventKind, UiEvent};
use crate::app::App;
use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::UiError;
use crate::util::storage::{LocalStore, MemoryStore, PreferenceStore};

type Dispatch = Rc<dyn Fn(UiEvent)>;

struct NodeListener {
    node: Element,
    _listener: EventListener,
}

pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    dispatch: Rc<RefCell<Option<Dispatch>>>,
    listeners: RefCell<Vec<NodeListener>>,
    window_listeners: RefCell<Vec<EventListener>>,
    retired: RefCell<Vec<NodeListener>>,
}

impl WebDocument {
    pub fn new() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::MissingWindow)?;
        let document = window.document().ok_or(UiError::MissingWindow)?;
        Ok(Self {
            window,
            document,
            dispatch: Rc::new(RefCell::new(None)),
            listeners: RefCell::new(Vec::new()),
            window_listeners: RefCell::new(Vec::new()),
            retired: RefCell::new(Vec::new()),
        })
    }

    pub fn set_dispatch(&self, dispatch: Dispatch) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    /// Page configuration from the optional JSON override element.
    pub fn load_config(&self) -> UiConfig {
        let Some(raw) = self.document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return UiConfig::default();
        };
        match UiConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("bootstrap: {err}; using defaults");
                UiConfig::default()
            }
        }
    }

    fn listener(&self, target: &EventTarget, kind: EventKind, event: UiEvent) -> EventListener {
        let dispatch = Rc::clone(&self.dispatch);
        let callback = move |e: &web_sys::Event| {
            if kind == EventKind::Submit {
                e.prevent_default();
            }
            let handler = dispatch.borrow().clone();
            if let Some(handler) = handler {
                handler(event);
            }
        };
        if kind == EventKind::Submit {
            EventListener::new_with_options(target, kind.name(), EventListenerOptions::enable_prevent_default(), callback)
        } else {
            EventListener::new(target, kind.name(), callback)
        }
    }
}

fn warn_on_err(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what}: {}", UiError::from(err));
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("query {selector:?}: {}", UiError::from(err));
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("query {selector:?}: {}", UiError::from(err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn data(&self, node: &Element, key: &str) -> Option<String> {
        node.get_attribute(&format!("data-{key}"))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, on: bool) {
        if let Err(err) = node.class_list().toggle_with_force(class, on) {
            log::warn!("class {class:?}: {}", UiError::from(err));
        }
    }

    fn toggle_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().toggle(class) {
            log::warn!("class {class:?}: {}", UiError::from(err));
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            warn_on_err(el.style().set_property(property, value), property);
        }
    }

    fn clear_children(&self, node: &Element) {
        let removed: Vec<NodeListener> = {
            let mut listeners = self.listeners.borrow_mut();
            let (removed, kept) = listeners.drain(..).partition(|l: &NodeListener| {
                let child: &web_sys::Node = &l.node;
                l.node != *node && node.contains(Some(child))
            });
            *listeners = kept;
            removed
        };
        // A removed child's listener may be the one running right now; keep
        // it alive until the next rebuild.
        *self.retired.borrow_mut() = removed;
        node.set_inner_html("");
    }

    fn append_button(&self, parent: &Element, style: &[(&str, &str)]) -> Option<Element> {
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(err) => {
                log::warn!("create button: {}", UiError::from(err));
                return None;
            }
        };
        if let Some(el) = button.dyn_ref::<HtmlElement>() {
            let declaration = el.style();
            for (property, value) in style {
                warn_on_err(declaration.set_property(property, value), property);
            }
        }
        if let Err(err) = parent.append_child(&button) {
            log::warn!("append button: {}", UiError::from(err));
            return None;
        }
        Some(button)
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        warn_on_err(self.window.alert_with_message(message), "alert");
    }

    fn listen(&self, node: &Element, kind: EventKind, event: UiEvent) {
        let listener = self.listener(node, kind, event);
        self.listeners.borrow_mut().push(NodeListener { node: node.clone(), _listener: listener });
    }

    fn listen_window(&self, kind: EventKind, event: UiEvent) {
        let listener = self.listener(&self.window, kind, event);
        self.window_listeners.borrow_mut().push(listener);
    }
}

/// Bootstrap now if the DOM is already parsed, otherwise on
/// `DOMContentLoaded`.
pub fn boot_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("bootstrap: {}", UiError::MissingWindow);
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

/// Build the app over the live page and run its init sequence.
pub fn boot() {
    let doc = match WebDocument::new() {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("bootstrap: {err}");
            return;
        }
    };
    let config = doc.load_config();
    let store: Box<dyn PreferenceStore> = match LocalStore::new() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("bootstrap: localStorage unavailable, preferences will not persist");
            Box::new(MemoryStore::default())
        }
    };

    let app = Rc::new(RefCell::new(App::new(doc, store, config)));
    // The dispatcher holds the app for the lifetime of the page.
    let handle = Rc::clone(&app);
    let dispatch: Dispatch = Rc::new(move |event: UiEvent| match handle.try_borrow_mut() {
        Ok(mut app) => app.dispatch(event),
        Err(_) => log::warn!("dispatch: dropping re-entrant {event:?}"),
    });
    app.borrow().document().set_dispatch(dispatch);
    app.borrow_mut().init();
}
