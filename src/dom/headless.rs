//! In-memory [`Document`] backend.
//!
//! Models just enough of a page for the controllers: a tree of elements
//! with attributes, classes and inline style, a window scroll offset, and a
//! listener table. Events are fired explicitly with [`HeadlessDocument::fire`],
//! which returns the [`UiEvent`]s the caller should dispatch.
//!
//! Selectors are limited to `#id`, `.class` and bare tag names.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Document, EventKind, UiEvent};

/// Handle to an element in a [`HeadlessDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

#[derive(Debug, Default)]
struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Node(NodeId),
    Window,
}

#[derive(Debug)]
struct Listener {
    target: Target,
    kind: EventKind,
    event: UiEvent,
}

#[derive(Debug)]
pub struct HeadlessDocument {
    nodes: RefCell<Vec<Element>>,
    listeners: RefCell<Vec<Listener>>,
    prefers_dark: Cell<bool>,
    scroll_y: Cell<f64>,
    scroll_requests: Cell<usize>,
    navigations: Cell<usize>,
    alerts: RefCell<Vec<String>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    /// An empty page: `<html>` containing an empty `<body>`.
    pub fn new() -> Self {
        let html = Element { tag: "html".into(), children: vec![BODY], ..Element::default() };
        let body = Element { tag: "body".into(), parent: Some(ROOT), ..Element::default() };
        Self {
            nodes: RefCell::new(vec![html, body]),
            listeners: RefCell::new(Vec::new()),
            prefers_dark: Cell::new(false),
            scroll_y: Cell::new(0.0),
            scroll_requests: Cell::new(0),
            navigations: Cell::new(0),
            alerts: RefCell::new(Vec::new()),
        }
    }

    /// Append a `<tag>` element to `parent`. A `class` attribute is split on
    /// whitespace into the class list; everything else is stored verbatim.
    pub fn append(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut element = Element { tag: tag.to_string(), parent: Some(parent), ..Element::default() };
        for (name, value) in attrs {
            if *name == "class" {
                element.classes.extend(value.split_whitespace().map(str::to_string));
            } else {
                element.attrs.insert((*name).to_string(), (*value).to_string());
            }
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(element);
        nodes[parent.0].children.push(id);
        id
    }

    // =============================================================
    // Inspection
    // =============================================================

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].style.get(property).cloned()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn value(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get("value").cloned()
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].attrs.insert("value".into(), value.into());
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = node;
        loop {
            if current == ROOT {
                return true;
            }
            match nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests.get()
    }

    /// Submissions that went through to the browser's default action.
    pub fn navigations(&self) -> usize {
        self.navigations.get()
    }

    // =============================================================
    // Environment
    // =============================================================

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.scroll_y.set(offset);
    }

    /// Fire `kind` on `node` and return the events bound to it.
    ///
    /// A submit with no listener counts as a navigation.
    pub fn fire(&self, node: NodeId, kind: EventKind) -> Vec<UiEvent> {
        if !self.is_attached(node) {
            return Vec::new();
        }
        let events = self.bound(Target::Node(node), kind);
        if kind == EventKind::Submit && events.is_empty() {
            self.navigations.set(self.navigations.get() + 1);
        }
        events
    }

    pub fn fire_window(&self, kind: EventKind) -> Vec<UiEvent> {
        self.bound(Target::Window, kind)
    }

    fn bound(&self, target: Target, kind: EventKind) -> Vec<UiEvent> {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.event)
            .collect()
    }

    /// Attached elements in document order.
    fn walk(&self) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let nodes = self.nodes.borrow();
        let element = &nodes[node.0];
        if let Some(id) = selector.strip_prefix('#') {
            element.attrs.get("id").is_some_and(|v| v == id)
        } else if let Some(class) = selector.strip_prefix('.') {
            element.classes.iter().any(|c| c == class)
        } else {
            element.tag == selector
        }
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = nodes[node.0].children.clone();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().copied());
        }
        out
    }
}

impl Document for HeadlessDocument {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{id}"))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|n| self.matches(*n, selector))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.walk().into_iter().filter(|n| self.matches(*n, selector)).collect()
    }

    fn data(&self, node: &NodeId, key: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(&format!("data-{key}")).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, node: &NodeId, class: &str, on: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        let present = classes.iter().any(|c| c == class);
        if on && !present {
            classes.push(class.to_string());
        } else if !on {
            classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&self, node: &NodeId, class: &str) {
        let on = !self.has_class(node, class);
        self.set_class(node, class, on);
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].style.insert(property.to_string(), value.to_string());
    }

    fn clear_children(&self, node: &NodeId) {
        {
            let mut nodes = self.nodes.borrow_mut();
            let children = std::mem::take(&mut nodes[node.0].children);
            for child in children {
                nodes[child.0].parent = None;
            }
        }
        let detached: Vec<NodeId> = self
            .listeners
            .borrow()
            .iter()
            .filter_map(|l| match l.target {
                Target::Node(n) if !self.is_attached(n) => Some(n),
                _ => None,
            })
            .collect();
        self.listeners.borrow_mut().retain(|l| !matches!(l.target, Target::Node(n) if detached.contains(&n)));
    }

    fn append_button(&self, parent: &NodeId, style: &[(&str, &str)]) -> Option<NodeId> {
        let button = self.append(*parent, "button", &[]);
        for (property, value) in style {
            self.set_style(&button, property, value);
        }
        Some(button)
    }

    fn reset_form(&self, form: &NodeId) {
        let fields = self.descendants(*form);
        let mut nodes = self.nodes.borrow_mut();
        for field in fields {
            if let Some(value) = nodes[field.0].attrs.get_mut("value") {
                value.clear();
            }
        }
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        self.scroll_requests.set(self.scroll_requests.get() + 1);
        self.scroll_y.set(0.0);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn listen(&self, node: &NodeId, kind: EventKind, event: UiEvent) {
        self.listeners.borrow_mut().push(Listener { target: Target::Node(*node), kind, event });
    }

    fn listen_window(&self, kind: EventKind, event: UiEvent) {
        self.listeners.borrow_mut().push(Listener { target: Target::Window, kind, event });
    }
}
