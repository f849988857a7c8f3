//! Page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns one widget or preference: it binds its controls at
//! init, keeps its current value in memory, and mutates the page through
//! the [`crate::dom::Document`] seam. Only the settings panel reaches into
//! other controllers (reset).

pub mod contact_form;
pub mod font;
pub mod palette;
pub mod portfolio_filter;
pub mod scroll_top;
pub mod settings;
pub mod theme;
