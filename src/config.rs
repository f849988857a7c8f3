//! Page configuration: element identifiers, marker classes, defaults and
//! the palette table.
//!
//! Every field has a default matching the shipped page markup, so an empty
//! JSON object is a valid configuration. The browser backend reads an
//! optional override from `<script type="application/json"
//! id="portfolio-ui-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;
use crate::state::prefs::{Palette, Theme, builtin_palettes};

/// Element id of the optional configuration override document.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-ui-config";

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 400.0;
pub const DEFAULT_FORM_ACK: &str = "تم إرسال الرسالة بنجاح ✅";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub elements: ElementIds,
    pub classes: ClassNames,
    pub scroll_threshold: f64,
    pub defaults: Defaults,
    pub reset: ResetValues,
    /// Fonts whose marker classes are cleared before a new one is applied.
    pub fonts: Vec<String>,
    pub palettes: Vec<Palette>,
    pub form_ack: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            classes: ClassNames::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            defaults: Defaults::default(),
            reset: ResetValues::default(),
            fonts: vec!["tajawal".into(), "cairo".into(), "alexandria".into()],
            palettes: builtin_palettes(),
            form_ack: DEFAULT_FORM_ACK.into(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }
}

/// Selectors and ids the controllers bind to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub theme_toggle: String,
    pub font_option: String,
    pub palette_grid: String,
    pub settings_sidebar: String,
    pub settings_open: String,
    pub settings_close: String,
    pub settings_reset: String,
    pub scroll_top: String,
    pub filter_trigger: String,
    pub portfolio_card: String,
    pub contact_form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "theme-toggle-button".into(),
            font_option: ".font-option".into(),
            palette_grid: "theme-colors-grid".into(),
            settings_sidebar: "settings-sidebar".into(),
            settings_open: "settings-toggle".into(),
            settings_close: "close-settings".into(),
            settings_reset: "reset-settings".into(),
            scroll_top: "scroll-to-top".into(),
            filter_trigger: ".portfolio-filter".into(),
            portfolio_card: ".portfolio-item".into(),
            contact_form: "form".into(),
        }
    }
}

/// Marker classes and CSS custom properties.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub dark: String,
    pub font_prefix: String,
    pub hidden: String,
    pub panel_closed: String,
    /// Primary, secondary, accent custom properties.
    pub color_vars: [String; 3],
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            dark: "dark".into(),
            font_prefix: "font-".into(),
            hidden: "hidden".into(),
            panel_closed: "translate-x-full".into(),
            color_vars: ["--color-primary".into(), "--color-secondary".into(), "--color-accent".into()],
        }
    }
}

/// Values used when nothing is stored. The theme has no fixed default: it
/// follows the system color scheme.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub font: String,
    pub palette: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self { font: "tajawal".into(), palette: "indigo".into() }
    }
}

/// Values applied by the settings panel's reset action.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResetValues {
    pub theme: Theme,
    pub font: String,
    pub palette: String,
}

impl Default for ResetValues {
    fn default() -> Self {
        Self { theme: Theme::Dark, font: "tajawal".into(), palette: "indigo".into() }
    }
}
