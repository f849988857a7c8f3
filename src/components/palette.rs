//! Accent color palettes and the settings swatch grid.
//!
//! DESIGN
//! ======
//! The grid is rebuilt from scratch on every palette change. There are only
//! a handful of swatches, so reconstruction is simpler than patching the
//! active border in place.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::config::UiConfig;
use crate::dom::{Document, EventKind, UiEvent};
use crate::state::prefs::{PALETTE_KEY, Palette};
use crate::util::storage::PreferenceStore;

const SWATCH_SIZE: &str = "45px";
const ACTIVE_BORDER: &str = "3px solid var(--color-primary)";
const IDLE_BORDER: &str = "2px solid #ccc";

#[derive(Clone, Debug)]
pub struct PaletteController {
    grid_id: String,
    color_vars: [String; 3],
    palettes: Vec<Palette>,
    current: Option<String>,
}

impl PaletteController {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            grid_id: config.elements.palette_grid.clone(),
            color_vars: config.classes.color_vars.clone(),
            palettes: config.palettes.clone(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Apply the named palette. Unknown names change nothing.
    pub fn set_palette<D: Document>(&mut self, doc: &D, store: &dyn PreferenceStore, name: &str) -> bool {
        let Some(palette) = self.palettes.iter().find(|p| p.name == name) else {
            log::debug!("palette: ignoring unknown palette {name:?}");
            return false;
        };

        if let Some(root) = doc.root() {
            for (var, color) in self.color_vars.iter().zip(&palette.colors) {
                doc.set_style(&root, var, color);
            }
        }
        store.save(PALETTE_KEY, name);
        self.current = Some(name.to_string());
        self.draw_palette(doc, name);
        true
    }

    /// Handle a click on the swatch for the `index`th palette.
    pub fn pick<D: Document>(&mut self, doc: &D, store: &dyn PreferenceStore, index: usize) {
        if let Some(name) = self.palettes.get(index).map(|p| p.name.clone()) {
            self.set_palette(doc, store, &name);
        }
    }

    /// Rebuild the swatch grid, highlighting `active`.
    pub fn draw_palette<D: Document>(&self, doc: &D, active: &str) {
        let Some(grid) = doc.by_id(&self.grid_id) else {
            return;
        };
        doc.clear_children(&grid);

        for (index, palette) in self.palettes.iter().enumerate() {
            let background = palette.gradient();
            let border = if palette.name == active { ACTIVE_BORDER } else { IDLE_BORDER };
            let style = [
                ("width", SWATCH_SIZE),
                ("height", SWATCH_SIZE),
                ("border-radius", "50%"),
                ("background", background.as_str()),
                ("border", border),
            ];
            if let Some(swatch) = doc.append_button(&grid, &style) {
                doc.listen(&swatch, EventKind::Click, UiEvent::PickPalette(index));
            }
        }
    }
}
