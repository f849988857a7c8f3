#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::Deserialize;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key for the font preference.
pub const FONT_KEY: &str = "font";
/// Storage key for the palette preference.
pub const PALETTE_KEY: &str = "palette";

/// Light or dark page mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Decode a stored value. Anything other than `"dark"` reads as light.
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A named color triple applied as the page accent colors.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub name: String,
    /// Primary, secondary, accent.
    pub colors: [String; 3],
}

impl Palette {
    pub fn new(name: &str, colors: [&str; 3]) -> Self {
        Self { name: name.to_string(), colors: colors.map(str::to_string) }
    }

    /// CSS background for this palette's swatch.
    pub fn gradient(&self) -> String {
        format!("linear-gradient(135deg, {})", self.colors.join(","))
    }
}

/// The built-in palette table, in swatch order.
pub fn builtin_palettes() -> Vec<Palette> {
    vec![
        Palette::new("indigo", ["#6366f1", "#8b5cf6", "#ec4899"]),
        Palette::new("ocean", ["#2563eb", "#0ea5e9", "#38bdf8"]),
        Palette::new("forest", ["#10b981", "#22c55e", "#14b8a6"]),
        Palette::new("sunset", ["#f97316", "#f59e0b", "#f43f5e"]),
        Palette::new("candy", ["#ec4899", "#a855f7", "#f472b6"]),
    ]
}
