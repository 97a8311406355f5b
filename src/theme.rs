//! Light and dark color palettes.

use serde::{Deserialize, Serialize};

/// An opaque sRGB color, written as `(r, g, b)` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Nav bar and footer fill
    pub primary: Rgb,
    /// Side menu and notification panel fill
    pub secondary: Rgb,
    /// Body text
    pub text: Rgb,
    /// Hovered nav bar buttons
    pub hover: Rgb,
    /// Page background
    pub background: Rgb,
    /// Content card and notification card fill
    pub surface: Rgb,
    /// Active menu entry
    pub selected: Rgb,
    /// Secondary text such as timestamps
    pub muted: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: Rgb(37, 99, 235),
        secondary: Rgb(243, 244, 246),
        text: Rgb(31, 41, 55),
        hover: Rgb(29, 78, 216),
        background: Rgb(255, 255, 255),
        surface: Rgb(255, 255, 255),
        selected: Rgb(219, 234, 254),
        muted: Rgb(107, 114, 128),
    };

    pub const DARK: Palette = Palette {
        primary: Rgb(31, 41, 55),
        secondary: Rgb(55, 65, 81),
        text: Rgb(255, 255, 255),
        hover: Rgb(75, 85, 99),
        background: Rgb(17, 24, 39),
        surface: Rgb(31, 41, 55),
        selected: Rgb(75, 85, 99),
        muted: Rgb(107, 114, 128),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Themes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Themes {
    fn default() -> Self {
        Self {
            light: Palette::LIGHT,
            dark: Palette::DARK,
        }
    }
}

impl Themes {
    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
