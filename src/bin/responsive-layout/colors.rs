//! Color conversion and the colors that do not change with the theme.

use eframe::egui::{Color32, Shadow};
use responsive_layout::Rgb;

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

// Nav bar and footer text sits on the primary color in both themes
pub const BAR_TEXT: Color32 = Color32::WHITE;
pub const NAV_LINK_HOVER: Color32 = Color32::from_rgb(191, 219, 254);
pub const FOOTER_LINK_HOVER: Color32 = Color32::from_rgb(209, 213, 219);

// Hovered side menu entries
pub const MENU_HOVER_LIGHT: Color32 = Color32::from_rgb(229, 231, 235);
pub const MENU_HOVER_DARK: Color32 = Color32::from_rgb(75, 85, 99);

pub const CARD_SHADOW: Shadow = Shadow {
    offset: [0, 1],
    blur: 3,
    spread: 0,
    color: Color32::from_rgba_premultiplied(0, 0, 0, 40),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_channels_in_order() {
        assert_eq!(color(Rgb(37, 99, 235)), Color32::from_rgb(37, 99, 235));
    }
}
