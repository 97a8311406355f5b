//! Files embedded from the `assets/` directory.

use rust_embed::RustEmbed;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Built-in layout configuration.
pub const LAYOUT_RON: &str = "layout.ron";
/// Dashboard banner image.
pub const BANNER_SVG: &str = "banner.svg";
/// Window icon.
pub const ICON_SVG: &str = "icon.svg";
