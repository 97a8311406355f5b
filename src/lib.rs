//! Layout model for a responsive single-page shell: breakpoint scaling, theme
//! palettes, layout content and the state reducer driving the UI.

pub mod assets;
pub mod breakpoint;
pub mod config;
pub mod state;
pub mod theme;

pub use breakpoint::{ResponsiveVisibility, ScaleFactor, ViewportState, resolve};
pub use config::{ConfigError, LayoutConfig, Link, MenuItem, Notification};
pub use state::{LayoutEvent, LayoutState, reduce};
pub use theme::{Palette, Rgb, ThemeMode, Themes};
