//! Layout state and the reducer that advances it.
//!
//! Every UI interaction is turned into a [`LayoutEvent`] and folded into a new
//! [`LayoutState`] by [`reduce`]. Rendering only ever reads the state.

use crate::breakpoint::{ResponsiveVisibility, ScaleFactor, ViewportState};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub menu_open: bool,
    pub theme: ThemeMode,
    /// Id of the selected side menu entry
    pub active_section: String,
    /// `None` until the first resize event
    pub viewport: Option<ViewportState>,
}

impl LayoutState {
    /// State at mount: menu open, light theme, viewport not yet measured.
    pub fn new(default_section: impl Into<String>) -> Self {
        Self {
            menu_open: true,
            theme: ThemeMode::Light,
            active_section: default_section.into(),
            viewport: None,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme == ThemeMode::Dark
    }

    /// Layout scale for the measured width; unscaled before the first resize.
    pub fn scale(&self) -> ScaleFactor {
        self.viewport.map_or(ScaleFactor::Full, ViewportState::scale)
    }

    pub fn width_pixels(&self) -> Option<u32> {
        self.viewport.map(|viewport| viewport.width_pixels)
    }

    /// Everything optional is hidden until the viewport has been measured.
    pub fn visibility(&self) -> ResponsiveVisibility {
        ResponsiveVisibility::for_width(self.width_pixels().unwrap_or(0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    ToggleMenu,
    ToggleTheme,
    SelectSection(String),
    Resized { width_pixels: u32 },
}

/// Returns the state that results from applying `event` to `state`.
pub fn reduce(state: LayoutState, event: LayoutEvent) -> LayoutState {
    match event {
        LayoutEvent::ToggleMenu => LayoutState {
            menu_open: !state.menu_open,
            ..state
        },
        LayoutEvent::ToggleTheme => LayoutState {
            theme: state.theme.toggled(),
            ..state
        },
        LayoutEvent::SelectSection(active_section) => LayoutState {
            active_section,
            ..state
        },
        LayoutEvent::Resized { width_pixels } => LayoutState {
            viewport: Some(ViewportState::new(width_pixels)),
            ..state
        },
    }
}
