/// Height of the navigation bar in points.
pub const NAVBAR_HEIGHT: f32 = 64.0;

/// Width of the side menu when expanded.
pub const SIDE_MENU_WIDTH: f32 = 256.0;

/// Width of the notification panel.
pub const NOTIFICATIONS_WIDTH: f32 = 256.0;

/// Padding inside the side menu and notification panel.
pub const PANEL_PADDING: i8 = 16;

/// Padding around and inside the content card and footer.
pub const CONTENT_PADDING: i8 = 24;

/// Corner radius of the content card.
pub const CARD_RADIUS: u8 = 8;

/// Corner radius of notification cards and menu entries.
pub const SMALL_RADIUS: u8 = 4;

/// Window size at startup unless overridden on the command line.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
