//! Viewport resize subscription.

use eframe::egui;
use responsive_layout::LayoutEvent;

/// Turns the viewport width seen each frame into `Resized` events.
///
/// The first observed width is always reported, later ones only when they
/// differ from the previous report. Dropping the subscription stops the
/// reports.
#[derive(Debug, Default)]
pub struct ResizeSubscription {
    last_width: Option<u32>,
}

impl ResizeSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, ctx: &egui::Context) -> Option<LayoutEvent> {
        let width_pixels = viewport_width(ctx)?;
        self.observe(width_pixels)
    }

    fn observe(&mut self, width_pixels: u32) -> Option<LayoutEvent> {
        if self.last_width == Some(width_pixels) {
            return None;
        }

        log::debug!(
            "Viewport width {} -> {width_pixels}",
            self.last_width
                .map_or_else(|| "none".to_owned(), |w| w.to_string())
        );
        self.last_width = Some(width_pixels);
        Some(LayoutEvent::Resized { width_pixels })
    }
}

/// Width of the window's client area in unscaled logical pixels.
///
/// Derived from the physical size so the zoom factor applied for the layout
/// scale does not feed back into the measurement.
fn viewport_width(ctx: &egui::Context) -> Option<u32> {
    ctx.input(|i| {
        let viewport = i.viewport();
        let inner_rect = viewport.inner_rect?;
        let native_ppp = viewport.native_pixels_per_point.unwrap_or(1.0);
        Some(logical_width(inner_rect.width(), i.pixels_per_point(), native_ppp))
    })
}

/// Converts a width in egui points to logical pixels before zoom.
///
/// `pixels_per_point` already includes the zoom factor, `native_ppp` does not.
fn logical_width(points: f32, pixels_per_point: f32, native_ppp: f32) -> u32 {
    let width = points * pixels_per_point / native_ppp;
    width.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_width_is_always_reported() {
        let mut subscription = ResizeSubscription::new();
        assert_eq!(
            subscription.observe(0),
            Some(LayoutEvent::Resized { width_pixels: 0 })
        );
    }

    #[test]
    fn unchanged_width_is_not_reported_again() {
        let mut subscription = ResizeSubscription::new();
        assert!(subscription.observe(1280).is_some());
        assert!(subscription.observe(1280).is_none());
        assert_eq!(
            subscription.observe(640),
            Some(LayoutEvent::Resized { width_pixels: 640 })
        );
        assert!(subscription.observe(640).is_none());
    }

    #[test]
    fn measured_width_ignores_zoom() {
        // A 1280 px wide window shows 1280 / zoom points
        for zoom in [1.0, 0.9, 0.8, 0.75, 0.5] {
            assert_eq!(logical_width(1280.0 / zoom, zoom, 1.0), 1280, "zoom {zoom}");
        }
    }

    #[test]
    fn measured_width_ignores_display_scaling() {
        // 2x display at zoom 0.5: 1280 points span 1280 physical px, 640 logical
        assert_eq!(logical_width(1280.0, 1.0, 2.0), 640);
        assert_eq!(logical_width(640.0 / 0.9, 2.0 * 0.9, 2.0), 640);
    }

    #[test]
    fn measured_width_is_rounded_and_clamped() {
        assert_eq!(logical_width(767.6, 1.0, 1.0), 768);
        assert_eq!(logical_width(0.0, 1.0, 1.0), 0);
        assert_eq!(logical_width(-12.0, 1.0, 1.0), 0);
    }
}
