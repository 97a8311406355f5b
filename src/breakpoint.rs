//! Viewport-width breakpoints: the uniform layout scale and the width-based
//! visibility of the optional panels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum width at which the nav bar links are shown and the footer lays
/// out in a single row.
pub const MEDIUM_MIN_WIDTH: u32 = 768;

/// Minimum width at which the notification panel is shown.
pub const LARGE_MIN_WIDTH: u32 = 1024;

/// Current width of the visible display area, in unscaled logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub width_pixels: u32,
}

impl ViewportState {
    pub fn new(width_pixels: u32) -> Self {
        Self { width_pixels }
    }

    pub fn scale(self) -> ScaleFactor {
        resolve(self.width_pixels)
    }
}

/// Uniform multiplier applied to the whole layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleFactor {
    /// 1.0
    Full,
    /// 0.9
    Large,
    /// 0.8
    Medium,
    /// 0.75
    Small,
    /// 0.5
    Compact,
}

impl ScaleFactor {
    pub const ALL: [ScaleFactor; 5] = [
        ScaleFactor::Full,
        ScaleFactor::Large,
        ScaleFactor::Medium,
        ScaleFactor::Small,
        ScaleFactor::Compact,
    ];

    pub const fn value(self) -> f32 {
        match self {
            ScaleFactor::Full => 1.0,
            ScaleFactor::Large => 0.9,
            ScaleFactor::Medium => 0.8,
            ScaleFactor::Small => 0.75,
            ScaleFactor::Compact => 0.5,
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A closed width range mapped to a scale. `None` bounds are open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointRule {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub scale: ScaleFactor,
}

impl BreakpointRule {
    const fn new(min: Option<u32>, max: Option<u32>, scale: ScaleFactor) -> Self {
        Self { min, max, scale }
    }

    pub fn matches(&self, width_pixels: u32) -> bool {
        self.min.is_none_or(|min| width_pixels >= min)
            && self.max.is_none_or(|max| width_pixels <= max)
    }
}

impl fmt::Display for BreakpointRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min}..={max}"),
            (Some(min), None) => write!(f, "{min}.."),
            (None, Some(max)) => write!(f, "..={max}"),
            (None, None) => write!(f, ".."),
        }
    }
}

/// Scale rules in evaluation order. The first matching rule wins, so the
/// `..=600` rule only ever applies below 600.
pub const RULES: [BreakpointRule; 4] = [
    BreakpointRule::new(Some(992), Some(1600), ScaleFactor::Large),
    BreakpointRule::new(Some(700), Some(767), ScaleFactor::Medium),
    BreakpointRule::new(Some(600), Some(699), ScaleFactor::Small),
    BreakpointRule::new(None, Some(600), ScaleFactor::Compact),
];

/// Scale used when no rule matches (768..=991 and above 1600).
pub const FALLBACK_SCALE: ScaleFactor = ScaleFactor::Full;

/// Maps a viewport width to the layout scale.
pub fn resolve(width_pixels: u32) -> ScaleFactor {
    RULES
        .iter()
        .find(|rule| rule.matches(width_pixels))
        .map_or(FALLBACK_SCALE, |rule| rule.scale)
}

/// Which optional parts of the layout are shown at a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveVisibility {
    pub nav_links: bool,
    pub notifications: bool,
    pub footer_stacked: bool,
}

impl ResponsiveVisibility {
    pub fn for_width(width_pixels: u32) -> Self {
        Self {
            nav_links: width_pixels >= MEDIUM_MIN_WIDTH,
            notifications: width_pixels >= LARGE_MIN_WIDTH,
            footer_stacked: width_pixels < MEDIUM_MIN_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_of(width: u32) -> f32 {
        resolve(width).value()
    }

    #[test]
    fn large_desktop_range_scales_to_nine_tenths() {
        for width in 992..=1600 {
            assert_eq!(scale_of(width), 0.9, "width {width}");
        }
    }

    #[test]
    fn small_tablet_range_scales_to_eight_tenths() {
        for width in 700..=767 {
            assert_eq!(scale_of(width), 0.8, "width {width}");
        }
    }

    #[test]
    fn large_phone_range_scales_to_three_quarters() {
        for width in 600..700 {
            assert_eq!(scale_of(width), 0.75, "width {width}");
        }
    }

    #[test]
    fn narrow_widths_scale_to_half() {
        for width in 0..600 {
            assert_eq!(scale_of(width), 0.5, "width {width}");
        }
    }

    #[test]
    fn width_600_is_claimed_by_the_earlier_rule() {
        assert!(RULES[3].matches(600));
        assert_eq!(resolve(600), ScaleFactor::Small);
    }

    #[test]
    fn uncovered_gaps_fall_back_to_full_scale() {
        for width in 768..=991 {
            assert_eq!(resolve(width), ScaleFactor::Full, "width {width}");
        }
        for width in [1601, 1920, 2560, 3840, u32::MAX] {
            assert_eq!(resolve(width), ScaleFactor::Full, "width {width}");
        }
    }

    #[test]
    fn result_is_always_one_of_the_known_factors() {
        for width in 0..=4000 {
            assert!(ScaleFactor::ALL.contains(&resolve(width)));
        }
    }

    #[test]
    fn resolving_twice_gives_the_same_result() {
        for width in [0, 599, 600, 699, 700, 767, 768, 991, 992, 1600, 1601] {
            assert_eq!(resolve(width), resolve(width));
        }
    }

    #[test]
    fn concrete_widths() {
        assert_eq!(scale_of(320), 0.5);
        assert_eq!(scale_of(650), 0.75);
        assert_eq!(scale_of(750), 0.8);
        assert_eq!(scale_of(900), 1.0);
        assert_eq!(scale_of(1200), 0.9);
        assert_eq!(scale_of(1920), 1.0);
    }

    #[test]
    fn viewport_state_delegates_to_resolve() {
        assert_eq!(ViewportState::new(1200).scale(), ScaleFactor::Large);
        assert_eq!(ViewportState::new(0).scale(), ScaleFactor::Compact);
    }

    #[test]
    fn rules_display_as_ranges() {
        let rendered: Vec<String> = RULES.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["992..=1600", "700..=767", "600..=699", "..=600"]);
        assert_eq!(ScaleFactor::Small.to_string(), "0.75");
    }

    #[test]
    fn visibility_thresholds() {
        let narrow = ResponsiveVisibility::for_width(767);
        assert!(!narrow.nav_links);
        assert!(narrow.footer_stacked);
        assert!(!narrow.notifications);

        let medium = ResponsiveVisibility::for_width(768);
        assert!(medium.nav_links);
        assert!(!medium.footer_stacked);
        assert!(!medium.notifications);

        assert!(!ResponsiveVisibility::for_width(1023).notifications);
        assert!(ResponsiveVisibility::for_width(1024).notifications);
    }
}
