// SPDX-License-Identifier: MPL-2.0
//! Platform-driven presentation policy.
//!
//! The controls render differently depending on the device class they run
//! on: desktops get generous spacer-based layouts, circled glyphs and
//! keyboard shortcuts; headsets get a compact cluster with plain glyphs;
//! televisions keep the spacious layout but have no keyboard to bind.
//!
//! Rather than scattering target checks through the views, the differences
//! are collected into a [`PresentationPolicy`] looked up per [`Platform`].
//! The platform normally comes from the compile target and can be forced
//! through [`Config::platform`](crate::config::Config::platform).

// =============================================================================
// Platform
// =============================================================================

/// Device class the controls are presented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Desktop or laptop with a pointer and keyboard.
    #[default]
    Desktop,
    /// Television driven by a remote.
    Tv,
    /// Head-mounted display.
    Headset,
}

impl Platform {
    /// Platform implied by the compile target.
    ///
    /// Every target this crate currently builds for is a desktop; tv and
    /// headset renditions are opted into through configuration.
    #[must_use]
    pub fn current() -> Self {
        Platform::Desktop
    }

    /// Parses a platform name as used in the settings file.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Platform::Desktop),
            "tv" => Some(Platform::Tv),
            "headset" => Some(Platform::Headset),
            _ => None,
        }
    }

    /// Canonical name for the settings file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Tv => "tv",
            Platform::Headset => "headset",
        }
    }
}

// =============================================================================
// Policy
// =============================================================================

/// How the playback cluster arranges its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// Fill-width spacers between the buttons, spreading the cluster
    /// across its container.
    Spacered,
    /// Buttons sit next to each other with regular spacing.
    Compact,
}

/// Which rendition of the play/pause glyphs to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphVariant {
    /// Glyphs enclosed in a filled circle.
    Circled,
    /// Bare glyphs.
    Plain,
}

/// Presentation rules derived from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationPolicy {
    /// Playback-cluster layout.
    pub layout: LayoutStrategy,
    /// Play/pause glyph rendition.
    pub glyphs: GlyphVariant,
    /// Whether keyboard shortcuts (space, arrow keys) are bound.
    pub keyboard_shortcuts: bool,
}

impl PresentationPolicy {
    /// Policy table, one row per platform.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Desktop => Self {
                layout: LayoutStrategy::Spacered,
                glyphs: GlyphVariant::Circled,
                keyboard_shortcuts: true,
            },
            Platform::Tv => Self {
                layout: LayoutStrategy::Spacered,
                glyphs: GlyphVariant::Circled,
                keyboard_shortcuts: false,
            },
            Platform::Headset => Self {
                layout: LayoutStrategy::Compact,
                glyphs: GlyphVariant::Plain,
                keyboard_shortcuts: true,
            },
        }
    }
}

impl Default for PresentationPolicy {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_names_round_trip() {
        for platform in [Platform::Desktop, Platform::Tv, Platform::Headset] {
            assert_eq!(Platform::from_name(platform.name()), Some(platform));
        }
    }

    #[test]
    fn platform_parsing_is_case_insensitive() {
        assert_eq!(Platform::from_name("  TV "), Some(Platform::Tv));
        assert_eq!(Platform::from_name("Headset"), Some(Platform::Headset));
        assert_eq!(Platform::from_name("console"), None);
    }

    #[test]
    fn desktop_policy_is_the_spacious_default() {
        let policy = PresentationPolicy::default();
        assert_eq!(policy.layout, LayoutStrategy::Spacered);
        assert_eq!(policy.glyphs, GlyphVariant::Circled);
        assert!(policy.keyboard_shortcuts);
    }

    #[test]
    fn tv_policy_disables_keyboard_shortcuts() {
        let policy = PresentationPolicy::for_platform(Platform::Tv);
        assert!(!policy.keyboard_shortcuts);
        assert_eq!(policy.layout, LayoutStrategy::Spacered);
    }

    #[test]
    fn headset_policy_is_compact_with_plain_glyphs() {
        let policy = PresentationPolicy::for_platform(Platform::Headset);
        assert_eq!(policy.layout, LayoutStrategy::Compact);
        assert_eq!(policy.glyphs, GlyphVariant::Plain);
        assert!(policy.keyboard_shortcuts);
    }
}
