// SPDX-License-Identifier: MPL-2.0
//! Semantic action icons mapping.
//!
//! This module provides a semantic layer over [`icons`](super::icons), mapping
//! user actions to their visual icon representations. This separation allows
//! changing an action's icon in one place without modifying all usage sites.
//!
//! Where a platform policy varies a glyph (plain vs. circled play/pause),
//! the variant switch lives here, so the views never pick raw icons.
//!
//! # Naming Convention
//!
//! Functions are named by **what action they represent**, not what they look
//! like. The underlying visual icon can change without affecting call sites.

use super::icons;
use super::platform::GlyphVariant;

// =============================================================================
// Playback Actions
// =============================================================================

/// Icons for the playback cluster.
pub mod playback {
    use super::{icons, GlyphVariant};
    use iced::widget::svg::Svg;

    /// Start or resume playback.
    #[must_use]
    pub fn play(variant: GlyphVariant) -> Svg<'static> {
        match variant {
            GlyphVariant::Circled => icons::play_circle(),
            GlyphVariant::Plain => icons::play(),
        }
    }

    /// Pause playback.
    #[must_use]
    pub fn pause(variant: GlyphVariant) -> Svg<'static> {
        match variant {
            GlyphVariant::Circled => icons::pause_circle(),
            GlyphVariant::Plain => icons::pause(),
        }
    }

    /// Playback is unavailable (error state).
    #[must_use]
    pub fn unavailable() -> Svg<'static> {
        icons::play_slash()
    }

    /// Jump backward by the skip interval.
    #[must_use]
    pub fn skip_backward() -> Svg<'static> {
        icons::arrow_ccw()
    }

    /// Jump forward by the skip interval.
    #[must_use]
    pub fn skip_forward() -> Svg<'static> {
        icons::arrow_cw()
    }
}

// =============================================================================
// Content Mode Actions
// =============================================================================

/// Icons for the aspect-fill toggle.
pub mod content_mode {
    use super::icons;
    use iced::widget::svg::Svg;

    /// Toggle between fill and fit scaling.
    ///
    /// Shows inward arrows while filling (pressing will fit) and outward
    /// arrows while fitting (pressing will fill).
    #[must_use]
    pub fn toggle(is_aspect_fill: bool) -> Svg<'static> {
        if is_aspect_fill {
            icons::arrows_inward()
        } else {
            icons::arrows_outward()
        }
    }
}

// =============================================================================
// Subtitle Actions
// =============================================================================

/// Icons for subtitle selection.
pub mod subtitles {
    use super::icons;
    use iced::widget::svg::Svg;

    /// Open the subtitle track menu.
    #[must_use]
    pub fn menu() -> Svg<'static> {
        icons::speech_bubble()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Re-export of [`icons::sized`] for convenience.
pub use icons::sized;
