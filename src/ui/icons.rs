// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the control glyphs.
//!
//! Icons are single-path SVG documents embedded in the binary, so the crate
//! ships no asset files. Handles are cached using `OnceLock` so each SVG is
//! parsed at most once.
//!
//! Every document uses `currentColor`; the actual tint is applied where the
//! icon is placed, via [`styles::svg`](super::styles::svg).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `speech_bubble` not `subtitle_menu`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $svg:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = $svg.as_bytes();
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Playback Icons
// =============================================================================

define_icon!(
    play,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M8 5v14l11-7z'/></svg>",
    "Play icon: triangle pointing right."
);
define_icon!(
    play_circle,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 14.5v-9l6 4.5-6 4.5z'/></svg>",
    "Play icon inside a filled circle."
);
define_icon!(
    pause,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M6 19h4V5H6v14zm8-14v14h4V5h-4z'/></svg>",
    "Pause icon: two vertical bars."
);
define_icon!(
    pause_circle,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM11 16H9V8h2v8zm4 0h-2V8h2v8z'/></svg>",
    "Pause icon inside a filled circle."
);
define_icon!(
    play_slash,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M8 5v14l11-7z'/><path fill='currentColor' d='M3.3 2.3 2 3.6l18.4 18.4 1.3-1.3z'/></svg>",
    "Play triangle crossed by a diagonal slash."
);
define_icon!(
    arrow_ccw,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M12 5V1L7 6l5 5V7a6 6 0 1 1-6 6H4a8 8 0 1 0 8-8z'/></svg>",
    "Counter-clockwise circular arrow: jump backward shape."
);
define_icon!(
    arrow_cw,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M12 5V1l5 5-5 5V7a6 6 0 1 0 6 6h2a8 8 0 1 1-8-8z'/></svg>",
    "Clockwise circular arrow: jump forward shape."
);

// =============================================================================
// View & Menu Icons
// =============================================================================

define_icon!(
    arrows_inward,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M5 16h3v3h2v-5H5v2zm3-8H5v2h5V5H8v3zm6 11h2v-3h3v-2h-5v5zm2-11V5h-2v5h5V8h-3z'/></svg>",
    "Four corner arrows pointing inward (scaling will shrink to fit)."
);
define_icon!(
    arrows_outward,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z'/></svg>",
    "Four corner arrows pointing outward (scaling will grow to fill)."
);
define_icon!(
    speech_bubble,
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'><path fill='currentColor' d='M20 2H4a2 2 0 0 0-2 2v18l4-4h14a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2z'/></svg>",
    "Filled speech bubble: subtitle/caption shape."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Creates an icon that fills its container.
pub fn fill(icon: Svg<'static>) -> Svg<'static> {
    icon.width(Length::Fill).height(Length::Fill)
}
