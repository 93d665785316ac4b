// SPDX-License-Identifier: MPL-2.0
//! Icon tinting.
//!
//! The embedded SVG documents all paint with `currentColor`; these style
//! functions resolve that into an actual color at render time.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints an icon with the theme's base text color.
///
/// This is the default for icons placed inside buttons, so they stay
/// readable in both light and dark themes.
pub fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Tints an icon with a fixed color regardless of theme.
pub fn tint(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
