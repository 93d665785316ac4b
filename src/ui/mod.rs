// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`controls`] - Playback cluster, aspect-fill toggle, and subtitle menu
//!
//! # Shared Infrastructure
//!
//! - [`platform`] - Platform-driven presentation policy (layout, glyphs, shortcuts)
//! - [`styles`] - Centralized styling (buttons, icon tints, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons (visual primitives)
//! - [`action_icons`] - Semantic action-to-icon mapping

pub mod action_icons;
pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod platform;
pub mod styles;
