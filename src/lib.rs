// SPDX-License-Identifier: MPL-2.0
//! `iced_playbar` provides on-screen playback control widgets for video
//! players built with the Iced GUI framework.
//!
//! The crate is presentation wiring only: the playback cluster
//! (backward / play-pause / forward), an aspect-fill toggle, and a subtitle
//! track menu, all reading and commanding an externally-owned player through
//! the [`player::PlayerCoordinator`] contract. It demonstrates
//! internationalization with Fluent, user preference management, and a
//! platform-driven presentation policy.
//!
//! # Example
//!
//! ```no_run
//! use iced_playbar::config;
//! use iced_playbar::i18n::I18n;
//! use iced_playbar::ui::controls::{self, ViewContext};
//! use iced_playbar::ui::platform::PresentationPolicy;
//!
//! # fn view(player: &dyn iced_playbar::player::PlayerCoordinator) {
//! let config = config::load().unwrap_or_default();
//! let i18n = I18n::new(None, &config);
//! let ctx = ViewContext {
//!     i18n: &i18n,
//!     policy: PresentationPolicy::for_platform(config.platform()),
//!     skip_interval_secs: config.skip_interval_secs(),
//! };
//!
//! let cluster = controls::playback_controls(&ctx, player);
//! # let _ = cluster;
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/iced_playbar/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod player;
pub mod ui;
