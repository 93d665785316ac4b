// SPDX-License-Identifier: MPL-2.0
//! Player-facing domain types and the coordinator contract.
//!
//! The control widgets own none of the playback logic. Everything they read
//! or command goes through [`PlayerCoordinator`], implemented by the host
//! application around its actual player engine.

pub mod coordinator;
pub mod playback;
pub mod track;

pub use coordinator::PlayerCoordinator;
pub use playback::PlaybackState;
pub use track::{SubtitleTrack, SubtitleTrackId};
