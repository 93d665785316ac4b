// SPDX-License-Identifier: MPL-2.0
//! Player coordinator port definition.
//!
//! This module defines the [`PlayerCoordinator`] trait: the contract between
//! the control widgets and the externally-owned player. Host applications
//! implement it around whatever engine they drive.
//!
//! # Design Notes
//!
//! - The coordinator is **stateful** and externally owned; the widgets never
//!   cache anything they read from it
//! - Commands are best-effort and return nothing: a command that cannot apply
//!   (no media, no such track) is simply a no-op
//! - Methods are not `async` - the Iced framework handles threading via `Task`

use super::playback::PlaybackState;
use super::track::{SubtitleTrack, SubtitleTrackId};

// =============================================================================
// PlayerCoordinator Trait
// =============================================================================

/// Port for the player that the control widgets read and command.
///
/// # Thread Safety
///
/// All calls happen on the UI thread inside `view`/`update`; implementations
/// are not required to be `Send` or `Sync`.
pub trait PlayerCoordinator {
    /// Current playback state.
    fn playback_state(&self) -> PlaybackState;

    /// Whether the current media source supports arbitrary position changes.
    ///
    /// Skip controls are only offered while this is true.
    fn is_seekable(&self) -> bool;

    /// Whether the video is scaled to fill the surface (cropping) rather
    /// than fit inside it (letterboxing).
    fn is_aspect_fill(&self) -> bool;

    /// Subtitle tracks of the current media source, in display order.
    fn subtitle_tracks(&self) -> &[SubtitleTrack];

    /// Identifier of the selected subtitle track, `None` when subtitles
    /// are off.
    fn selected_subtitle(&self) -> Option<&SubtitleTrackId>;

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Moves the playback position by `interval_secs` (negative = backward).
    fn skip(&mut self, interval_secs: f64);

    /// Flips between aspect-fill and aspect-fit scaling.
    fn toggle_aspect_fill(&mut self);

    /// Selects a subtitle track, or clears the selection with `None`.
    fn select_subtitle(&mut self, id: Option<SubtitleTrackId>);

    /// Selects a track at the player level.
    ///
    /// Only issued for tracks marked [`player_rendered`], whose display is
    /// refreshed by the player itself.
    ///
    /// [`player_rendered`]: SubtitleTrack::player_rendered
    fn select_track(&mut self, id: &SubtitleTrackId);
}
