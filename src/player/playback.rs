// SPDX-License-Identifier: MPL-2.0
//! Playback states as reported by the player coordinator.

/// Represents the current playback state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is playing (no media, or playback finished).
    #[default]
    Stopped,
    /// Media is currently playing.
    Playing,
    /// Media is paused at the current position.
    Paused,
    /// Playback failed; the player cannot continue without intervention.
    Error,
}

impl PlaybackState {
    /// Returns true if the player is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the player is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the player is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns true if playback is in the error state.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}
