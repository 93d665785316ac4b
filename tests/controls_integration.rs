// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the control widgets against a mock coordinator.

use iced_playbar::i18n::I18n;
use iced_playbar::player::{PlaybackState, PlayerCoordinator, SubtitleTrack, SubtitleTrackId};
use iced_playbar::ui::controls::{self, Effect, Message, PlayButtonIcon, ViewContext};
use iced_playbar::ui::controls::subtitle_menu;
use iced_playbar::ui::platform::{Platform, PresentationPolicy};

// =============================================================================
// Mock Coordinator
// =============================================================================

/// Mock player coordinator recording every command it receives.
struct MockCoordinator {
    state: PlaybackState,
    seekable: bool,
    aspect_fill: bool,
    tracks: Vec<SubtitleTrack>,
    selected: Option<SubtitleTrackId>,
    skip_calls: Vec<f64>,
    select_track_calls: Vec<SubtitleTrackId>,
}

impl MockCoordinator {
    fn new() -> Self {
        Self {
            state: PlaybackState::Stopped,
            seekable: true,
            aspect_fill: false,
            tracks: vec![
                SubtitleTrack::new("srt:0", "English"),
                SubtitleTrack::new("srt:1", "Français"),
                SubtitleTrack::new("pgs:2", "English (PGS)").player_rendered(),
            ],
            selected: None,
            skip_calls: Vec::new(),
            select_track_calls: Vec::new(),
        }
    }
}

impl PlayerCoordinator for MockCoordinator {
    fn playback_state(&self) -> PlaybackState {
        self.state
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn is_aspect_fill(&self) -> bool {
        self.aspect_fill
    }

    fn subtitle_tracks(&self) -> &[SubtitleTrack] {
        &self.tracks
    }

    fn selected_subtitle(&self) -> Option<&SubtitleTrackId> {
        self.selected.as_ref()
    }

    fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    fn skip(&mut self, interval_secs: f64) {
        self.skip_calls.push(interval_secs);
    }

    fn toggle_aspect_fill(&mut self) {
        self.aspect_fill = !self.aspect_fill;
    }

    fn select_subtitle(&mut self, id: Option<SubtitleTrackId>) {
        self.selected = id;
    }

    fn select_track(&mut self, id: &SubtitleTrackId) {
        self.select_track_calls.push(id.clone());
    }
}

fn desktop_ctx(i18n: &I18n) -> ViewContext<'_> {
    ViewContext {
        i18n,
        policy: PresentationPolicy::for_platform(Platform::Desktop),
        skip_interval_secs: 15.0,
    }
}

// =============================================================================
// Playback cluster
// =============================================================================

#[test]
fn toggle_playback_starts_and_pauses() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();

    let effect = state.handle(&mut player, Message::TogglePlayback);
    assert_eq!(effect, Effect::StateChanged);
    assert!(player.playback_state().is_playing());

    let effect = state.handle(&mut player, Message::TogglePlayback);
    assert_eq!(effect, Effect::StateChanged);
    assert!(player.playback_state().is_paused());
}

#[test]
fn toggle_playback_in_error_state_attempts_play() {
    let mut player = MockCoordinator::new();
    player.state = PlaybackState::Error;
    let mut state = controls::State::default();

    state.handle(&mut player, Message::TogglePlayback);
    assert!(player.playback_state().is_playing());
}

#[test]
fn skip_forwards_by_configured_interval() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::new(15.0);

    state.handle(&mut player, Message::SkipForward);
    state.handle(&mut player, Message::SkipBackward);

    assert_eq!(player.skip_calls, vec![15.0, -15.0]);
}

#[test]
fn skip_is_suppressed_while_unseekable() {
    let mut player = MockCoordinator::new();
    player.seekable = false;
    let mut state = controls::State::new(15.0);

    let effect = state.handle(&mut player, Message::SkipForward);

    assert_eq!(effect, Effect::None);
    assert!(player.skip_calls.is_empty());
}

#[test]
fn play_button_glyph_is_pure_in_state() {
    assert_eq!(
        controls::play_button_icon(PlaybackState::Error),
        PlayButtonIcon::Unavailable
    );
    assert_eq!(
        controls::play_button_icon(PlaybackState::Playing),
        PlayButtonIcon::Pause
    );
    assert_eq!(
        controls::play_button_icon(PlaybackState::Paused),
        PlayButtonIcon::Play
    );
    assert_eq!(
        controls::play_button_icon(PlaybackState::Stopped),
        PlayButtonIcon::Play
    );
}

#[test]
fn playback_controls_render_with_and_without_seekable_source() {
    let i18n = I18n::default();
    let ctx = desktop_ctx(&i18n);

    let mut player = MockCoordinator::new();
    let _ = controls::playback_controls(&ctx, &player);

    player.seekable = false;
    let _ = controls::playback_controls(&ctx, &player);
}

#[test]
fn playback_controls_render_under_every_policy() {
    let i18n = I18n::default();
    let player = MockCoordinator::new();

    for platform in [Platform::Desktop, Platform::Tv, Platform::Headset] {
        let ctx = ViewContext {
            i18n: &i18n,
            policy: PresentationPolicy::for_platform(platform),
            skip_interval_secs: 15.0,
        };
        let _ = controls::playback_controls(&ctx, &player);
    }
}

// =============================================================================
// Aspect-fill toggle
// =============================================================================

#[test]
fn aspect_fill_toggles_through_coordinator() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();
    assert!(!player.is_aspect_fill());

    state.handle(&mut player, Message::ToggleAspectFill);
    assert!(player.is_aspect_fill());

    state.handle(&mut player, Message::ToggleAspectFill);
    assert!(!player.is_aspect_fill());
}

#[test]
fn content_mode_button_renders_in_both_modes() {
    let i18n = I18n::default();
    let ctx = desktop_ctx(&i18n);

    let mut player = MockCoordinator::new();
    let _ = controls::content_mode_button(&ctx, &player);

    player.aspect_fill = true;
    let _ = controls::content_mode_button(&ctx, &player);
}

// =============================================================================
// Subtitle selection
// =============================================================================

#[test]
fn selecting_off_clears_the_selection() {
    let mut player = MockCoordinator::new();
    player.selected = Some(SubtitleTrackId::new("srt:0"));
    let mut state = controls::State::default();

    let effect = state.handle(&mut player, Message::SelectSubtitle(None));

    assert_eq!(effect, Effect::SubtitleSelected { track: None });
    assert!(player.selected_subtitle().is_none());
}

#[test]
fn selecting_a_listed_track_updates_the_selection() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();
    let id = SubtitleTrackId::new("srt:1");

    let effect = state.handle(&mut player, Message::SelectSubtitle(Some(id.clone())));

    assert_eq!(
        effect,
        Effect::SubtitleSelected {
            track: Some(id.clone())
        }
    );
    assert_eq!(player.selected_subtitle(), Some(&id));
    // Text tracks never go through the player's track selection
    assert!(player.select_track_calls.is_empty());
}

#[test]
fn selecting_a_player_rendered_track_selects_it_exactly_once() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();
    let id = SubtitleTrackId::new("pgs:2");

    state.handle(&mut player, Message::SelectSubtitle(Some(id.clone())));

    assert_eq!(player.selected_subtitle(), Some(&id));
    assert_eq!(player.select_track_calls, vec![id]);
}

#[test]
fn selecting_an_unknown_track_is_a_no_op() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();

    let effect = state.handle(
        &mut player,
        Message::SelectSubtitle(Some(SubtitleTrackId::new("vtt:9"))),
    );

    assert_eq!(effect, Effect::None);
    assert!(player.selected_subtitle().is_none());
    assert!(player.select_track_calls.is_empty());
}

#[test]
fn selection_closes_the_menu() {
    let mut player = MockCoordinator::new();
    let mut state = controls::State::default();

    state.handle(&mut player, Message::ToggleSubtitleMenu);
    assert!(state.subtitle_menu.is_open);

    state.handle(&mut player, Message::SelectSubtitle(None));
    assert!(!state.subtitle_menu.is_open);
}

#[test]
fn subtitle_menu_renders_button_and_panel() {
    let i18n = I18n::default();
    let ctx = desktop_ctx(&i18n);
    let player = MockCoordinator::new();

    let mut menu = subtitle_menu::SubtitleMenuState::new();
    let _ = subtitle_menu::view_button(&ctx, &player, &menu);
    assert!(subtitle_menu::view_panel(&ctx, &player, &menu).is_none());

    menu.toggle();
    assert!(subtitle_menu::view_panel(&ctx, &player, &menu).is_some());
}

// =============================================================================
// Keyboard shortcuts
// =============================================================================

#[test]
fn keyboard_shortcuts_follow_policy_and_seekability() {
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    let desktop = PresentationPolicy::for_platform(Platform::Desktop);
    let tv = PresentationPolicy::for_platform(Platform::Tv);

    assert_eq!(
        controls::handle_key(&Key::Named(Named::Space), desktop, false),
        Some(Message::TogglePlayback)
    );
    assert_eq!(
        controls::handle_key(&Key::Named(Named::ArrowRight), desktop, true),
        Some(Message::SkipForward)
    );
    assert_eq!(
        controls::handle_key(&Key::Named(Named::ArrowRight), desktop, false),
        None
    );
    assert_eq!(
        controls::handle_key(&Key::Named(Named::Space), tv, true),
        None
    );
}
