// SPDX-License-Identifier: MPL-2.0
//! Playback controls UI.
//!
//! Provides the on-screen playback controls for a video player: the
//! backward / play-pause / forward cluster, the aspect-fill toggle, and the
//! subtitle-track menu. The widgets own no playback state; every view reads
//! the externally-owned [`PlayerCoordinator`] and every press comes back as
//! a [`Message`] that [`State::handle`] routes into coordinator commands.

use crate::i18n::fluent::I18n;
use crate::player::{PlaybackState, PlayerCoordinator, SubtitleTrackId};
use crate::ui::action_icons;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::platform::{LayoutStrategy, PresentationPolicy};
use crate::ui::styles;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::widget::svg::Svg;
use iced::widget::{button, tooltip, Row, Space};
use iced::{Element, Length};

pub mod subtitle_menu;

pub use subtitle_menu::SubtitleMenuState;

// =============================================================================
// Messages
// =============================================================================

/// Messages emitted by the control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Jump backward by the configured skip interval.
    SkipBackward,

    /// Jump forward by the configured skip interval.
    SkipForward,

    /// Flip between aspect-fill and aspect-fit scaling.
    ToggleAspectFill,

    /// Open or close the subtitle track menu.
    ToggleSubtitleMenu,

    /// Close the subtitle track menu (e.g., when clicking outside).
    CloseSubtitleMenu,

    /// Select a subtitle track, `None` meaning "off".
    SelectSubtitle(Option<SubtitleTrackId>),
}

/// Effects produced by applying a message to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing happened (suppressed command).
    None,
    /// A coordinator command was issued - view needs refresh.
    StateChanged,
    /// The subtitle selection changed.
    SubtitleSelected {
        /// The now-selected track, `None` when subtitles were turned off.
        track: Option<SubtitleTrackId>,
    },
}

// =============================================================================
// State
// =============================================================================

/// Caller-owned control state.
///
/// The views themselves are stateless; this struct carries the one piece of
/// UI state that must survive redraws (the subtitle menu's open flag) plus
/// the configured skip interval.
#[derive(Debug, Clone)]
pub struct State {
    /// Subtitle menu open/closed state.
    pub subtitle_menu: SubtitleMenuState,
    skip_interval_secs: f64,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SKIP_INTERVAL_SECS)
    }
}

impl State {
    /// Creates control state with the given skip interval in seconds.
    #[must_use]
    pub fn new(skip_interval_secs: f64) -> Self {
        Self {
            subtitle_menu: SubtitleMenuState::new(),
            skip_interval_secs: skip_interval_secs
                .clamp(crate::config::MIN_SKIP_INTERVAL_SECS, crate::config::MAX_SKIP_INTERVAL_SECS),
        }
    }

    /// Creates control state from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.skip_interval_secs())
    }

    /// The skip interval applied by [`Message::SkipBackward`] and
    /// [`Message::SkipForward`].
    #[must_use]
    pub fn skip_interval_secs(&self) -> f64 {
        self.skip_interval_secs
    }

    /// Handle a control message by commanding the coordinator.
    pub fn handle(&mut self, player: &mut dyn PlayerCoordinator, message: Message) -> Effect {
        match message {
            Message::TogglePlayback => {
                if player.playback_state().is_playing() {
                    player.pause();
                } else {
                    player.play();
                }
                Effect::StateChanged
            }
            Message::SkipBackward => skip(player, -self.skip_interval_secs),
            Message::SkipForward => skip(player, self.skip_interval_secs),
            Message::ToggleAspectFill => {
                player.toggle_aspect_fill();
                Effect::StateChanged
            }
            Message::ToggleSubtitleMenu => {
                self.subtitle_menu.toggle();
                Effect::StateChanged
            }
            Message::CloseSubtitleMenu => {
                self.subtitle_menu.close();
                Effect::StateChanged
            }
            Message::SelectSubtitle(id) => {
                self.subtitle_menu.close();
                select_subtitle(player, id)
            }
        }
    }
}

fn skip(player: &mut dyn PlayerCoordinator, interval_secs: f64) -> Effect {
    if !player.is_seekable() {
        tracing::debug!(interval_secs, "skip ignored: source is not seekable");
        return Effect::None;
    }
    player.skip(interval_secs);
    Effect::StateChanged
}

fn select_subtitle(player: &mut dyn PlayerCoordinator, id: Option<SubtitleTrackId>) -> Effect {
    let Some(id) = id else {
        player.select_subtitle(None);
        return Effect::SubtitleSelected { track: None };
    };

    let Some(track) = player.subtitle_tracks().iter().find(|t| t.id == id).cloned() else {
        tracing::debug!(track = %id, "subtitle selection ignored: unknown track id");
        return Effect::None;
    };

    player.select_subtitle(Some(track.id.clone()));
    if track.player_rendered {
        // Player-rendered tracks (image subtitles) only refresh their display
        // through the player's own track selection, which seeks.
        player.select_track(&track.id);
    }
    Effect::SubtitleSelected {
        track: Some(track.id),
    }
}

// =============================================================================
// View Context
// =============================================================================

/// View context for rendering the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub policy: PresentationPolicy,
    /// Skip interval surfaced in the skip-button tooltips.
    pub skip_interval_secs: f64,
}

// =============================================================================
// Views
// =============================================================================

/// Renders the playback cluster: backward, play/pause, forward.
///
/// The skip buttons only appear while the coordinator reports a seekable
/// source. Layout follows the presentation policy: `Spacered` spreads the
/// buttons across the container with fill-width spacers, `Compact` packs
/// them side by side.
pub fn playback_controls<'a>(
    ctx: &ViewContext<'a>,
    player: &dyn PlayerCoordinator,
) -> Element<'a, Message> {
    let seekable = player.is_seekable();
    let state = player.playback_state();

    let mut cluster = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center);

    match ctx.policy.layout {
        LayoutStrategy::Compact => {
            if seekable {
                cluster = cluster.push(backward_button(ctx));
            }
            cluster = cluster.push(play_button(ctx, state));
            if seekable {
                cluster = cluster.push(forward_button(ctx));
            }
        }
        LayoutStrategy::Spacered => {
            cluster = cluster.push(Space::new().width(Length::Fill));
            if seekable {
                cluster = cluster.push(backward_button(ctx));
                cluster = cluster.push(Space::new().width(Length::Fill));
            }
            cluster = cluster.push(play_button(ctx, state));
            if seekable {
                cluster = cluster.push(Space::new().width(Length::Fill));
                cluster = cluster.push(forward_button(ctx));
            }
            cluster = cluster.push(Space::new().width(Length::Fill));
        }
    }

    cluster.into()
}

/// Renders the aspect-fill toggle button.
///
/// The icon shows inward arrows while the video fills the surface (pressing
/// will fit) and outward arrows otherwise; the active fill state is styled
/// as selected.
pub fn content_mode_button<'a>(
    ctx: &ViewContext<'a>,
    player: &dyn PlayerCoordinator,
) -> Element<'a, Message> {
    let filling = player.is_aspect_fill();

    let icon = action_icons::content_mode::toggle(filling)
        .style(styles::svg::themed);

    let tip = if filling {
        ctx.i18n.tr("video-aspect-fit-tooltip")
    } else {
        ctx.i18n.tr("video-aspect-fill-tooltip")
    };

    let base = button(icons::sized(icon, sizing::ICON_SM))
        .on_press(Message::ToggleAspectFill)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let content: Element<'_, Message> = if filling {
        base.style(styles::button::selected).into()
    } else {
        base.into()
    };

    styles::tooltip::styled(content, tip, tooltip::Position::Top).into()
}

/// The glyph shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButtonIcon {
    /// Playback can be started or resumed.
    Play,
    /// Playback is running and can be paused.
    Pause,
    /// Playback failed; the glyph is slashed.
    Unavailable,
}

/// Pure mapping from playback state to the play-button glyph.
#[must_use]
pub fn play_button_icon(state: PlaybackState) -> PlayButtonIcon {
    if state.is_error() {
        PlayButtonIcon::Unavailable
    } else if state.is_playing() {
        PlayButtonIcon::Pause
    } else {
        PlayButtonIcon::Play
    }
}

fn play_button<'a>(ctx: &ViewContext<'a>, state: PlaybackState) -> Element<'a, Message> {
    let (icon, tip): (Svg<'static>, String) = match play_button_icon(state) {
        PlayButtonIcon::Unavailable => (
            action_icons::playback::unavailable(),
            ctx.i18n.tr("video-play-error-tooltip"),
        ),
        PlayButtonIcon::Pause => (
            action_icons::playback::pause(ctx.policy.glyphs),
            ctx.i18n.tr("video-pause-tooltip"),
        ),
        PlayButtonIcon::Play => (
            action_icons::playback::play(ctx.policy.glyphs),
            ctx.i18n.tr("video-play-tooltip"),
        ),
    };

    cluster_button(icon, tip, Message::TogglePlayback)
}

fn backward_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tip = ctx.i18n.tr_with_args(
        "video-skip-backward-tooltip",
        &[("seconds", &format_interval(ctx.skip_interval_secs))],
    );
    cluster_button(
        action_icons::playback::skip_backward(),
        tip,
        Message::SkipBackward,
    )
}

fn forward_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tip = ctx.i18n.tr_with_args(
        "video-skip-forward-tooltip",
        &[("seconds", &format_interval(ctx.skip_interval_secs))],
    );
    cluster_button(
        action_icons::playback::skip_forward(),
        tip,
        Message::SkipForward,
    )
}

/// Builds one large cluster button with a tooltip.
fn cluster_button<'a>(icon: Svg<'static>, tip: String, message: Message) -> Element<'a, Message> {
    let content: Element<'_, Message> =
        button(icons::sized(icon.style(styles::svg::themed), sizing::ICON_LG))
            .on_press(message)
            .padding(spacing::XS)
            .width(Length::Shrink)
            .height(Length::Fixed(sizing::CONTROL_BUTTON_HEIGHT))
            .into();

    styles::tooltip::styled(content, tip, tooltip::Position::Top).into()
}

/// Formats the skip interval for tooltips ("15", or "2.5" for fractions).
fn format_interval(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as i64)
    } else {
        format!("{:.1}", secs)
    }
}

// =============================================================================
// Keyboard Shortcuts
// =============================================================================

/// Maps a key press to a control message.
///
/// Space toggles playback; the arrow keys skip while the source is seekable.
/// Returns `None` for every key when the policy disables shortcuts (tv).
#[must_use]
pub fn handle_key(key: &Key, policy: PresentationPolicy, seekable: bool) -> Option<Message> {
    if !policy.keyboard_shortcuts {
        return None;
    }

    match key {
        Key::Named(Named::Space) => Some(Message::TogglePlayback),
        Key::Named(Named::ArrowLeft) if seekable => Some(Message::SkipBackward),
        Key::Named(Named::ArrowRight) if seekable => Some(Message::SkipForward),
        _ => None,
    }
}
