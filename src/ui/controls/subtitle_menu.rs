// SPDX-License-Identifier: MPL-2.0
//! Subtitle track menu.
//!
//! A toolbar button plus an overlay panel listing "Off" followed by every
//! subtitle track of the current source. The panel is rendered separately
//! from the button (`view_button` / `view_panel`) so the host can place it
//! as a proper overlay above the controls.

use super::{Message, ViewContext};
use crate::player::{PlayerCoordinator, SubtitleTrackId};
use crate::ui::action_icons;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column};
use iced::{Border, Element, Length, Theme};

// =============================================================================
// State
// =============================================================================

/// State for the subtitle menu.
#[derive(Debug, Clone, Default)]
pub struct SubtitleMenuState {
    /// Whether the menu panel is currently open.
    pub is_open: bool,
}

impl SubtitleMenuState {
    /// Create a new, closed menu state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the menu open/closed.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

// =============================================================================
// Views
// =============================================================================

/// Render just the menu button (for the controls toolbar).
/// The panel is rendered separately as an overlay via [`view_panel`].
pub fn view_button<'a>(
    ctx: &ViewContext<'a>,
    player: &dyn PlayerCoordinator,
    state: &SubtitleMenuState,
) -> Element<'a, Message> {
    let active = player.selected_subtitle().is_some();

    let icon = action_icons::subtitles::menu().style(styles::svg::themed);

    let base = button(icons::sized(icon, sizing::ICON_SM))
        .on_press(Message::ToggleSubtitleMenu)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    // Highlight while a track is active or the panel is open
    let content: Element<'_, Message> = if active || state.is_open {
        base.style(styles::button::selected).into()
    } else {
        base.into()
    };

    styles::tooltip::styled(
        content,
        ctx.i18n.tr("subtitle-menu-tooltip"),
        tooltip::Position::Top,
    )
    .into()
}

/// Render the track panel as an overlay element.
/// Returns `None` if the panel is closed.
#[must_use]
pub fn view_panel<'a>(
    ctx: &ViewContext<'a>,
    player: &dyn PlayerCoordinator,
    state: &SubtitleMenuState,
) -> Option<Element<'a, Message>> {
    if !state.is_open {
        return None;
    }
    Some(build_menu_panel(ctx, player))
}

/// Build the panel with the "Off" entry and one entry per track.
fn build_menu_panel<'a>(
    ctx: &ViewContext<'a>,
    player: &dyn PlayerCoordinator,
) -> Element<'a, Message> {
    let selected = player.selected_subtitle().cloned();

    let mut entries = Column::new().spacing(spacing::XXS);

    entries = entries.push(menu_entry(
        ctx.i18n.tr("subtitle-off"),
        None,
        selected.is_none(),
    ));

    for track in player.subtitle_tracks() {
        let is_selected = selected.as_ref() == Some(&track.id);
        entries = entries.push(menu_entry(
            track.name.clone(),
            Some(track.id.clone()),
            is_selected,
        ));
    }

    container(entries)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::MENU_PANEL_WIDTH))
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Build a single selectable menu entry.
fn menu_entry<'a>(
    label: String,
    id: Option<SubtitleTrackId>,
    is_selected: bool,
) -> Element<'a, Message> {
    let entry = button(text(label).size(typography::BODY))
        .on_press(Message::SelectSubtitle(id))
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill);

    if is_selected {
        entry.style(styles::button::selected).into()
    } else {
        entry.style(styles::button::unselected).into()
    }
}
