// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the add-to-playlist modal.
//!
//! Draws a centered overlay on top of whatever view is active: the song being
//! filed in the title, the playlist entries with their track counts, and the
//! trailing create-new entry.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding},
};

use crate::{components::PlaylistModal, theme::Theme};

const MODAL_WIDTH: u16 = 44;

impl PlaylistModal {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(song) = &self.song else {
            return;
        };

        let height = self.entry_count() as u16 + 4;
        let modal = centered_rect(area, MODAL_WIDTH, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1))
            .title(format!(" Add \"{}\" to playlist ", song.name));

        let mut items: Vec<ListItem> = self
            .playlists
            .iter()
            .map(|playlist| {
                ListItem::new(Line::from(format!(
                    "{}  ({} songs)",
                    playlist.name, playlist.song_count
                )))
            })
            .collect();
        items.push(ListItem::new(
            Line::from("+ Create new playlist")
                .style(Style::default().add_modifier(Modifier::ITALIC)),
        ));

        let list = List::new(items)
            .style(Style::default().bg(theme.panel_colour))
            .highlight_style(
                Style::default()
                    .bg(theme.accent_colour)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        let mut state = ListState::default();
        state.select(Some(self.selected));

        f.render_widget(Clear, modal);
        f.render_stateful_widget(list, modal, &mut state);
    }
}

/// A rect of the given size centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
