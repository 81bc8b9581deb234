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

//! UI rendering logic for the search bar.
//!
//! Draws the bordered query input, places the terminal cursor while the input
//! has focus, and overlays the autocomplete dropdown beneath it. The dropdown
//! is painted last in the frame so it floats above whatever the home view
//! shows underneath.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title("Search songs");
        let inner = block.inner(area);
        f.render_widget(block, area);

        f.render_widget(Paragraph::new(self.input.value()), inner);

        if focused {
            let cursor_x = inner.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }

        if self.show_dropdown {
            self.draw_dropdown(f, area, theme);
        }
    }

    fn draw_dropdown(&self, f: &mut Frame, input_area: Rect, theme: &Theme) {
        let frame_area = f.area();

        let y = input_area.y.saturating_add(3);
        if y >= frame_area.bottom() || self.suggestions.is_empty() {
            return;
        }

        let height = (self.suggestions.len() as u16).min(frame_area.bottom() - y);
        let dropdown = Rect {
            x: input_area.x + 1,
            y,
            width: input_area.width.saturating_sub(2),
            height,
        };

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, song)| {
                let mut spans = vec![
                    Span::styled("♪ ", Style::default().fg(theme.suggestion_colour(i))),
                    Span::raw(song.name.as_str()),
                ];
                if !song.artist.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", song.artist),
                        Style::default().fg(theme.table_time_fg),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .style(Style::default().bg(theme.panel_colour))
            .highlight_style(
                Style::default()
                    .bg(theme.accent_colour)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        state.select(self.dropdown_selected);

        f.render_widget(Clear, dropdown);
        f.render_stateful_widget(list, dropdown, &mut state);
    }
}
