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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface: navbar on top,
//! the routed main view, a status footer, and the playlist modal overlaid
//! last when open.

mod navbar;
mod pages;

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, MainView, actions::events::Focus};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: navbar, main, status footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    navbar::draw_navbar(f, outer[0], app);

    match app.main_view {
        MainView::Home => draw_home(f, outer[1], app),
        MainView::Profile => pages::draw_profile(f, outer[1], &app.theme),
        MainView::Friends => pages::draw_friends(f, outer[1], &app.theme),
        MainView::SignIn => pages::draw_sign_in(f, outer[1], &app.theme),
        MainView::SignUp => pages::draw_sign_up(f, outer[1], &app.theme),
    }

    draw_status(f, outer[2], app);

    if app.playlist_modal.is_open() {
        app.playlist_modal.draw(f, area, &app.theme);
    }
}

/// The home view: the search input on top and, below it, either the results
/// of the last committed search or the welcome hint. The input is drawn last
/// so its autocomplete dropdown overlays whatever sits underneath.
fn draw_home(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    if app.search_bar.has_searched || !app.results.is_empty() {
        draw_results(f, chunks[1], app);
    } else {
        pages::draw_welcome(f, chunks[1], &app.theme);
    }

    let focused = app.focus == Focus::SearchInput;
    app.search_bar.draw(f, chunks[0], &app.theme, focused);
}

fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .padding(Padding::horizontal(1));

    let mut header_text = format!(
        "Results for \"{}\" | {} songs",
        app.search_bar.last_search,
        app.results.songs.len()
    );

    if app.search_bar.is_loading {
        let _ = write!(header_text, " | searching…");
    }

    let header = Paragraph::new(header_text).block(header_block);

    f.render_widget(header, chunks[0]);
    app.results.draw(f, chunks[1], &app.theme);
}

/// The footer: a transient status message when there is one, otherwise the
/// key hints for whatever currently owns the keyboard.
fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some((message, _)) => message.clone(),
        None => hints(app),
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(app.theme.border_colour)
                .bg(app.theme.panel_colour),
        ),
        container[0],
    );
}

fn hints(app: &App) -> String {
    let hints = if app.playlist_modal.is_open() {
        "j/k move | Enter choose | Esc close"
    } else {
        match app.focus {
            Focus::SearchInput => "Enter search | Esc clear | Tab results | Ctrl-C quit",
            Focus::Results => "j/k move | a add to playlist | Tab search | q quit",
            Focus::None => "1-5 switch view | / search | q quit",
        }
    };

    String::from(hints)
}
