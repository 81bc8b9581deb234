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

//! Static page views.
//!
//! The routes that are only placeholders today render here: profile, friends
//! and the account forms, plus the welcome hint shown on the home view before
//! the first search. None of them hold state or handle input.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
    text::Line,
};

use crate::theme::Theme;

pub(crate) fn draw_welcome(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from("Find your next favorite song."),
        Line::from(""),
        Line::from("Start typing to get suggestions, press Enter to search."),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.border_colour)),
        area,
    );
}

pub(crate) fn draw_profile(f: &mut Frame, area: Rect, theme: &Theme) {
    draw_page(
        f,
        area,
        theme,
        " Profile ",
        &["Your profile will live here.", "Nothing to show yet."],
    );
}

pub(crate) fn draw_friends(f: &mut Frame, area: Rect, theme: &Theme) {
    draw_page(
        f,
        area,
        theme,
        " Friends ",
        &["Friends and shared playlists will live here.", "Nothing to show yet."],
    );
}

pub(crate) fn draw_sign_in(f: &mut Frame, area: Rect, theme: &Theme) {
    draw_page(
        f,
        area,
        theme,
        " Sign in ",
        &[
            "Email     ____________________",
            "Password  ____________________",
            "",
            "Signing in is not wired up yet.",
            "New here? Press 5 to sign up.",
        ],
    );
}

pub(crate) fn draw_sign_up(f: &mut Frame, area: Rect, theme: &Theme) {
    draw_page(
        f,
        area,
        theme,
        " Sign up ",
        &[
            "Email     ____________________",
            "Password  ____________________",
            "Confirm   ____________________",
            "",
            "Registration is not wired up yet.",
            "Already registered? Press 4 to sign in.",
        ],
    );
}

fn draw_page(f: &mut Frame, area: Rect, theme: &Theme, title: &'static str, lines: &[&'static str]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::uniform(1))
        .title(title);

    let text: Vec<Line> = lines.iter().map(|line| Line::from(*line)).collect();

    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}
