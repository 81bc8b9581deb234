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

//! The navigation bar.
//!
//! One line across the top of every frame: the application name, the view
//! tabs with their shortcut keys, and the account links on the right, which
//! flip to a signed-in marker once there is a session to show.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, MainView};

const TABS: [(char, &str, MainView); 3] = [
    ('1', "Home", MainView::Home),
    ('2', "Profile", MainView::Profile),
    ('3', "Friends", MainView::Friends),
];

const ACCOUNT_TABS: [(char, &str, MainView); 2] = [
    ('4', "Sign in", MainView::SignIn),
    ('5', "Sign up", MainView::SignUp),
];

pub(crate) fn draw_navbar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .horizontal_margin(1)
        .split(area);

    let mut spans = vec![
        Span::styled(
            "tunescout",
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (key, label, view) in TABS {
        spans.push(tab_span(app, key, label, view));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let mut account = vec![];
    if app.is_logged_in {
        account.push(Span::styled(
            "signed in",
            Style::default().fg(app.theme.accent_colour),
        ));
    } else {
        for (key, label, view) in ACCOUNT_TABS {
            account.push(tab_span(app, key, label, view));
            account.push(Span::raw(" "));
        }
    }
    f.render_widget(
        Paragraph::new(Line::from(account)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn tab_span(app: &App, key: char, label: &'static str, view: MainView) -> Span<'static> {
    let style = if app.main_view == view {
        Style::default().fg(Color::Black).bg(app.theme.accent_colour)
    } else {
        Style::default().fg(app.theme.border_colour)
    };

    Span::styled(format!(" {label} [{key}] "), style)
}
