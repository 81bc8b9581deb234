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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker results
//! (suggestions, search results, playlists), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    triggers commands to the background worker, and manages view navigation
//!    logic.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Worker results carry the request sequence number they were issued under;
//! anything that does not match the latest sequence is a response to a query
//! the user has already typed past, and is discarded.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    actions::commands::AppCommand,
    components::SearchBarAction,
    model::{Playlist, Song},
    render::draw,
};

/// Which widget on the home view owns the keyboard. Off the home view there
/// is nothing to focus and global shortcuts apply directly.
#[derive(Debug, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
    None,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    /// Autocomplete results for the request issued under `seq`.
    SuggestionsReady { seq: u64, songs: Vec<Song> },
    /// Full search results for the request issued under `seq`.
    SearchResultsReady { seq: u64, songs: Vec<Song> },

    PlaylistsReady(Vec<Playlist>),

    StatusMessage(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::SetMainView(main_view) => app.set_main_view(main_view),

            AppEvent::SuggestionsReady { seq, songs } => {
                app.search_bar.apply_suggestions(seq, songs);
            }

            AppEvent::SearchResultsReady { seq, songs } => {
                if app.search_bar.finish_search(seq) {
                    log::debug!("Search results: {}", songs.len());
                    app.results.set_songs(songs);
                }
            }

            AppEvent::PlaylistsReady(playlists) => app.playlist_modal.set_playlists(playlists),

            AppEvent::StatusMessage(message) => app.set_status(message),
            AppEvent::Error(message) => {
                log::error!("{message}");
                app.set_status(message);
            }

            AppEvent::Tick => app.expire_status(),

            AppEvent::FatalError(message) => anyhow::bail!(message),

            _ => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. An open
/// playlist modal captures everything; otherwise the key goes to whichever
/// widget holds focus, falling through to the global shortcuts.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.playlist_modal.is_open() {
        return app.playlist_modal.process_key(key, &app.event_tx);
    }

    match app.focus {
        Focus::SearchInput => process_search_key_event(app, key),
        Focus::Results => process_results_key_event(app, key),
        Focus::None => process_global_key_event(app, key),
    }
}

/// Keys while the search input is focused. Most of them edit the query; every
/// edit restarts the autocomplete pipeline in the worker.
fn process_search_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    match app.search_bar.process_key(key) {
        Some(SearchBarAction::QueryChanged { query, seq }) => {
            app.command_tx.send(AppCommand::Autocomplete { query, seq })?;
        }
        Some(SearchBarAction::RunSearch { query, seq }) => {
            app.command_tx.send(AppCommand::Search { query, seq })?;
        }
        Some(SearchBarAction::FocusResults) => {
            if !app.results.is_empty() {
                app.focus = Focus::Results;
            }
        }
        Some(SearchBarAction::Cleared) => app.results.clear(),
        None => {}
    }

    Ok(())
}

/// Keys while the results table is focused: navigation, adding the selected
/// song to a playlist, and a fall-through to the global shortcuts.
fn process_results_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::Char('/') => {
            app.focus = Focus::SearchInput;
            Ok(())
        }

        KeyCode::Enter | KeyCode::Char('a') => {
            if let Some(song) = app.results.selected_song() {
                let song = song.clone();
                log::debug!("Opening playlist selector for {:?}", song.name);
                app.playlist_modal.open(song);
                app.command_tx.send(AppCommand::FetchPlaylists)?;
            }
            Ok(())
        }

        _ => {
            if app.results.process_key(key) {
                Ok(())
            } else {
                process_global_key_event(app, key)
            }
        }
    }
}

/// Application-wide shortcuts, active whenever no text input owns the
/// keyboard: quitting and the view switches the navbar advertises.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('1') => app.command_tx.send(AppCommand::SetMainView(MainView::Home))?,
        KeyCode::Char('2') => app
            .command_tx
            .send(AppCommand::SetMainView(MainView::Profile))?,
        KeyCode::Char('3') => app
            .command_tx
            .send(AppCommand::SetMainView(MainView::Friends))?,
        KeyCode::Char('4') => app
            .command_tx
            .send(AppCommand::SetMainView(MainView::SignIn))?,
        KeyCode::Char('5') => app
            .command_tx
            .send(AppCommand::SetMainView(MainView::SignUp))?,

        // Jump straight back into the search box from anywhere.
        KeyCode::Char('/') => app.command_tx.send(AppCommand::SetMainView(MainView::Home))?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    use crate::config::AppConfig;

    fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let app = App::new(AppConfig::default(), command_tx);
        (app, command_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::from(code)).unwrap();
    }

    #[test]
    fn typing_sends_a_debounceable_autocomplete_command() {
        let (mut app, command_rx) = test_app();

        press(&mut app, KeyCode::Char('d'));

        match command_rx.try_recv().unwrap() {
            AppCommand::Autocomplete { query, seq } => {
                assert_eq!(query, "d");
                assert_eq!(seq, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn enter_runs_an_explicit_search() {
        let (mut app, command_rx) = test_app();

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('a'));
        command_rx.try_recv().unwrap();
        command_rx.try_recv().unwrap();

        press(&mut app, KeyCode::Enter);

        match command_rx.try_recv().unwrap() {
            AppCommand::Search { query, seq } => {
                assert_eq!(query, "da");
                assert_eq!(seq, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(app.search_bar.has_searched);
        assert!(app.search_bar.is_loading);
    }

    #[test]
    fn view_switching_round_trips_through_the_worker() {
        let (mut app, command_rx) = test_app();
        app.set_main_view(MainView::SignIn);

        press(&mut app, KeyCode::Char('2'));

        assert!(matches!(
            command_rx.try_recv().unwrap(),
            AppCommand::SetMainView(MainView::Profile)
        ));
    }

    #[test]
    fn opening_the_modal_fetches_playlists() {
        let (mut app, command_rx) = test_app();
        app.results.set_songs(vec![Song {
            name: String::from("Daydream"),
            ..Song::default()
        }]);
        app.focus = Focus::Results;

        press(&mut app, KeyCode::Char('a'));

        assert!(app.playlist_modal.is_open());
        assert!(matches!(
            command_rx.try_recv().unwrap(),
            AppCommand::FetchPlaylists
        ));
    }
}
