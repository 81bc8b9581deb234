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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppCommand`] requests into search calls and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! The worker is also where keystroke debouncing lives: a burst of
//! [`AppCommand::Autocomplete`] commands collapses into a single request for
//! the newest query once the channel has been quiet for the debounce
//! interval.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

use crate::{
    MainView,
    actions::events::AppEvent,
    api::SongApi,
    config::AppConfig,
    model,
};

/// Quiet time on the command channel before an autocomplete query is allowed
/// to hit the network.
pub(crate) const AUTOCOMPLETE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this never reach the backend.
pub(crate) const MIN_AUTOCOMPLETE_LEN: usize = 2;

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// A keystroke changed the query. Debounced, deduplicated, length-gated.
    Autocomplete { query: String, seq: u64 },
    /// The user explicitly asked for a search. Runs immediately.
    Search { query: String, seq: u64 },
    FetchPlaylists,
    SetMainView(MainView),
}

/// Spawns a background thread to process application commands.
///
/// This worker thread builds its own HTTP client and enters a blocking loop,
/// listening for incoming [`AppCommand`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let api_url = config.api_url.clone();

    thread::spawn(move || {
        let api = match SongApi::new(api_url) {
            Ok(api) => api,
            Err(e) => {
                log::error!("Could not build the search client: {e}");
                let _ = event_tx.send(AppEvent::FatalError(e.to_string()));
                return;
            }
        };

        // The last query that made it past the debounce. A repeat is dropped
        // without emitting anything.
        let mut last_query: Option<String> = None;

        while let Ok(command) = command_rx.recv() {
            let (command, follow_up) = match command {
                AppCommand::Autocomplete { query, seq } => {
                    debounce_autocomplete(query, seq, &command_rx)
                }
                other => (other, None),
            };

            for command in std::iter::once(command).chain(follow_up) {
                if let Err(e) = handle_command(&api, command, &mut last_query, &event_tx) {
                    let _ = event_tx.send(AppEvent::Error(e.to_string()));
                }
            }
        }
    });
}

/// Collapses a burst of keystrokes into the final query.
///
/// Keeps draining the command channel, replacing the pending query with each
/// newer one, until the channel has been quiet for [`AUTOCOMPLETE_DEBOUNCE`].
/// A non-autocomplete command ends the drain early and is handed back to the
/// caller so it is not lost.
fn debounce_autocomplete(
    mut query: String,
    mut seq: u64,
    command_rx: &Receiver<AppCommand>,
) -> (AppCommand, Option<AppCommand>) {
    loop {
        match command_rx.recv_timeout(AUTOCOMPLETE_DEBOUNCE) {
            Ok(AppCommand::Autocomplete {
                query: newer_query,
                seq: newer_seq,
            }) => {
                query = newer_query;
                seq = newer_seq;
            }
            Ok(other) => return (AppCommand::Autocomplete { query, seq }, Some(other)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                return (AppCommand::Autocomplete { query, seq }, None);
            }
        }
    }
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel. Search failures are not
/// errors here: they degrade to an empty result list and a log entry.
fn handle_command(
    api: &SongApi,
    command: AppCommand,
    last_query: &mut Option<String>,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Autocomplete { query, seq } => {
            if last_query.as_deref() == Some(query.as_str()) {
                return Ok(());
            }
            *last_query = Some(query.clone());

            let trimmed = query.trim();
            let songs = if trimmed.chars().count() >= MIN_AUTOCOMPLETE_LEN {
                api.search_songs(trimmed).unwrap_or_else(|e| {
                    log::error!("Autocomplete error: {e}");
                    vec![]
                })
            } else {
                // Below the threshold the dropdown just empties out.
                vec![]
            };

            event_tx.send(AppEvent::SuggestionsReady { seq, songs })?;
        }
        AppCommand::Search { query, seq } => {
            let songs = api.search_songs(&query).unwrap_or_else(|e| {
                log::error!("Search error: {e}");
                let _ = event_tx.send(AppEvent::Error(format!("Search failed: {e}")));
                vec![]
            });

            event_tx.send(AppEvent::SearchResultsReady { seq, songs })?;
        }
        AppCommand::FetchPlaylists => {
            event_tx.send(AppEvent::PlaylistsReady(model::mock_playlists()))?;
        }
        AppCommand::SetMainView(main_view) => {
            event_tx.send(AppEvent::SetMainView(main_view))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn autocomplete(query: &str, seq: u64) -> AppCommand {
        AppCommand::Autocomplete {
            query: String::from(query),
            seq,
        }
    }

    fn test_worker(api_url: &str) -> (Sender<AppCommand>, Receiver<AppEvent>) {
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let config = AppConfig {
            version: 1,
            api_url: String::from(api_url),
        };
        spawn_command_worker(&config, command_rx, event_tx);

        (command_tx, event_rx)
    }

    #[test]
    fn debounce_keeps_the_newest_query() {
        let (tx, rx) = mpsc::channel();
        tx.send(autocomplete("da", 2)).unwrap();
        tx.send(autocomplete("day", 3)).unwrap();
        drop(tx);

        let (winner, follow_up) = debounce_autocomplete(String::from("d"), 1, &rx);

        assert!(follow_up.is_none());
        match winner {
            AppCommand::Autocomplete { query, seq } => {
                assert_eq!(query, "day");
                assert_eq!(seq, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn debounce_hands_back_an_interrupting_command() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppCommand::FetchPlaylists).unwrap();

        let (winner, follow_up) = debounce_autocomplete(String::from("da"), 1, &rx);

        match winner {
            AppCommand::Autocomplete { query, seq } => {
                assert_eq!(query, "da");
                assert_eq!(seq, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(follow_up, Some(AppCommand::FetchPlaylists)));
    }

    #[test]
    fn short_queries_produce_empty_suggestions() {
        let (tx, rx) = test_worker("http://127.0.0.1:1");

        tx.send(autocomplete("d", 1)).unwrap();

        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            AppEvent::SuggestionsReady { seq, songs } => {
                assert_eq!(seq, 1);
                assert!(songs.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn repeated_queries_are_dropped() {
        let (tx, rx) = test_worker("http://127.0.0.1:1");

        tx.send(autocomplete("", 1)).unwrap();
        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            AppEvent::SuggestionsReady { seq, .. } => assert_eq!(seq, 1),
            other => panic!("unexpected event: {other:?}"),
        }

        tx.send(autocomplete("", 2)).unwrap();
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(700)),
            Err(RecvTimeoutError::Timeout)
        ));
    }

    #[test]
    fn a_failed_search_degrades_to_an_empty_result() {
        let (tx, rx) = test_worker("http://127.0.0.1:1");

        tx.send(AppCommand::Search {
            query: String::from("daydream"),
            seq: 7,
        })
        .unwrap();

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            AppEvent::Error(message) => assert!(message.contains("Search failed")),
            other => panic!("unexpected event: {other:?}"),
        }
        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            AppEvent::SearchResultsReady { seq, songs } => {
                assert_eq!(seq, 7);
                assert!(songs.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn playlists_come_back_mocked() {
        let (tx, rx) = test_worker("http://127.0.0.1:1");

        tx.send(AppCommand::FetchPlaylists).unwrap();

        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            AppEvent::PlaylistsReady(playlists) => assert_eq!(playlists.len(), 5),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
