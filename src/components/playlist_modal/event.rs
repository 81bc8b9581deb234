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

//! Input handling for the add-to-playlist modal.
//!
//! While the modal is open it consumes every key: navigation over the
//! entries, committing the choice, or closing without one.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{actions::events::AppEvent, components::PlaylistModal};

impl PlaylistModal {
    pub(crate) fn process_key(&mut self, key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.close(),

            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1) % self.entry_count();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(self.entry_count() - 1);
            }

            KeyCode::Enter => {
                if let Some(song) = self.song.clone() {
                    match self.playlists.get(self.selected) {
                        Some(playlist) => {
                            // TODO call the playlist service here once the
                            // backend grows one.
                            log::info!(
                                "Adding {:?} (song {}) to {:?} (playlist {})",
                                song.name,
                                song.id,
                                playlist.name,
                                playlist.id
                            );
                            event_tx.send(AppEvent::StatusMessage(format!(
                                "Added \"{}\" to \"{}\"!",
                                song.name, playlist.name
                            )))?;
                        }
                        None => {
                            event_tx.send(AppEvent::StatusMessage(String::from(
                                "Create New Playlist feature - coming soon!",
                            )))?;
                        }
                    }
                }
                self.close();
            }

            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use crate::model::{Song, mock_playlists};

    fn open_modal() -> PlaylistModal {
        let mut modal = PlaylistModal::new();
        modal.open(Song {
            name: String::from("Daydream"),
            ..Song::default()
        });
        modal.set_playlists(mock_playlists());
        modal
    }

    #[test]
    fn choosing_a_playlist_reports_the_addition_and_closes() {
        let (tx, rx) = mpsc::channel();
        let mut modal = open_modal();
        modal.selected = 1;

        modal.process_key(KeyEvent::from(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::StatusMessage(message) => {
                assert_eq!(message, "Added \"Daydream\" to \"Workout Mix\"!");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!modal.is_open());
    }

    #[test]
    fn the_trailing_entry_is_create_new() {
        let (tx, rx) = mpsc::channel();
        let mut modal = open_modal();
        modal.selected = modal.entry_count() - 1;

        modal.process_key(KeyEvent::from(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::StatusMessage(message) => assert!(message.contains("coming soon")),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!modal.is_open());
    }

    #[test]
    fn navigation_wraps_over_all_entries() {
        let (tx, _rx) = mpsc::channel();
        let mut modal = open_modal();

        modal.process_key(KeyEvent::from(KeyCode::Up), &tx).unwrap();
        assert_eq!(modal.selected, modal.entry_count() - 1);

        modal.process_key(KeyEvent::from(KeyCode::Down), &tx).unwrap();
        assert_eq!(modal.selected, 0);
    }

    #[test]
    fn escape_closes_without_reporting() {
        let (tx, rx) = mpsc::channel();
        let mut modal = open_modal();

        modal.process_key(KeyEvent::from(KeyCode::Esc), &tx).unwrap();

        assert!(!modal.is_open());
        assert!(rx.try_recv().is_err());
    }
}
