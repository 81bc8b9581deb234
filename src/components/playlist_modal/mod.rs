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

//! Add-to-playlist modal.
//!
//! This module coordinates the overlay that files a selected song into one of
//! the user's playlists. While open it owns the keyboard. The playlist list
//! arrives asynchronously after opening, fetched through the command worker
//! like every other piece of remote-shaped data, even though today's source
//! is a local placeholder.

mod event;
mod render;

use crate::model::{Playlist, Song};

pub(crate) struct PlaylistModal {
    /// The song being filed. `Some` is what "open" means.
    pub(crate) song: Option<Song>,
    pub(crate) playlists: Vec<Playlist>,
    /// Index into the entry list: playlists first, create-new last.
    pub(crate) selected: usize,
}

impl PlaylistModal {
    pub(crate) fn new() -> Self {
        Self {
            song: None,
            playlists: vec![],
            selected: 0,
        }
    }

    pub(crate) fn open(&mut self, song: Song) {
        self.song = Some(song);
        self.playlists.clear();
        self.selected = 0;
    }

    pub(crate) fn close(&mut self) {
        self.song = None;
        self.playlists.clear();
        self.selected = 0;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.song.is_some()
    }

    pub(crate) fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        self.selected = 0;
    }

    /// The playlists plus the trailing create-new entry.
    pub(crate) fn entry_count(&self) -> usize {
        self.playlists.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_resets_previous_state() {
        let mut modal = PlaylistModal::new();
        modal.open(Song::default());
        modal.set_playlists(crate::model::mock_playlists());
        modal.selected = 3;
        modal.close();

        assert!(!modal.is_open());

        modal.open(Song::default());
        assert!(modal.is_open());
        assert_eq!(modal.selected, 0);
        assert!(modal.playlists.is_empty());
        assert_eq!(modal.entry_count(), 1);
    }
}
