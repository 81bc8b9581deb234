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

//! Search results table and selection management.
//!
//! This module provides the table component for full search results,
//! holding the song list and the highlighted row the add-to-playlist flow
//! starts from.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Song;

pub(crate) struct SongTable {
    pub(crate) songs: Vec<Song>,
    pub(crate) table_state: TableState,
}

impl SongTable {
    pub(crate) fn new() -> Self {
        Self {
            songs: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the table contents, highlighting the first row so the table
    /// is immediately navigable.
    pub(crate) fn set_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        self.table_state
            .select(if self.songs.is_empty() { None } else { Some(0) });
    }

    pub(crate) fn clear(&mut self) {
        self.songs.clear();
        self.table_state.select(None);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        self.table_state.selected().and_then(|i| self.songs.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.songs.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        self.table_state.select(self.songs.len().checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(count: usize) -> SongTable {
        let mut table = SongTable::new();
        table.set_songs(
            (0..count)
                .map(|i| Song {
                    id: i as i64,
                    name: format!("song {i}"),
                    ..Song::default()
                })
                .collect(),
        );
        table
    }

    #[test]
    fn new_results_select_the_first_row() {
        let table = table_with(3);

        assert_eq!(table.selected_song().unwrap().name, "song 0");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut table = table_with(3);

        table.goto_previous();
        assert_eq!(table.table_state.selected(), Some(2));

        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn first_and_last_jumps() {
        let mut table = table_with(3);

        table.goto_last();
        assert_eq!(table.table_state.selected(), Some(2));

        table.goto_first();
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn empty_tables_have_no_selection() {
        let mut table = table_with(2);

        table.clear();

        assert!(table.is_empty());
        assert!(table.selected_song().is_none());

        // Navigation on an empty table is a no-op, not a panic.
        table.goto_next();
        table.goto_last();
        assert!(table.selected_song().is_none());
    }
}
