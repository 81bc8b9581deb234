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

//! Input handling for the results table.
//!
//! Maps raw terminal keyboard events to table navigation. Returns whether the
//! key was consumed, so unhandled keys can fall through to the global
//! shortcuts.

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::SongTable;

impl SongTable {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),
            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    #[test]
    fn unknown_keys_are_not_consumed() {
        let mut table = SongTable::new();
        table.set_songs(vec![Song::default()]);

        assert!(table.process_key(KeyEvent::from(KeyCode::Char('j'))));
        assert!(!table.process_key(KeyEvent::from(KeyCode::Char('q'))));
    }
}
