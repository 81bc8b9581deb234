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

//! Search input and autocomplete dropdown.
//!
//! This module owns the home view's query state: the text input component,
//! the suggestions shown beneath it while typing, and the request sequence
//! number that keeps late worker responses from clobbering a newer query.

mod event;
mod render;

use tui_input::Input;

use crate::model::Song;

/// The dropdown shows at most this many suggestions, however many the
/// backend returns.
pub(crate) const MAX_SUGGESTIONS: usize = 6;

/// What a handled key asks the application to do.
#[derive(Debug, PartialEq)]
pub(crate) enum SearchBarAction {
    /// The query text changed; the worker should consider autocompleting it.
    QueryChanged { query: String, seq: u64 },
    /// The user committed the query; run a full search.
    RunSearch { query: String, seq: u64 },
    /// Hand keyboard focus to the results table.
    FocusResults,
    /// The whole search state was reset; dependent views should empty too.
    Cleared,
}

pub(crate) struct SearchBar {
    pub(crate) input: Input,

    pub(crate) suggestions: Vec<Song>,
    pub(crate) dropdown_selected: Option<usize>,
    pub(crate) show_dropdown: bool,

    pub(crate) has_searched: bool,
    pub(crate) is_loading: bool,

    /// The query a full search last ran for, as shown in the results header.
    pub(crate) last_search: String,

    /// Sequence number of the newest request sent to the worker. Responses
    /// tagged with anything older are stale and get dropped.
    pub(crate) seq: u64,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            suggestions: vec![],
            dropdown_selected: None,
            show_dropdown: false,
            has_searched: false,
            is_loading: false,
            last_search: String::new(),
            seq: 0,
        }
    }

    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Takes a batch of autocomplete results from the worker.
    ///
    /// Stale batches are ignored. Fresh ones are capped at
    /// [`MAX_SUGGESTIONS`], and the dropdown only opens if there is something
    /// to show and the user has not already committed a full search.
    pub(crate) fn apply_suggestions(&mut self, seq: u64, songs: Vec<Song>) {
        if seq != self.seq {
            return;
        }

        self.suggestions = songs.into_iter().take(MAX_SUGGESTIONS).collect();
        self.show_dropdown = !self.suggestions.is_empty() && !self.has_searched;
        self.dropdown_selected = None;
    }

    /// Marks the in-flight full search finished. Returns whether the caller
    /// should keep the accompanying results, which it should not if a newer
    /// request has been issued since.
    pub(crate) fn finish_search(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }

        self.is_loading = false;
        true
    }

    /// Resets query, suggestions and flags to a blank slate. Bumps the
    /// sequence so whatever is still in flight lands stale.
    pub(crate) fn clear(&mut self) {
        self.input.reset();
        self.suggestions.clear();
        self.dropdown_selected = None;
        self.show_dropdown = false;
        self.has_searched = false;
        self.is_loading = false;
        self.last_search.clear();
        self.next_seq();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str) -> Song {
        Song {
            name: String::from(name),
            ..Song::default()
        }
    }

    #[test]
    fn suggestions_are_capped() {
        let mut bar = SearchBar::new();
        bar.seq = 1;

        let songs = (0..10).map(|i| song(&format!("song {i}"))).collect();
        bar.apply_suggestions(1, songs);

        assert_eq!(bar.suggestions.len(), MAX_SUGGESTIONS);
        assert!(bar.show_dropdown);
    }

    #[test]
    fn stale_suggestions_are_ignored() {
        let mut bar = SearchBar::new();
        bar.seq = 2;

        bar.apply_suggestions(1, vec![song("late")]);

        assert!(bar.suggestions.is_empty());
        assert!(!bar.show_dropdown);
    }

    #[test]
    fn the_dropdown_stays_hidden_after_a_search() {
        let mut bar = SearchBar::new();
        bar.seq = 1;
        bar.has_searched = true;

        bar.apply_suggestions(1, vec![song("a"), song("b")]);

        assert_eq!(bar.suggestions.len(), 2);
        assert!(!bar.show_dropdown);
    }

    #[test]
    fn empty_suggestions_close_the_dropdown() {
        let mut bar = SearchBar::new();
        bar.seq = 1;
        bar.show_dropdown = true;

        bar.apply_suggestions(1, vec![]);

        assert!(!bar.show_dropdown);
    }

    #[test]
    fn finishing_a_stale_search_discards_its_results() {
        let mut bar = SearchBar::new();
        bar.seq = 3;
        bar.is_loading = true;

        assert!(!bar.finish_search(2));
        assert!(bar.is_loading);

        assert!(bar.finish_search(3));
        assert!(!bar.is_loading);
    }

    #[test]
    fn clearing_invalidates_in_flight_requests() {
        let mut bar = SearchBar::new();
        bar.seq = 4;
        bar.suggestions = vec![song("a")];
        bar.show_dropdown = true;
        bar.has_searched = true;

        bar.clear();

        assert_eq!(bar.seq, 5);
        assert!(bar.query().is_empty());
        assert!(bar.suggestions.is_empty());
        assert!(!bar.show_dropdown);
        assert!(!bar.has_searched);
    }
}
