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

//! Input handling for the search bar.
//!
//! Maps raw keyboard events to query edits, dropdown navigation, and the
//! actions the application dispatches on (autocomplete, search, focus
//! changes). Everything not handled here is delegated to the managed text
//! input component.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::components::{SearchBar, SearchBarAction};

impl SearchBar {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<SearchBarAction> {
        match key.code {
            KeyCode::Esc => {
                // First press closes the dropdown, second wipes the search.
                if self.show_dropdown {
                    self.show_dropdown = false;
                    self.dropdown_selected = None;
                    None
                } else {
                    self.clear();
                    Some(SearchBarAction::Cleared)
                }
            }

            KeyCode::Tab => Some(SearchBarAction::FocusResults),

            KeyCode::Down if self.show_dropdown => {
                self.select_next_suggestion();
                None
            }
            KeyCode::Up if self.show_dropdown => {
                self.select_previous_suggestion();
                None
            }

            KeyCode::Enter => {
                // Picking a highlighted suggestion searches by its name.
                if self.show_dropdown {
                    if let Some(song) = self.dropdown_selected.and_then(|i| self.suggestions.get(i))
                    {
                        self.input = Input::new(song.name.clone());
                    }
                }
                self.run_search()
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&Event::Key(key));

                if self.input.value() == before {
                    return None;
                }

                self.has_searched = false;
                let seq = self.next_seq();
                Some(SearchBarAction::QueryChanged {
                    query: self.input.value().to_string(),
                    seq,
                })
            }
        }
    }

    fn run_search(&mut self) -> Option<SearchBarAction> {
        let query = self.query().trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.is_loading = true;
        self.has_searched = true;
        self.show_dropdown = false;
        self.dropdown_selected = None;
        self.last_search = query.clone();

        let seq = self.next_seq();
        Some(SearchBarAction::RunSearch { query, seq })
    }

    fn select_next_suggestion(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.dropdown_selected = Some(match self.dropdown_selected {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        });
    }

    fn select_previous_suggestion(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.dropdown_selected = Some(match self.dropdown_selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Song;

    fn song(name: &str) -> Song {
        Song {
            name: String::from(name),
            ..Song::default()
        }
    }

    fn bar_with_dropdown(names: &[&str]) -> SearchBar {
        let mut bar = SearchBar::new();
        bar.suggestions = names.iter().map(|n| song(n)).collect();
        bar.show_dropdown = true;
        bar
    }

    #[test]
    fn typing_emits_query_changes_with_increasing_sequences() {
        let mut bar = SearchBar::new();

        let first = bar.process_key(KeyEvent::from(KeyCode::Char('d')));
        let second = bar.process_key(KeyEvent::from(KeyCode::Char('a')));

        assert_eq!(
            first,
            Some(SearchBarAction::QueryChanged {
                query: String::from("d"),
                seq: 1
            })
        );
        assert_eq!(
            second,
            Some(SearchBarAction::QueryChanged {
                query: String::from("da"),
                seq: 2
            })
        );
    }

    #[test]
    fn enter_on_an_empty_query_does_nothing() {
        let mut bar = SearchBar::new();

        assert_eq!(bar.process_key(KeyEvent::from(KeyCode::Enter)), None);
        assert!(!bar.has_searched);
    }

    #[test]
    fn enter_commits_the_trimmed_query() {
        let mut bar = SearchBar::new();
        bar.input = Input::new(String::from("  daydream  "));

        let action = bar.process_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(
            action,
            Some(SearchBarAction::RunSearch {
                query: String::from("daydream"),
                seq: 1
            })
        );
        assert!(bar.has_searched);
        assert!(bar.is_loading);
        assert_eq!(bar.last_search, "daydream");
    }

    #[test]
    fn picking_a_suggestion_searches_by_its_name() {
        let mut bar = bar_with_dropdown(&["Daydream", "Daylight"]);
        bar.process_key(KeyEvent::from(KeyCode::Down));
        bar.process_key(KeyEvent::from(KeyCode::Down));

        let action = bar.process_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(bar.query(), "Daylight");
        assert!(matches!(
            action,
            Some(SearchBarAction::RunSearch { query, .. }) if query == "Daylight"
        ));
        assert!(!bar.show_dropdown);
    }

    #[test]
    fn dropdown_navigation_wraps() {
        let mut bar = bar_with_dropdown(&["a", "b"]);

        bar.process_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(bar.dropdown_selected, Some(1));

        bar.process_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(bar.dropdown_selected, Some(0));
    }

    #[test]
    fn escape_closes_the_dropdown_before_clearing() {
        let mut bar = bar_with_dropdown(&["a"]);
        bar.input = Input::new(String::from("da"));

        assert_eq!(bar.process_key(KeyEvent::from(KeyCode::Esc)), None);
        assert!(!bar.show_dropdown);
        assert_eq!(bar.query(), "da");

        assert_eq!(
            bar.process_key(KeyEvent::from(KeyCode::Esc)),
            Some(SearchBarAction::Cleared)
        );
        assert!(bar.query().is_empty());
    }
}
