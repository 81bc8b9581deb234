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

//! Interactive UI components.
//!
//! Each component pairs its state with its event handling and rendering:
//!
//! * [`search_bar`]: the home view's query input and autocomplete dropdown.
//! * [`song_table`]: the search results table.
//! * [`playlist_modal`]: the add-to-playlist overlay.

pub(crate) mod playlist_modal;
pub(crate) mod search_bar;
pub(crate) mod song_table;

pub(crate) use playlist_modal::PlaylistModal;
pub(crate) use search_bar::{SearchBar, SearchBarAction};
pub(crate) use song_table::SongTable;
