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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the songs
//! returned by the search service and the playlists a song can be filed into.

use serde::Deserialize;

/// A song as returned by the search endpoint.
///
/// The backend does not document its payload, so every field is defaulted:
/// whatever subset of fields a result object carries, it still parses. Only
/// `name` is load-bearing, it is what gets displayed and what a picked
/// suggestion searches for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Song {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    /// Duration in seconds.
    pub(crate) duration: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Playlist {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) song_count: u32,
}

/// The current user's playlists.
///
/// FIXME placeholder data until there is a playlist API to call.
pub(crate) fn mock_playlists() -> Vec<Playlist> {
    [
        (1, "Favorites", 42),
        (2, "Workout Mix", 28),
        (3, "Chill Vibes", 35),
        (4, "Party Hits", 51),
        (5, "Study Focus", 19),
    ]
    .into_iter()
    .map(|(id, name, song_count)| Playlist {
        id,
        name: String::from(name),
        song_count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_playlists_match_the_placeholder_fixture() {
        let playlists = mock_playlists();

        assert_eq!(playlists.len(), 5);
        assert_eq!(playlists[0].name, "Favorites");
        assert_eq!(playlists[0].song_count, 42);
        assert_eq!(playlists[4].id, 5);
        assert_eq!(playlists[4].name, "Study Focus");
    }

    #[test]
    fn songs_parse_from_partial_objects() {
        let song: Song = serde_json::from_str(r#"{"name": "Daydream"}"#).unwrap();

        assert_eq!(song.name, "Daydream");
        assert_eq!(song.id, 0);
        assert!(song.artist.is_empty());
        assert_eq!(song.duration, 0);
    }
}
