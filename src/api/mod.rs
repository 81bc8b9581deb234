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

//! HTTP client for the song search service.
//!
//! This module is the application's only external interface: a thin wrapper
//! over a blocking `reqwest` client issuing `GET {base_url}/search?name=` and
//! decoding the JSON body. It lives on the command worker thread, the UI
//! never talks to the network directly.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::model::Song;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search returned an unrecognised body: {0}")]
    Body(#[from] serde_json::Error),
}

/// The search endpoint answers with either a bare array of songs or an
/// envelope object carrying the array in a `data` field. Both shapes are in
/// the wild, so both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchBody {
    Songs(Vec<Song>),
    Wrapped { data: Vec<Song> },
}

pub(crate) struct SongApi {
    client: Client,
    base_url: String,
}

impl SongApi {
    /// Builds a client for the given service base URL, e.g.
    /// `http://localhost:8080/v1/songs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub(crate) fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Searches songs by name.
    ///
    /// An empty or whitespace-only query returns no results without issuing a
    /// request. The query is trimmed before it goes on the wire.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or a
    /// body that is neither a song array nor a `data` envelope. Callers are
    /// expected to treat any of these as "no results" and log them.
    pub(crate) fn search_songs(&self, query: &str) -> Result<Vec<Song>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("name", query)])
            .send()?
            .error_for_status()?;

        parse_search_body(&response.text()?)
    }
}

fn parse_search_body(body: &str) -> Result<Vec<Song>, ApiError> {
    let body: SearchBody = serde_json::from_str(body)?;

    Ok(match body {
        SearchBody::Songs(songs) => songs,
        SearchBody::Wrapped { data } => data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_song_array() {
        let songs = parse_search_body(r#"[{"name": "Blue"}, {"name": "Green"}]"#).unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].name, "Blue");
        assert_eq!(songs[1].name, "Green");
    }

    #[test]
    fn parses_a_data_envelope() {
        let body = r#"{"data": [{"name": "Blue", "artist": "Foals", "duration": 252}], "total": 1}"#;
        let songs = parse_search_body(body).unwrap();

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].artist, "Foals");
        assert_eq!(songs[0].duration, 252);
    }

    #[test]
    fn rejects_anything_else() {
        assert!(parse_search_body("not json").is_err());
        assert!(parse_search_body(r#"{"data": 3}"#).is_err());
        assert!(parse_search_body(r#""a string""#).is_err());
    }

    #[test]
    fn empty_queries_do_not_touch_the_network() {
        // Port 1 is never listening; a request would error rather than hang.
        let api = SongApi::new("http://127.0.0.1:1").unwrap();

        assert!(api.search_songs("").unwrap().is_empty());
        assert!(api.search_songs("   ").unwrap().is_empty());
    }
}
