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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) panel_colour: Color,

    pub(crate) table_time_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,
    pub(crate) table_name_fg: Color,

    suggestion_colours: [Color; 8],
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 20, 38),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            panel_colour: Color::Rgb(40, 34, 58),

            table_time_fg: Color::Rgb(162, 161, 166),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_album_fg: Color::Rgb(179, 157, 219),
            table_name_fg: Color::Rgb(255, 255, 255),

            suggestion_colours: [
                Color::Rgb(102, 126, 234),
                Color::Rgb(240, 147, 251),
                Color::Rgb(79, 172, 254),
                Color::Rgb(67, 233, 123),
                Color::Rgb(250, 112, 154),
                Color::Rgb(168, 237, 234),
                Color::Rgb(255, 154, 158),
                Color::Rgb(48, 207, 208),
            ],
        }
    }

    /// Accent for the suggestion at `index`. The palette repeats, so every
    /// dropdown row gets a colour no matter how long the list is.
    pub(crate) fn suggestion_colour(&self, index: usize) -> Color {
        self.suggestion_colours[index % self.suggestion_colours.len()]
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Arguments
    ///
    /// * `colour` - The Ratatui color to convert. Must be an `Rgb` variant.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_colours_cycle() {
        let theme = Theme::default();

        assert_eq!(theme.suggestion_colour(0), theme.suggestion_colour(8));
        assert_ne!(theme.suggestion_colour(0), theme.suggestion_colour(1));
    }

    #[test]
    fn rgb_colours_render_as_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 20, 38)), "#181426");
    }
}
