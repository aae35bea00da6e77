/*
normalize.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordhunt.

Wordhunt is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordhunt is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordhunt. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Normalize the spellings of the words so that they can be compared with the grid letters.

/// Whether the character is dropped during normalization.
///
/// Whitespace, hyphens, slashes, and the Unicode dashes are ignored, so that "ice-cream" and
/// "ICE CREAM" both become "ICECREAM".
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '/' | '\u{2010}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}')
}

/// Return the normalized form of a word: uppercase, without separators.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|ch| !is_separator(*ch))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Return the word with its characters in reverse order.
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strip_separators() {
        assert_eq!(normalize("ice-cream"), "ICECREAM");
        assert_eq!(normalize(" ice cream "), "ICECREAM");
        assert_eq!(normalize("and/or"), "ANDOR");
        assert_eq!(normalize("long\u{2014}dash\u{2013}en"), "LONGDASHEN");
        assert_eq!(normalize("\tcat\n"), "CAT");
    }

    #[test]
    fn uppercase_non_ascii() {
        assert_eq!(normalize("haŭto"), "HAŬTO");
        assert_eq!(normalize("straße"), "STRASSE");
    }

    #[test]
    fn reverse() {
        assert_eq!(reversed("CAT"), "TAC");
        assert_eq!(reversed(""), "");
        assert_eq!(reversed("HAŬTO"), "OTŬAH");
    }
}
