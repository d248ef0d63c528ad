// This file is part of bitconv, a base and bit-width converter.
// Copyright 2022 Jeffrey Sharp
//
// SPDX-License-Identifier: GPL-3.0-or-later
//
// bitconv is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// bitconv is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with bitconv.  If not, see <http://www.gnu.org/licenses/>.

//! Conversion errors.

use thiserror::Error;

/// Result type of conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion errors.
///
/// Every error ends the conversion that raised it.  Values that do not fit a
/// width are never errors; they wrap.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum Error {
    /// The text is not a numeral in the given base.  Empty text is included.
    #[error("invalid numeral for base {base}: {text:?}")]
    Parse {
        /// The offending text, as given.
        text: String,

        /// The radix the text was read in.
        base: u32,
    },

    /// A bit width is zero, negative, or larger than
    /// [`MAX_BITS`](crate::num::width::MAX_BITS).
    #[error("invalid bit width: {0} (must be between 1 and {})", crate::num::width::MAX_BITS)]
    InvalidWidth(i64),

    /// A base is outside the supported range `2..=36`.
    #[error("invalid base: {0} (must be between 2 and 36)")]
    InvalidBase(u32),
}

impl Error {
    pub(crate) fn parse(text: &str, base: u32) -> Self {
        Self::Parse { text: text.to_owned(), base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse() {
        assert_eq!(
            Error::parse("12G", 16).to_string(),
            "invalid numeral for base 16: \"12G\""
        );
    }

    #[test]
    fn display_invalid_width() {
        assert_eq!(
            Error::InvalidWidth(-4).to_string(),
            "invalid bit width: -4 (must be between 1 and 1048576)"
        );
    }

    #[test]
    fn display_invalid_base() {
        assert_eq!(
            Error::InvalidBase(1).to_string(),
            "invalid base: 1 (must be between 2 and 36)"
        );
    }
}
