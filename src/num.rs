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

//! Number support.

pub mod render;
pub mod scan;
pub mod width;

use std::fmt::{self, Display, Formatter};
use crate::error::{Error, Result};

/// Digits of every supported base, in order of value.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.  Limited by the size of [`DIGITS`].
pub const MAX_RADIX: u32 = DIGITS.len() as u32;

/// Numeric bases.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Base {
    /// Binary.
    Bin,

    /// Octal.
    Oct,

    /// Decimal.
    Dec,

    /// Hexadecimal.
    Hex,

    /// Any other radix from 2 to 36.  Use [`Base::new`] to check the radix.
    Other(u32),
}

impl Base {
    /// Returns the base with the given radix number.
    ///
    /// Fails with [`Error::InvalidBase`] if `radix` is outside `2..=36`.
    pub fn new(radix: u32) -> Result<Self> {
        use Base::*;

        match radix {
             2                    => Ok(Bin),
             8                    => Ok(Oct),
            10                    => Ok(Dec),
            16                    => Ok(Hex),
            MIN_RADIX..=MAX_RADIX => Ok(Other(radix)),
            _                     => Err(Error::InvalidBase(radix)),
        }
    }

    /// Returns the radix number, such as 8 for octal.
    #[inline]
    pub const fn radix(self) -> u32 {
        use Base::*;

        match self {
            Bin      =>  2,
            Oct      =>  8,
            Dec      => 10,
            Hex      => 16,
            Other(r) =>  r,
        }
    }

    /// Returns the letter of the literal prefix for the base, such as `x` for
    /// hexadecimal, if the base has one.
    #[inline]
    pub const fn prefix(self) -> Option<u8> {
        match self {
            Base::Bin => Some(b'b'),
            Base::Oct => Some(b'o'),
            Base::Hex => Some(b'x'),
            _         => None,
        }
    }

    /// Returns the count of digits needed to show every bit pattern of a
    /// `bits`-wide register, or `None` if the base is not rendered as a
    /// fixed-width bit pattern.
    #[inline]
    pub const fn pad_width(self, bits: usize) -> Option<usize> {
        match self {
            Base::Bin => Some(bits),
            Base::Oct => Some((bits + 2) / 3),
            Base::Hex => Some((bits + 3) / 4),
            _         => None,
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Base::Bin      => f.write_str("binary"),
            Base::Oct      => f.write_str("octal"),
            Base::Dec      => f.write_str("decimal"),
            Base::Hex      => f.write_str("hexadecimal"),
            Base::Other(r) => write!(f, "base {}", r),
        }
    }
}
