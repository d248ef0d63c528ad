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

//! Conversion pipeline.
//!
//! A conversion reads a numeral as a register of one width and signedness,
//! yielding a canonical integer, then writes that integer as a register of
//! another width and signedness.  Values that do not fit a register wrap
//! around as two's complement.

use std::fmt::{self, Display, Formatter};
use log::{debug, trace};
use num_bigint::BigInt;
use crate::error::Result;
use crate::num::{Base, render::{render, render_padded}, scan::scan};
use crate::num::width::{Signedness, Width};

/// One side of a conversion: base, bit width, and signedness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Encoding {
    /// Radix of the numeral.
    pub base: u32,

    /// Bit width of the register.
    pub bits: i64,

    /// Signedness of the register.
    pub signedness: Signedness,
}

impl Encoding {
    /// Creates a new [`Encoding`].
    #[inline]
    pub const fn new(base: u32, bits: i64, signedness: Signedness) -> Self {
        Self { base, bits, signedness }
    }

    /// Reads `text` in this encoding.  See [`parse_input`].
    pub fn parse(&self, text: &str) -> Result<BigInt> {
        parse_input(text, self.base, self.bits, self.signedness)
    }

    /// Writes `value` in this encoding.  See [`format_output`].
    pub fn format(&self, value: &BigInt) -> Result<String> {
        format_output(value, self.base, self.bits, self.signedness)
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match Base::new(self.base) {
            Ok(base) => write!(f, "{} {}",      self.signedness, base)?,
            Err(_)   => write!(f, "{} base {}", self.signedness, self.base)?,
        }
        write!(f, " ({} bits)", self.bits)
    }
}

/// Reads `text` as a numeral in base `base_in`, held in a register of
/// `bits_in` bits with the given signedness.
///
/// Returns the value of the register.  Digits beyond the register width are
/// discarded; this is not an error.
///
/// Fails with:
/// - [`Error::InvalidBase`](crate::Error::InvalidBase) if `base_in` is
///   outside `2..=36`;
/// - [`Error::Parse`](crate::Error::Parse) if `text` is not a numeral in
///   that base;
/// - [`Error::InvalidWidth`](crate::Error::InvalidWidth) if `bits_in` is not
///   positive.
pub fn parse_input(
    text:      &str,
    base_in:   u32,
    bits_in:   i64,
    signed_in: Signedness,
) -> Result<BigInt> {
    let base  = Base::new(base_in)?;
    let raw   = scan(text, base)?;
    let width = Width::new(bits_in, signed_in)?;
    let value = width.interpret(&raw);

    debug!("read {:?} as {} {}: {}", text, width, base, value);
    Ok(value)
}

/// Writes `value` as a numeral in base `base_out`, held in a register of
/// `bits_out` bits with the given signedness.
///
/// A value that does not fit the register wraps around first.  Binary, octal,
/// and hexadecimal show the register's bit pattern, zero-padded to the count
/// of digits the register needs.  Decimal shows the value as read with the
/// register's signedness.  Any other base shows the bit pattern unpadded.
///
/// Fails with [`Error::InvalidBase`](crate::Error::InvalidBase) if
/// `base_out` is outside `2..=36`, or with
/// [`Error::InvalidWidth`](crate::Error::InvalidWidth) if `bits_out` is not
/// positive.
pub fn format_output(
    value:      &BigInt,
    base_out:   u32,
    bits_out:   i64,
    signed_out: Signedness,
) -> Result<String> {
    let width = Width::new(bits_out, signed_out)?;
    let base  = Base::new(base_out)?;

    let value = width.wrap(value.clone());
    let bits  = width.bit_pattern(&value);
    trace!("{} register holds {} as bit pattern {:#x}", width, value, bits);

    let text = match base {
        Base::Dec if signed_out.is_signed() => width.sign_extend(&bits).to_string(),
        Base::Dec                           => bits.to_string(),
        _ => match base.pad_width(width.bits()) {
            Some(len) => render_padded(&bits, base, len),
            None      => render(&bits, base),
        },
    };

    debug!("wrote {} as {} {}: {}", value, width, base, text);
    Ok(text)
}

/// Converts `text` from one base, bit width, and signedness to another.
///
/// Equivalent to [`parse_input`] followed by [`format_output`].  The first
/// error of either step is returned unchanged.
pub fn convert(
    text:       &str,
    base_in:    u32,
    bits_in:    i64,
    signed_in:  Signedness,
    base_out:   u32,
    bits_out:   i64,
    signed_out: Signedness,
) -> Result<String> {
    let value = parse_input(text, base_in, bits_in, signed_in)?;
    format_output(&value, base_out, bits_out, signed_out)
}

/// Converts `text` from the encoding `from` to the encoding `to`.
pub fn convert_between(text: &str, from: &Encoding, to: &Encoding) -> Result<String> {
    to.format(&from.parse(text)?)
}
