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

//! Fixed-width register interpretation of integers.

use std::fmt::{self, Display, Formatter};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use crate::error::{Error, Result};

/// Integer signedness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Signedness {
    /// Every bit is a magnitude bit.
    #[default]
    Unsigned,

    /// Two's complement: the top bit is the sign bit.
    Signed,
}

impl Signedness {
    /// Returns whether the signedness is [`Signedness::Signed`].
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }
}

impl From<bool> for Signedness {
    #[inline]
    fn from(signed: bool) -> Self {
        if signed { Signedness::Signed } else { Signedness::Unsigned }
    }
}

impl Display for Signedness {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            Signedness::Unsigned => "unsigned",
            Signedness::Signed   => "signed",
        })
    }
}

/// Largest supported bit width.  A register of this width takes 128 KiB.
pub const MAX_BITS: i64 = 1 << 20;

/// Width descriptor of a fixed-width register.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Width {
    bits:       usize,
    signedness: Signedness,
}

impl Width {
    /// Creates a [`Width`] of `bits` bits with the given signedness.
    ///
    /// Fails with [`Error::InvalidWidth`] if `bits` is not positive or exceeds
    /// [`MAX_BITS`].
    pub fn new(bits: i64, signedness: Signedness) -> Result<Self> {
        match bits {
            1..=MAX_BITS => Ok(Self { bits: bits as usize, signedness }),
            _            => Err(Error::InvalidWidth(bits)),
        }
    }

    /// Returns the count of bits.
    #[inline]
    pub const fn bits(self) -> usize {
        self.bits
    }

    /// Returns the signedness.
    #[inline]
    pub const fn signedness(self) -> Signedness {
        self.signedness
    }

    /// Returns the mask of all `bits` bits: `2^bits - 1`.
    pub fn mask(self) -> BigInt {
        (BigInt::one() << self.bits) - 1u8
    }

    /// Returns the smallest representable value.
    pub fn min(self) -> BigInt {
        match self.signedness {
            Signedness::Unsigned => BigInt::zero(),
            Signedness::Signed   => -self.sign_bit(),
        }
    }

    /// Returns the largest representable value.
    pub fn max(self) -> BigInt {
        match self.signedness {
            Signedness::Unsigned => self.mask(),
            Signedness::Signed   => self.sign_bit() - 1u8,
        }
    }

    /// Returns whether `value` is representable without wrapping.
    pub fn contains(self, value: &BigInt) -> bool {
        self.min() <= *value && *value <= self.max()
    }

    /// Returns the bit pattern of `value`: its low `bits` bits, read as an
    /// unsigned integer.  Negative values yield their two's complement.
    pub fn bit_pattern(self, value: &BigInt) -> BigInt {
        value & self.mask()
    }

    /// Returns the low `bits` bits of `value`, read as a two's-complement
    /// signed integer.
    pub fn sign_extend(self, value: &BigInt) -> BigInt {
        let pattern = self.bit_pattern(value);

        if pattern >= self.sign_bit() {
            pattern - (BigInt::one() << self.bits)
        } else {
            pattern
        }
    }

    /// Returns the low `bits` bits of `value`, read with the width's
    /// signedness.
    pub fn interpret(self, value: &BigInt) -> BigInt {
        match self.signedness {
            Signedness::Unsigned => self.bit_pattern(value),
            Signedness::Signed   => self.sign_extend(value),
        }
    }

    /// Returns `value` unchanged if representable; otherwise returns it
    /// wrapped around modulo `2^bits` into the representable range.
    pub fn wrap(self, value: BigInt) -> BigInt {
        if self.contains(&value) {
            value
        } else {
            self.interpret(&value)
        }
    }

    fn sign_bit(self) -> BigInt {
        BigInt::one() << (self.bits - 1)
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}-bit {}", self.bits, self.signedness)
    }
}

/// Returns a mask of `bits` one bits.
///
/// Fails with [`Error::InvalidWidth`] if `bits` is not positive or exceeds
/// [`MAX_BITS`].
pub fn mask_for_bits(bits: i64) -> Result<BigInt> {
    Ok(Width::new(bits, Signedness::Unsigned)?.mask())
}

/// Interprets the low `bits` bits of `value` as a two's-complement signed
/// integer.
pub fn to_signed(value: &BigInt, bits: i64) -> Result<BigInt> {
    Ok(Width::new(bits, Signedness::Signed)?.sign_extend(value))
}

/// Interprets the low `bits` bits of `value` as an unsigned integer.
pub fn to_unsigned(value: &BigInt, bits: i64) -> Result<BigInt> {
    Ok(Width::new(bits, Signedness::Unsigned)?.bit_pattern(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Signedness::*;

    fn int(n: i128) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn width_new_ok() {
        let width = Width::new(8, Signed).unwrap();

        assert_eq!( width.bits(),       8      );
        assert_eq!( width.signedness(), Signed );
    }

    #[test]
    fn width_new_invalid() {
        assert_eq!( Width::new( 0, Unsigned), Err(Error::InvalidWidth( 0)) );
        assert_eq!( Width::new(-1, Signed  ), Err(Error::InvalidWidth(-1)) );
    }

    #[test]
    fn width_new_max() {
        assert_eq!( Width::new(MAX_BITS, Unsigned).map(Width::bits), Ok(MAX_BITS as usize) );
        assert_eq!( mask_for_bits(MAX_BITS).map(|m| m.bits()),       Ok(MAX_BITS as u64)   );
    }

    #[test]
    fn width_new_too_wide() {
        assert_eq!( Width::new(MAX_BITS + 1, Unsigned), Err(Error::InvalidWidth(MAX_BITS + 1)) );
        assert_eq!( Width::new(i64::MAX,     Signed  ), Err(Error::InvalidWidth(i64::MAX))     );
        assert_eq!( mask_for_bits(i64::MAX),            Err(Error::InvalidWidth(i64::MAX))     );
        assert_eq!( to_signed(&int(1), i64::MAX),       Err(Error::InvalidWidth(i64::MAX))     );
    }

    #[test]
    fn width_range() {
        let u8_ = Width::new(8, Unsigned).unwrap();
        let i8_ = Width::new(8, Signed  ).unwrap();

        assert_eq!( u8_.min(), int(   0) );
        assert_eq!( u8_.max(), int( 255) );
        assert_eq!( i8_.min(), int(-128) );
        assert_eq!( i8_.max(), int( 127) );
    }

    #[test]
    fn width_range_one_bit() {
        let u1 = Width::new(1, Unsigned).unwrap();
        let i1 = Width::new(1, Signed  ).unwrap();

        assert_eq!( u1.min(), int( 0) );
        assert_eq!( u1.max(), int( 1) );
        assert_eq!( i1.min(), int(-1) );
        assert_eq!( i1.max(), int( 0) );
    }

    #[test]
    fn width_display() {
        assert_eq!( Width::new(12, Signed).unwrap().to_string(), "12-bit signed" );
    }

    #[test]
    fn mask_for_bits_ok() {
        assert_eq!( mask_for_bits( 1), Ok(int(1))                  );
        assert_eq!( mask_for_bits( 8), Ok(int(0xFF))               );
        assert_eq!( mask_for_bits(64), Ok(int(u64::MAX as i128))   );
    }

    #[test]
    fn mask_for_bits_invalid() {
        assert_eq!( mask_for_bits( 0), Err(Error::InvalidWidth( 0)) );
        assert_eq!( mask_for_bits(-8), Err(Error::InvalidWidth(-8)) );
    }

    #[test]
    fn to_signed_ok() {
        assert_eq!( to_signed(&int( 0x7F), 8), Ok(int( 127)) );
        assert_eq!( to_signed(&int( 0x80), 8), Ok(int(-128)) );
        assert_eq!( to_signed(&int( 0xFF), 8), Ok(int(  -1)) );
        assert_eq!( to_signed(&int(0x1FF), 8), Ok(int(  -1)) );
        assert_eq!( to_signed(&int(   -3), 8), Ok(int(  -3)) );
        assert_eq!( to_signed(&int( -129), 8), Ok(int( 127)) );
    }

    #[test]
    fn to_unsigned_ok() {
        assert_eq!( to_unsigned(&int( 256), 8), Ok(int(   0)) );
        assert_eq!( to_unsigned(&int(  -1), 8), Ok(int(0xFF)) );
        assert_eq!( to_unsigned(&int(  -3), 8), Ok(int(0xFD)) );
        assert_eq!( to_unsigned(&int(0x1234), 8), Ok(int(0x34)) );
    }

    #[test]
    fn to_signed_invalid() {
        assert_eq!( to_signed  (&int(1), 0), Err(Error::InvalidWidth(0)) );
        assert_eq!( to_unsigned(&int(1), 0), Err(Error::InvalidWidth(0)) );
    }

    #[test]
    fn to_signed_round_trip() {
        for bits in 1..=10 {
            let width = Width::new(bits, Signed).unwrap();
            let mut v = width.min();
            while v <= width.max() {
                let pattern = to_unsigned(&v, bits).unwrap();
                assert_eq!( to_signed(&pattern, bits).unwrap(), v );
                v += 1u8;
            }
        }
    }

    #[test]
    fn to_unsigned_idempotent() {
        for bits in 1..=10 {
            for n in -1100..=1100 {
                let once  = to_unsigned(&int(n),  bits).unwrap();
                let twice = to_unsigned(&once,    bits).unwrap();
                assert_eq!( once, twice );
            }
        }
    }

    #[test]
    fn wide_register() {
        // Wider than any native integer
        let width = Width::new(200, Signed).unwrap();
        let value = -(BigInt::one() << 199usize);

        assert_eq!( width.min(), value );
        assert!( width.contains(&value) );
        assert_eq!( width.sign_extend(&width.bit_pattern(&value)), value );
        assert_eq!( width.bit_pattern(&int(-1)), width.mask() );
    }

    #[test]
    fn wrap_in_range() {
        let width = Width::new(8, Signed).unwrap();

        assert_eq!( width.wrap(int(-128)), int(-128) );
        assert_eq!( width.wrap(int( 127)), int( 127) );
    }

    #[test]
    fn wrap_out_of_range() {
        let i8_ = Width::new(8, Signed  ).unwrap();
        let u8_ = Width::new(8, Unsigned).unwrap();

        assert_eq!( i8_.wrap(int( 128)), int(-128) );
        assert_eq!( i8_.wrap(int(-129)), int( 127) );
        assert_eq!( u8_.wrap(int( 256)), int(   0) );
        assert_eq!( u8_.wrap(int(  -1)), int( 255) );
    }
}
