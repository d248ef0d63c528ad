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

//! Numeral scanning.

// Numeral format:
//
// [ws] [sign] [prefix] digit ( [_] digit )* [ws]
//
// where:
//   sign    +  -
//   prefix  0b  0o  0x   (only in the matching base; any letter case)
//
// A single separator may also directly follow the prefix: 0x_FF

use num_bigint::{BigInt, BigUint};
use crate::error::{Error, Result};
use super::Base;

/// Scans `text` as a numeral in the given base.
///
/// The result is the raw mathematical value, before any width is applied.
/// Fails with [`Error::Parse`] if `text` is empty or is not a numeral in
/// `base`.
pub(crate) fn scan(text: &str, base: Base) -> Result<BigInt> {
    let radix = base.radix();
    let fail  = || Error::parse(text, radix);

    let mut input = text.trim().as_bytes();

    // Sign
    let negative = match input.first() {
        Some(b'-') => { input = &input[1..]; true  },
        Some(b'+') => { input = &input[1..]; false },
        _          => false,
    };

    // Prefix
    let prefixed = match (input, base.prefix()) {
        ([b'0', p, rest @ ..], Some(letter)) if p.to_ascii_lowercase() == letter => {
            input = rest;
            true
        },
        _ => false,
    };

    let mut digits = Vec::with_capacity(input.len());
    let mut sep_ok = prefixed;  // whether a separator may appear next
    let mut at_sep = false;     // whether the last character was a separator

    for &byte in input {
        // Get digit value, SEP for separator, or ETC for anything else
        let ch = if byte < 0x80 { CHARS[byte as usize] } else { ETC };

        if (ch as u32) < radix {
            digits.push(ch);
            sep_ok = true;
            at_sep = false;
        } else if ch == SEP && sep_ok {
            sep_ok = false;
            at_sep = true;
        } else {
            return Err(fail())
        }
    }

    if digits.is_empty() || at_sep {
        return Err(fail())
    }

    let magnitude = BigUint::from_radix_be(&digits, radix).ok_or_else(fail)?;
    let value     = BigInt::from(magnitude);

    Ok(if negative { -value } else { value })
}

// ----------------------------------------------------------------------------

const SEP: u8 = 0b_1000_0000; // separator        [_]
const ETC: u8 = 0b_1111_1111; // everything else

/// Mapping of 7-bit ASCII to digit values.
static CHARS: [u8; 128] = {
    const __: u8 = ETC;
[
//  xx0     xx1     xx2     xx3     xx4     xx5     xx6     xx7
    __,     __,     __,     __,     __,     __,     __,     __,     // 00x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 01x │·tn··r··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 02x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 03x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 04x │ !"#$%&'│
    __,     __,     __,     __,     __,     __,     __,     __,     // 05x │()*+,-./│
     0,      1,      2,      3,      4,      5,      6,      7,     // 06x │01234567│
     8,      9,     __,     __,     __,     __,     __,     __,     // 07x │89:;<=>?│
    __,     10,     11,     12,     13,     14,     15,     16,     // 10x │@ABCDEFG│
    17,     18,     19,     20,     21,     22,     23,     24,     // 11x │HIJKLMNO│
    25,     26,     27,     28,     29,     30,     31,     32,     // 12x │PQRSTUVW│
    33,     34,     35,     __,     __,     __,     __,     SEP,    // 13x │XYZ[\]^_│
    __,     10,     11,     12,     13,     14,     15,     16,     // 14x │`abcdefg│
    17,     18,     19,     20,     21,     22,     23,     24,     // 15x │hijklmno│
    25,     26,     27,     28,     29,     30,     31,     32,     // 16x │pqrstuvw│
    33,     34,     35,     __,     __,     __,     __,     __,     // 17x │xyz{|}~·│
]};

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use super::*;
    use super::Base::*;

    fn int(n: i128) -> BigInt {
        BigInt::from(n)
    }

    fn assert_invalid(text: &str, base: Base) {
        assert_eq!( scan(text, base), Err(Error::parse(text, base.radix())) );
    }

    #[test]
    fn scan_zero() {
        assert_eq!( scan("0", Dec), Ok(BigInt::zero()) );
    }

    #[test]
    fn scan_ok() {
        assert_eq!( scan("42",   Dec), Ok(int(42))   );
        assert_eq!( scan("1010", Bin), Ok(int(10))   );
        assert_eq!( scan("777",  Oct), Ok(int(511))  );
        assert_eq!( scan("FF",   Hex), Ok(int(255))  );
    }

    #[test]
    fn scan_any_case() {
        assert_eq!( scan("ff",   Hex),       Ok(int(255))  );
        assert_eq!( scan("aBcD", Hex),       Ok(int(0xABCD)) );
        assert_eq!( scan("z",    Other(36)), Ok(int(35))   );
        assert_eq!( scan("Z",    Other(36)), Ok(int(35))   );
    }

    #[test]
    fn scan_other_base() {
        assert_eq!( scan("212", Other(3)),  Ok(int(23))   );
        assert_eq!( scan("10",  Other(36)), Ok(int(36))   );
    }

    #[test]
    fn scan_sign() {
        assert_eq!( scan("-3",  Dec), Ok(int(-3))  );
        assert_eq!( scan("+3",  Dec), Ok(int( 3))  );
        assert_eq!( scan("-0",  Dec), Ok(int( 0))  );
        assert_eq!( scan("-FF", Hex), Ok(int(-255)) );
    }

    #[test]
    fn scan_whitespace() {
        assert_eq!( scan("  15\t", Dec), Ok(int(15)) );
        assert_eq!( scan(" -7\r\n", Dec), Ok(int(-7)) );
    }

    #[test]
    fn scan_prefix() {
        assert_eq!( scan("0b1010",  Bin), Ok(int(10))   );
        assert_eq!( scan("0B1010",  Bin), Ok(int(10))   );
        assert_eq!( scan("0o17",    Oct), Ok(int(15))   );
        assert_eq!( scan("0xFF",    Hex), Ok(int(255))  );
        assert_eq!( scan("-0x80",   Hex), Ok(int(-128)) );
        assert_eq!( scan("0x_FF",   Hex), Ok(int(255))  );
    }

    #[test]
    fn scan_prefix_of_other_base_is_digits() {
        // 0, B, 1 are all hexadecimal digits
        assert_eq!( scan("0b1", Hex), Ok(int(0x0B1)) );
    }

    #[test]
    fn scan_prefix_only() {
        assert_invalid("0x", Hex);
        assert_invalid("0b", Bin);
        assert_invalid("0x_", Hex);
    }

    #[test]
    fn scan_prefix_in_wrong_base() {
        assert_invalid("0xFF", Dec);
        assert_invalid("0o17", Hex);
    }

    #[test]
    fn scan_separators() {
        assert_eq!( scan("1_000",     Dec), Ok(int(1000))   );
        assert_eq!( scan("1111_0000", Bin), Ok(int(0xF0))   );
        assert_eq!( scan("DEAD_BEEF", Hex), Ok(int(0xDEAD_BEEF)) );
    }

    #[test]
    fn scan_separators_misplaced() {
        assert_invalid("_1",   Dec);
        assert_invalid("1_",   Dec);
        assert_invalid("1__0", Dec);
        assert_invalid("-_1",  Dec);
        assert_invalid("_",    Dec);
    }

    #[test]
    fn scan_empty() {
        assert_invalid("",    Dec);
        assert_invalid("   ", Dec);
        assert_invalid("-",   Dec);
        assert_invalid("+",   Dec);
    }

    #[test]
    fn scan_invalid_digit() {
        assert_invalid("12",  Bin);
        assert_invalid("8",   Oct);
        assert_invalid("1A",  Dec);
        assert_invalid("FG",  Hex);
        assert_invalid("3",   Other(3));
    }

    #[test]
    fn scan_invalid_char() {
        assert_invalid("1 2",  Dec);
        assert_invalid("- 1",  Dec);
        assert_invalid("+-1",  Dec);
        assert_invalid("1.5",  Dec);
        assert_invalid("١٢",   Dec);
    }

    #[test]
    fn scan_huge() {
        let text  = "999_999_999_999_999_999_999_999_999_999_999_999_999_999";
        let value = scan(text, Dec).unwrap();

        assert_eq!( value.to_string(), text.replace('_', "") );
    }
}
