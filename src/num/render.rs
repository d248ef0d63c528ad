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

//! Numeral rendering.
//!
//! Only [`int_to_base`] is public; it validates the radix before rendering.
//! A [`Base`] built directly as `Base::Other(r)` cannot reach the renderer:
//!
//! ```compile_fail
//! use bitconv::{BigInt, Base};
//! use bitconv::num::render::render;
//!
//! render(&BigInt::from(5), Base::Other(1));
//! ```

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use crate::error::Result;
use super::{Base, DIGITS};

/// Renders `value` in the given radix, without padding.
///
/// Digits above 9 are uppercase letters.  Negative values are rendered as a
/// `-` followed by the digits of the magnitude.  Fails with
/// [`Error::InvalidBase`](crate::Error::InvalidBase) if `base` is outside
/// `2..=36`.
pub fn int_to_base(value: &BigInt, base: u32) -> Result<String> {
    Ok(render(value, Base::new(base)?))
}

/// Renders `value` in the given base, without padding.
pub(crate) fn render(value: &BigInt, base: Base) -> String {
    if value.is_zero() {
        return "0".to_owned()
    }

    // Least significant digit first
    let digits = value.magnitude().to_radix_le(base.radix());

    let mut s = String::with_capacity(digits.len() + 1);
    if value.sign() == Sign::Minus {
        s.push('-');
    }
    s.extend(digits.iter().rev().map(|&d| DIGITS[d as usize] as char));
    s
}

/// Renders `value` in the given base, padded on the left with zeros to at
/// least `width` characters.
pub(crate) fn render_padded(value: &BigInt, base: Base, width: usize) -> String {
    format!("{:0>1$}", render(value, base), width)
}
