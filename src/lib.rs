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

//! Conversion of integer numerals between bases, bit widths, and
//! signedness, with the two's-complement wraparound of fixed-width
//! registers.
//!
//! ```
//! use bitconv::{convert, Signedness::*};
//!
//! assert_eq!( convert("-3", 10, 8, Signed,   16, 8, Unsigned).unwrap(), "FD" );
//! assert_eq!( convert("FF", 16, 8, Unsigned, 10, 8, Signed  ).unwrap(), "-1" );
//! ```

pub mod batch;
pub mod convert;
pub mod error;
pub mod message;
pub mod num;

pub use num_bigint::BigInt;

pub use crate::convert::{convert, convert_between, format_output, parse_input, Encoding};
pub use crate::error::{Error, Result};
pub use crate::num::Base;
pub use crate::num::render::int_to_base;
pub use crate::num::width::{mask_for_bits, to_signed, to_unsigned, Signedness, Width};

/// Name of the program, used in diagnostics not related to an input file.
pub const PROGRAM_NAME: &str = "bitconv";
