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

//! User-facing diagnostic messages.

use std::fmt::{self, Display, Formatter};
use std::io;
use colored::*;

/// A diagnostic message.
#[derive(Copy, Clone)]
pub struct Message<'a> {
    /// Severity of the message.
    pub severity: Severity,

    /// Path of an input file related to the message, or the program name if
    /// no file is related.
    pub source: &'a str,

    /// Line within the input file related to the message, or
    /// [`Location::UNKNOWN`] if no line is related.
    pub location: Location,

    /// Message content.
    content: &'a (dyn Display + 'a),
}

impl<'a> Message<'a> {
    /// Creates a `Message` with the given severity and content, without a
    /// related input file or line.
    #[inline]
    pub fn new(sev: Severity, content: &'a (dyn Display + 'a)) -> Self {
        Self::at(crate::PROGRAM_NAME, Location::UNKNOWN, sev, content)
    }

    /// Creates a `Message` with the given severity and content, related to
    /// the given input file and line.
    #[inline]
    pub fn at(
        path:    &'a str,
        loc:     Location,
        sev:     Severity,
        content: &'a (dyn Display + 'a),
    ) -> Self {
        Self {
            severity: sev,
            source:   path,
            location: loc,
            content,
        }
    }
}

impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}: {}{}",
            self.source,
            self.location,
            self.severity,
            self.content
        )
    }
}

/// Message severity levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    /// For informational messages.
    Normal,

    /// For potential problems that do not prevent conversion.
    Warning,

    /// For problems that end a conversion.  Results already produced are
    /// kept.
    Error,

    /// For problems that prevent any conversion.
    Fatal,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Severity::Normal  => Ok(()),
            Severity::Warning => write!(f, "{} ", "warning:".yellow().bold()),
            Severity::Error   => write!(f, "{} ", "error:"  .red()   .bold()),
            Severity::Fatal   => write!(f, "{} ", "fatal:"  .red()   .bold().underline()),
        }
    }
}

/// A line within an input file.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Location {
    /// The 1-based line number, or `0` to indicate an unknown line.
    pub line: usize,
}

impl Location {
    pub const UNKNOWN: Self = Self::line(0);

    #[inline]
    pub const fn line(line: usize) -> Self {
        Self { line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.line {
            0 => Ok(()),
            l => write!(f, ":{}", l),
        }
    }
}

/// Creates a message for an input or output file that could not be used.
pub fn file_error<'a>(path: &'a str, err: &'a io::Error) -> Message<'a> {
    let sev = match err.kind() {
        io::ErrorKind::NotFound => Severity::Fatal,
        _                       => Severity::Error,
    };
    Message::at(path, Location::UNKNOWN, sev, err)
}
