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

//! Batch conversion of line-oriented input.

use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use log::debug;
use thiserror::Error;
use crate::convert::{convert_between, Encoding};

/// Suffix inserted before the extension of an input path to name its
/// companion output file.
pub const COMPANION_SUFFIX: &str = "_convert";

/// Failure of a batch conversion.
#[derive(Debug, Error)]
pub enum BatchError {
    /// An input or output file could not be opened.
    #[error("{}: {source}", .path.display())]
    Open {
        path:   PathBuf,
        source: io::Error,
    },

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A line is not convertible.
    #[error("line {line}: {source}")]
    Convert {
        /// The 1-based line number.
        line:   usize,
        source: crate::Error,
    },
}

/// Returns the path of the companion output file for the given input path:
/// the input path with [`COMPANION_SUFFIX`] inserted before the extension.
pub fn companion_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(COMPANION_SUFFIX);

    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}

/// Outcome of a successful batch conversion of a file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Summary {
    /// Count of values converted.
    pub count: usize,

    /// Path of the companion file written.
    pub output: PathBuf,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let noun = if self.count == 1 { "value" } else { "values" };
        write!(f, "converted {} {} into {}", self.count, noun, self.output.display())
    }
}

/// Conversion of many values with the same parameters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Batch {
    /// Encoding of input values.
    pub from: Encoding,

    /// Encoding of output values.
    pub to: Encoding,
}

impl Batch {
    /// Creates a new [`Batch`].
    pub const fn new(from: Encoding, to: Encoding) -> Self {
        Self { from, to }
    }

    /// Converts each non-blank line of `input`, writing each result as a line
    /// to both `echo` and `output`.  Surrounding whitespace of a line is
    /// ignored.
    ///
    /// Stops at the first line that fails to convert.  Results of preceding
    /// lines remain written.  Returns the count of values converted.
    pub fn run<R, E, W>(&self, input: R, echo: &mut E, output: &mut W)
        -> Result<usize, BatchError>
    where
        R: BufRead,
        E: Write + ?Sized,
        W: Write + ?Sized,
    {
        let mut count = 0;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let text = line.trim();

            // Skip blank lines
            if text.is_empty() { continue }

            let result = convert_between(text, &self.from, &self.to)
                .map_err(|source| BatchError::Convert { line: index + 1, source })?;

            writeln!(echo,   "{}", result)?;
            writeln!(output, "{}", result)?;
            count += 1;
        }

        Ok(count)
    }

    /// Converts each non-blank line of the file at `path`, printing each
    /// result to standard output and writing it to the companion file.  See
    /// [`companion_path`] and [`Batch::run`].
    ///
    /// Returns the count of values converted and the path of the companion
    /// file.
    pub fn run_file(&self, path: &Path) -> Result<Summary, BatchError> {
        let out_path = companion_path(path);

        let input = File::open(path)
            .map_err(|source| BatchError::Open { path: path.into(), source })?;
        let output = File::create(&out_path)
            .map_err(|source| BatchError::Open { path: out_path.clone(), source })?;

        let mut output = BufWriter::new(output);
        let stdout     = io::stdout();
        let mut echo   = stdout.lock();

        let count = self.run(BufReader::new(input), &mut echo, &mut output)?;
        output.flush()?;

        debug!("converted {} values from {} into {}",
            count, path.display(), out_path.display());

        Ok(Summary { count, output: out_path })
    }
}
