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

//! Program entry point.

use std::env::args_os;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use bitconv::batch::{Batch, BatchError};
use bitconv::message::{file_error, Location, Message, Severity};
use bitconv::{convert_between, Encoding, PROGRAM_NAME};
use bitconv::Signedness::*;

/// Convert numbers between bases with configurable bit-width and
/// signed/unsigned interpretation.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version)]
struct Cli {
    /// Input value, e.g. 15, -3, FF, 1010 (ignored if --input-file is used)
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    /// Path to a text file; each non-empty line is treated as an input value
    #[arg(long, value_name = "PATH")]
    input_file: Option<PathBuf>,

    /// Input base, e.g. 2, 8, 10, 16
    #[arg(long, value_name = "BASE")]
    base_in: u32,

    /// Number of bits used to represent the input
    #[arg(long, value_name = "BITS", allow_negative_numbers = true)]
    bits_in: i64,

    /// Treat input as signed (two's complement) [default: unsigned]
    #[arg(long)]
    signed_in: bool,

    /// Output base, e.g. 2, 8, 10, 16
    #[arg(long, value_name = "BASE")]
    base_out: u32,

    /// Number of bits for output representation
    #[arg(long, value_name = "BITS", allow_negative_numbers = true)]
    bits_out: i64,

    /// Treat output as signed (two's complement) [default: unsigned]
    #[arg(long)]
    signed_out: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn input_encoding(&self) -> Encoding {
        Encoding::new(self.base_in, self.bits_in, self.signed_in.into())
    }

    fn output_encoding(&self) -> Encoding {
        Encoding::new(self.base_out, self.bits_out, self.signed_out.into())
    }
}

fn main() -> ExitCode {
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    // Bare invocation runs the demo; `help` prints the short usage text
    match args_os().nth(1) {
        None                                         => return demo(),
        Some(arg) if arg.eq_ignore_ascii_case("help") => return usage(),
        Some(_)                                      => (),
    }

    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new()
        .without_timestamps()
        .with_level(cli.log_level)
        .init()
    {
        eprintln!("{}", Message::new(Severity::Warning, &e));
    }

    match cli.input_file {
        Some(ref path) => run_batch(path, &Batch::new(cli.input_encoding(), cli.output_encoding())),
        None           => run_single(&cli),
    }
}

fn run_single(cli: &Cli) -> ExitCode {
    let Some(text) = cli.text.as_deref() else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "either provide <TEXT> or use --input-file")
            .exit()
    };

    match convert_between(text, &cli.input_encoding(), &cli.output_encoding()) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", Message::new(Severity::Error, &e));
            ExitCode::FAILURE
        },
    }
}

fn run_batch(path: &Path, batch: &Batch) -> ExitCode {
    let input = path.display().to_string();

    let err = match batch.run_file(path) {
        Ok(summary) => {
            eprintln!("{}", Message::at(&input, Location::UNKNOWN, Severity::Normal, &summary));
            return ExitCode::SUCCESS
        },
        Err(e) => e,
    };

    match err {
        BatchError::Open { ref path, ref source } => {
            let path = path.display().to_string();
            eprintln!("{}", file_error(&path, source));
        },
        BatchError::Io(ref e) => {
            eprintln!("{}", file_error(&input, e));
        },
        BatchError::Convert { line, ref source } => {
            eprintln!("{}", Message::at(&input, Location::line(line), Severity::Error, source));
        },
    }

    ExitCode::FAILURE
}

fn usage() -> ExitCode {
    println!("{}", USAGE.trim());
    ExitCode::SUCCESS
}

const USAGE: &str = "
Usage:
    bitconv help
        Show this help message (short description).

    bitconv <TEXT> --base-in B1 --bits-in N1 [--signed-in] \\
                   --base-out B2 --bits-out N2 [--signed-out]
        Convert <TEXT> from base B1 to base B2 with given bit-widths.

    bitconv --input-file PATH --base-in B1 --bits-in N1 [--signed-in] \\
                              --base-out B2 --bits-out N2 [--signed-out]
        Convert each non-empty line of PATH.  Results are printed and also
        written to PATH with _convert inserted before the extension.

    bitconv
        Show a few example conversions.

    Run `bitconv --help` for the full list of options.

Examples:
    # signed decimal -3 (8 bits) to signed binary (8 bits)
    bitconv --base-in 10 --bits-in 8 --signed-in --base-out 2 --bits-out 8 --signed-out -- -3

    # unsigned hex FF (8 bits) to signed decimal (8 bits)
    bitconv FF --base-in 16 --bits-in 8 --base-out 10 --bits-out 8 --signed-out
";

/// Example conversions shown by the demo.
static DEMO: [(&str, Encoding, Encoding); 4] = [
    ("-3",   Encoding::new(10, 8, Signed  ), Encoding::new( 2, 8, Signed  )),
    ("-3",   Encoding::new(10, 8, Signed  ), Encoding::new(16, 8, Unsigned)),
    ("FF",   Encoding::new(16, 8, Unsigned), Encoding::new(10, 8, Signed  )),
    ("1010", Encoding::new( 2, 4, Unsigned), Encoding::new(10, 8, Unsigned)),
];

fn demo() -> ExitCode {
    for (text, from, to) in DEMO.iter() {
        match convert_between(text, from, to) {
            Ok(result) => println!("{} -> {}: {} -> {}", from, to, text, result),
            Err(e) => {
                eprintln!("{}", Message::new(Severity::Error, &e));
                return ExitCode::FAILURE
            },
        }
    }
    ExitCode::SUCCESS
}
